//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 用法
//! ```text
//! sdltb-batch <INPUT_DIR> [PROJECT_DIR]
//! ```
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/pack.rs`

use clap::Parser;
use std::path::PathBuf;

/// sdltb-batch - SDLTB 术语库批量打包驱动
#[derive(Parser, Debug)]
#[command(name = "sdltb-batch")]
#[command(version)]
#[command(about = "Batch-convert SDLTB termbase files with SDLPPXPackager", long_about = None)]
pub struct Cli {
    /// Directory containing .sdltb termbase files
    pub input_dir: PathBuf,

    /// Project directory passed to SDLPPXPackager via --project-dir
    #[arg(default_value = "./results")]
    pub project_dir: PathBuf,

    /// Case-insensitive filename suffix used to select input files
    #[arg(long, default_value = ".sdltb")]
    pub suffix: String,

    /// Path to the SDLPPXPackager executable
    /// (default: build/install/SDLPPXPackager/bin/SDLPPXPackager next to this program)
    #[arg(long)]
    pub packager_bin: Option<PathBuf>,

    /// Sort input files lexicographically instead of native directory order
    #[arg(long)]
    pub sort: bool,
}
