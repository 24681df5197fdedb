//! # sdltb-batch - SDLTB 术语库批量打包驱动
//!
//! 扫描目录中的 .sdltb 术语库文件，逐个调用外部 SDLPPXPackager
//! 可执行文件打包，单个文件失败不会中断整个批次。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/      (命令行参数定义)
//!   ├── commands/ (命令执行逻辑)
//!   ├── batch/    (文件收集与顺序执行)
//!   ├── utils/    (工具函数)
//!   └── error.rs  (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
