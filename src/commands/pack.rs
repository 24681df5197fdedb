//! # pack 命令实现
//!
//! 批量调用 SDLPPXPackager 处理 .sdltb 文件。
//!
//! ## 功能
//! - 校验输入目录与打包器可执行文件
//! - 收集匹配后缀的文件列表
//! - 顺序执行打包，单文件失败不中断批次
//! - 输出汇总统计
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `batch/`, `utils/output.rs`

use crate::batch::{BatchRunner, FileCollector};
use crate::cli::Cli;
use crate::error::{BatchError, Result};
use crate::utils::output;

use std::env;
use std::path::{Path, PathBuf};

/// 执行 pack 命令
pub fn execute(args: Cli) -> Result<()> {
    output::print_header("SDLTB Batch Packaging");

    // 验证输入目录
    let input_dir = absolutize(&args.input_dir);
    if !input_dir.is_dir() {
        return Err(BatchError::DirectoryNotFound {
            path: input_dir.display().to_string(),
        });
    }

    // 验证打包器可执行文件
    let packager_bin = match args.packager_bin {
        Some(ref p) => absolutize(p),
        None => default_packager_bin()?,
    };
    if !packager_bin.is_file() {
        return Err(BatchError::PackagerNotFound {
            path: packager_bin.display().to_string(),
        });
    }

    // 收集待处理文件（只扫描一次）
    let files = FileCollector::new(input_dir.clone())
        .with_suffix(&args.suffix)
        .sorted(args.sort)
        .collect()?;

    if files.is_empty() {
        return Err(BatchError::NoFilesFound {
            suffix: args.suffix,
            dir: input_dir.display().to_string(),
        });
    }

    // 项目目录由 SDLPPXPackager 自行创建，这里只解析路径
    let project_dir = absolutize(&args.project_dir);

    output::print_info(&format!(
        "Found {} '*{}' files, processing one by one...",
        files.len(),
        args.suffix
    ));

    let runner = BatchRunner::new(packager_bin, project_dir);
    let result = runner.run(&files);

    output::print_separator();
    for (path, reason) in &result.failures {
        output::print_warning(&format!("{}: {}", path, reason));
    }

    // 单文件失败不影响批次退出码
    output::print_done(&format!(
        "Batch finished: {} files processed, {} succeeded, {} failed, {} launch errors",
        result.total(),
        result.succeeded,
        result.failed,
        result.launch_errors
    ));

    Ok(())
}

/// 将路径解析为基于当前工作目录的绝对路径
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// 默认打包器位置：本程序所在目录下的 Gradle installDist 布局
fn default_packager_bin() -> Result<PathBuf> {
    let exe = env::current_exe()
        .map_err(|e| BatchError::Other(format!("Failed to locate own executable: {}", e)))?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();

    let bin_name = if cfg!(windows) {
        "SDLPPXPackager.bat"
    } else {
        "SDLPPXPackager"
    };

    Ok(exe_dir
        .join("build")
        .join("install")
        .join("SDLPPXPackager")
        .join("bin")
        .join(bin_name))
}
