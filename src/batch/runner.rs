//! # 顺序批量执行器
//!
//! 逐个调用外部打包器处理文件，单个文件失败不中断批次。
//!
//! ## 功能
//! - 一次只运行一个子进程，阻塞等待其退出后才启动下一个
//! - 子进程 stdio 直接继承父进程，输出原样打印到当前终端
//! - 区分「退出码非零」与「进程无法启动」两类失败
//!
//! ## 依赖关系
//! - 被 `commands/pack.rs` 调用
//! - 使用 `utils/output.rs`

use crate::utils::output;

use std::path::{Path, PathBuf};
use std::process::Command;

/// 单次调用结果
#[derive(Debug)]
pub enum InvocationOutcome {
    /// 退出码为 0
    Succeeded,
    /// 进程正常退出但退出码非零（被信号终止时为 None）
    Failed(Option<i32>),
    /// 进程无法启动
    LaunchError(std::io::Error),
}

/// 批量执行结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub succeeded: usize,
    /// 退出码非零数量
    pub failed: usize,
    /// 启动失败数量
    pub launch_errors: usize,
    /// 失败详情 (文件路径, 错误描述)
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并单次调用结果
    fn merge(&mut self, file: &Path, outcome: &InvocationOutcome) {
        match outcome {
            InvocationOutcome::Succeeded => self.succeeded += 1,
            InvocationOutcome::Failed(code) => {
                self.failed += 1;
                let desc = match code {
                    Some(c) => format!("exit code {}", c),
                    None => "terminated by signal".to_string(),
                };
                self.failures.push((file.display().to_string(), desc));
            }
            InvocationOutcome::LaunchError(e) => {
                self.launch_errors += 1;
                self.failures.push((file.display().to_string(), e.to_string()));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.succeeded + self.failed + self.launch_errors
    }
}

/// 顺序批量执行器
pub struct BatchRunner {
    /// 打包器可执行文件路径
    packager_bin: PathBuf,
    /// 传给 --project-dir 的项目目录
    project_dir: PathBuf,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(packager_bin: PathBuf, project_dir: PathBuf) -> Self {
        Self {
            packager_bin,
            project_dir,
        }
    }

    /// 按给定顺序处理文件列表
    ///
    /// 每个文件恰好产生一次调用，无自动重试。任何失败都只记录并继续。
    pub fn run(&self, files: &[PathBuf]) -> BatchResult {
        let mut result = BatchResult::default();

        for file in files {
            output::print_info(&format!("Processing: {}", file.display()));

            let outcome = self.run_one(file);
            match &outcome {
                InvocationOutcome::Succeeded => {
                    output::print_success(&format!("Done: {}", file.display()));
                }
                InvocationOutcome::Failed(Some(code)) => {
                    output::print_error(&format!(
                        "Failed (exit code={}): {}",
                        code,
                        file.display()
                    ));
                }
                InvocationOutcome::Failed(None) => {
                    output::print_error(&format!(
                        "Failed (terminated by signal): {}",
                        file.display()
                    ));
                }
                InvocationOutcome::LaunchError(e) => {
                    output::print_error(&format!(
                        "Failed to launch packager for {}: {}",
                        file.display(),
                        e
                    ));
                }
            }

            // 不中断整个批次，继续下一个文件
            result.merge(file, &outcome);
        }

        result
    }

    /// 调用一次打包器并阻塞等待其退出
    pub fn run_one(&self, file: &Path) -> InvocationOutcome {
        // stdio 继承父进程，子进程输出直接打印到当前终端
        let status = Command::new(&self.packager_bin)
            .arg("--project-dir")
            .arg(&self.project_dir)
            .arg(file)
            .status();

        match status {
            Ok(s) if s.success() => InvocationOutcome::Succeeded,
            Ok(s) => InvocationOutcome::Failed(s.code()),
            Err(e) => InvocationOutcome::LaunchError(e),
        }
    }
}
