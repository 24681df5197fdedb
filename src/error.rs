//! # 统一错误处理模块
//!
//! 定义 sdltb-batch 的所有错误类型，使用 `thiserror` 派生。
//!
//! 注意：单个文件打包失败不是这里的错误——它由
//! `batch::runner::InvocationOutcome` 表达，批次会继续执行。
//! 这里只定义使整个程序以非零退出码终止的错误。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// sdltb-batch 统一错误类型
#[derive(Error, Debug)]
pub enum BatchError {
    // ─────────────────────────────────────────────────────────────
    // 前置条件错误（在启动任何子进程之前检查）
    // ─────────────────────────────────────────────────────────────
    #[error("Input directory not found or not a directory: {path}")]
    DirectoryNotFound { path: String },

    #[error("SDLPPXPackager executable not found: {path}\nBuild it first with: ./gradlew installDist")]
    PackagerNotFound { path: String },

    #[error("No '*{suffix}' files found in: {dir}")]
    NoFilesFound { suffix: String, dir: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BatchError>;
