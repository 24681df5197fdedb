//! # 批量处理模块
//!
//! 提供文件收集与顺序执行能力。
//!
//! ## 功能
//! - 收集匹配后缀的文件列表
//! - 逐个启动外部进程并阻塞等待退出
//! - 结果统计与汇总
//!
//! ## 依赖关系
//! - 被 `commands/pack.rs` 使用
//! - 使用 `walkdir` 遍历目录

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, InvocationOutcome};
