//! # 文件收集器
//!
//! 按后缀过滤收集输入目录中的待处理文件。
//!
//! ## 功能
//! - 非递归列出目录直接子项
//! - 大小写不敏感的后缀匹配
//! - 可选字典序排序（默认保留目录原生顺序）
//!
//! ## 依赖关系
//! - 被 `commands/pack.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{BatchError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 文件名后缀（已转为小写）
    suffix: String,
    /// 是否按字典序排序
    sorted: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            suffix: ".sdltb".to_string(),
            sorted: false,
        }
    }

    /// 设置后缀过滤（大小写不敏感）
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_lowercase();
        self
    }

    /// 设置是否按字典序排序
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// 收集所有匹配的文件，返回绝对路径列表
    ///
    /// 只扫描一次，不进入子目录。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.input).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| BatchError::DirectoryReadError {
                path: self.input.display().to_string(),
                source: e.into(),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            if self.matches_suffix(entry.path()) {
                files.push(entry.into_path());
            }
        }

        if self.sorted {
            files.sort();
        }

        Ok(files)
    }

    /// 大小写不敏感的后缀匹配
    fn matches_suffix(&self, path: &Path) -> bool {
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_lowercase().ends_with(&self.suffix),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_suffix_match_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "glossary.sdltb");
        touch(tmp.path(), "Archive.SDLTB");
        touch(tmp.path(), "notes.txt");

        let files = FileCollector::new(tmp.path().to_path_buf())
            .with_suffix(".sdltb")
            .sorted(true)
            .collect()
            .unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["Archive.SDLTB", "glossary.sdltb"]);
    }

    #[test]
    fn test_empty_directory_yields_no_files() {
        let tmp = TempDir::new().unwrap();
        let files = FileCollector::new(tmp.path().to_path_buf())
            .collect()
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_subdirectories_are_not_entered() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "top.sdltb");
        let sub = tmp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        touch(&sub, "deep.sdltb");

        let files = FileCollector::new(tmp.path().to_path_buf())
            .collect()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "top.sdltb");
    }

    #[test]
    fn test_collected_paths_are_absolute() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.sdltb");

        let files = FileCollector::new(tmp.path().to_path_buf())
            .collect()
            .unwrap();
        assert!(files.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_sorted_order_is_lexicographic() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "c.sdltb");
        touch(tmp.path(), "a.sdltb");
        touch(tmp.path(), "b.sdltb");

        let files = FileCollector::new(tmp.path().to_path_buf())
            .sorted(true)
            .collect()
            .unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.sdltb", "b.sdltb", "c.sdltb"]);
    }
}
