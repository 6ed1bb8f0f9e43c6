//! File Notebook Store - 文件系统笔记本读取实现
//!
//! 实现 NotebookStorePort trait，只扫描单层目录

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::NotebookStorePort;
use crate::domain::{NamingRule, NotebookError, NotebookRef};

/// 文件系统笔记本存储
pub struct FsNotebookStore {
    /// 笔记本目录
    base_dir: PathBuf,
    /// 命名规则
    rule: NamingRule,
}

impl FsNotebookStore {
    pub fn new(base_dir: impl AsRef<Path>, rule: NamingRule) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            rule,
        }
    }

    fn notebook_path(&self, notebook: &NotebookRef) -> PathBuf {
        self.base_dir.join(notebook.as_str())
    }
}

#[async_trait]
impl NotebookStorePort for FsNotebookStore {
    async fn list(&self) -> Result<Vec<NotebookRef>, NotebookError> {
        let mut entries = fs::read_dir(&self.base_dir).await.map_err(|e| {
            NotebookError::IoError(format!("{}: {}", self.base_dir.display(), e))
        })?;

        let mut notebooks = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| NotebookError::IoError(e.to_string()))?
        {
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }

            // 非 UTF-8 文件名不可能符合命名规则
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };

            if let Ok(notebook) = NotebookRef::parse(name, &self.rule) {
                notebooks.push(notebook);
            }
        }

        notebooks.sort();

        tracing::debug!(
            dir = %self.base_dir.display(),
            count = notebooks.len(),
            "Notebooks listed"
        );

        Ok(notebooks)
    }

    async fn read(&self, notebook: &NotebookRef) -> Result<String, NotebookError> {
        let path = self.notebook_path(notebook);
        fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => NotebookError::NotFound(notebook.to_string()),
            _ => NotebookError::IoError(format!("{}: {}", path.display(), e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(notebooks: Vec<NotebookRef>) -> Vec<String> {
        notebooks.into_iter().map(NotebookRef::into_string).collect()
    }

    #[tokio::test]
    async fn test_list_filters_and_sorts() {
        let temp_dir = tempdir().unwrap();
        for name in [
            "agi_voice.ipynb",
            "readme.ipynb",
            "agi_notes.txt",
            "agi1.ipynb",
            "notes.md",
        ] {
            std::fs::write(temp_dir.path().join(name), "{}").unwrap();
        }
        std::fs::create_dir(temp_dir.path().join("agi_dir.ipynb")).unwrap();
        std::fs::create_dir(temp_dir.path().join("nested")).unwrap();
        std::fs::write(temp_dir.path().join("nested").join("agi2.ipynb"), "{}").unwrap();

        let store = FsNotebookStore::new(temp_dir.path(), NamingRule::default());
        let listed = names(store.list().await.unwrap());

        assert_eq!(listed, vec!["agi1.ipynb", "agi_voice.ipynb"]);
    }

    #[tokio::test]
    async fn test_list_keeps_inner_double_dots() {
        let temp_dir = tempdir().unwrap();
        for name in ["agi1.ipynb", "agi..ipynb", "agi_v1..final.ipynb"] {
            std::fs::write(temp_dir.path().join(name), "{}").unwrap();
        }

        let store = FsNotebookStore::new(temp_dir.path(), NamingRule::default());
        let listed = names(store.list().await.unwrap());

        assert_eq!(listed, vec!["agi..ipynb", "agi1.ipynb", "agi_v1..final.ipynb"]);

        let nb = NotebookRef::parse("agi..ipynb", &NamingRule::default()).unwrap();
        assert_eq!(store.read(&nb).await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_list_empty_dir() {
        let temp_dir = tempdir().unwrap();
        let store = FsNotebookStore::new(temp_dir.path(), NamingRule::default());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_missing_dir_is_error() {
        let temp_dir = tempdir().unwrap();
        let store = FsNotebookStore::new(temp_dir.path().join("gone"), NamingRule::default());
        assert!(matches!(store.list().await, Err(NotebookError::IoError(_))));
    }

    #[tokio::test]
    async fn test_read_notebook() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("agi1.ipynb"), "{\"cells\": []}").unwrap();

        let store = FsNotebookStore::new(temp_dir.path(), NamingRule::default());
        let nb = NotebookRef::parse("agi1.ipynb", &NamingRule::default()).unwrap();

        assert_eq!(store.read(&nb).await.unwrap(), "{\"cells\": []}");
    }

    #[tokio::test]
    async fn test_read_missing_notebook() {
        let temp_dir = tempdir().unwrap();
        let store = FsNotebookStore::new(temp_dir.path(), NamingRule::default());
        let nb = NotebookRef::parse("agi9.ipynb", &NamingRule::default()).unwrap();

        assert!(matches!(store.read(&nb).await, Err(NotebookError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_non_utf8_is_io_error() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("agi1.ipynb"), [0xFF, 0xFE, 0x00]).unwrap();

        let store = FsNotebookStore::new(temp_dir.path(), NamingRule::default());
        let nb = NotebookRef::parse("agi1.ipynb", &NamingRule::default()).unwrap();

        assert!(matches!(store.read(&nb).await, Err(NotebookError::IoError(_))));
    }
}
