//! Notebook Store Port - 笔记本文件访问抽象
//!
//! 只读：列出目录中的笔记本、读取单个笔记本全文

use async_trait::async_trait;

use crate::domain::{NotebookError, NotebookRef};

/// Notebook Store Port
#[async_trait]
pub trait NotebookStorePort: Send + Sync {
    /// 列出符合命名规则的笔记本（按文件名字典序）
    ///
    /// 没有匹配项时返回空列表
    async fn list(&self) -> Result<Vec<NotebookRef>, NotebookError>;

    /// 读取笔记本全文（UTF-8）
    async fn read(&self, notebook: &NotebookRef) -> Result<String, NotebookError>;
}
