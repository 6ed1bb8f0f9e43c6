//! Notebook Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotebookError {
    #[error("笔记本不存在: {0}")]
    NotFound(String),

    #[error("无效的笔记本名称: {0}")]
    InvalidName(String),

    #[error("读取笔记本失败: {0}")]
    IoError(String),
}
