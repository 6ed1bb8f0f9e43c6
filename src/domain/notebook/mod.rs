//! Notebook Context - 笔记本限界上下文
//!
//! 职责:
//! - 笔记本命名规则（前缀 + 扩展名）
//! - 预览截断与外部查看链接

mod errors;
mod preview;
mod value_objects;

pub use errors::NotebookError;
pub use preview::{
    PreviewPolicy, PreviewText, DEFAULT_PREVIEW_CHARS, DEFAULT_TRUNCATION_MARKER,
    DEFAULT_VIEWER_URL_TEMPLATE, NOTEBOOK_PLACEHOLDER, PREVIEW_LANGUAGE,
};
pub use value_objects::{NamingRule, NotebookRef, DEFAULT_EXTENSION, DEFAULT_PREFIX};
