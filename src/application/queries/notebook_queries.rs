//! Notebook Queries

/// 列出所有 AGI 笔记本查询
#[derive(Debug, Clone)]
pub struct ListNotebooks;

/// 预览笔记本查询（选择框切换时触发）
#[derive(Debug, Clone)]
pub struct PreviewNotebook {
    pub name: String,
}
