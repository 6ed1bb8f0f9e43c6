//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：笔记本列表与预览

mod notebook_queries;

pub mod handlers;

pub use notebook_queries::*;
