//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod notebook_handlers;

pub use notebook_handlers::*;
