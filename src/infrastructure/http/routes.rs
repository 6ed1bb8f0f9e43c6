//! HTTP Routes
//!
//! API Endpoints:
//! - /                      GET   单页 UI
//! - /api/ping              GET   健康检查
//! - /api/notebook/list     GET   列出 AGI 笔记本
//! - /api/notebook/preview  POST  预览笔记本
//! - /api/prompt/submit     POST  提交问题（回答 + 语音 + 视频）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/notebook", notebook_routes())
        .nest("/prompt", prompt_routes())
}

/// Notebook 路由
fn notebook_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_notebooks))
        .route("/preview", post(handlers::preview_notebook))
}

/// Prompt 路由
fn prompt_routes() -> Router<Arc<AppState>> {
    Router::new().route("/submit", post(handlers::submit_prompt))
}
