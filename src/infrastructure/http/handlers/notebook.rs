//! Notebook HTTP Handlers
//!
//! 选择框切换（Trigger A）: 列表 + 预览

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{ListNotebooks, PreviewNotebook};
use crate::infrastructure::http::dto::{
    ApiResponse, NotebookListResponse, NotebookPreviewResponse, PreviewNotebookRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取笔记本列表
pub async fn list_notebooks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<NotebookListResponse>>, ApiError> {
    let notebooks = state.list_notebooks_handler.handle(ListNotebooks).await?;

    Ok(Json(ApiResponse::success(NotebookListResponse { notebooks })))
}

/// 预览笔记本
pub async fn preview_notebook(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PreviewNotebookRequest>,
) -> Result<Json<ApiResponse<NotebookPreviewResponse>>, ApiError> {
    let query = PreviewNotebook { name: req.name };

    let preview = state.preview_notebook_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(preview.into())))
}
