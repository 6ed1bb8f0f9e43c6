//! Prompt HTTP Handlers
//!
//! 提交问题（Trigger B）: 一次请求内完成问答、语音和视频

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::SubmitPrompt;
use crate::infrastructure::http::dto::{ApiResponse, PromptResponse, SubmitPromptRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 提交问题
pub async fn submit_prompt(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitPromptRequest>,
) -> Result<Json<ApiResponse<PromptResponse>>, ApiError> {
    let command = SubmitPrompt {
        question: req.question,
    };

    let outcome = state.submit_prompt_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(outcome.into())))
}
