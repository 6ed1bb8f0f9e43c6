//! Avatar Video Port - 数字人视频抽象

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Answer;

/// 结果视频 URL 模板中的任务 ID 占位符
pub const TALK_ID_PLACEHOLDER: &str = "{id}";

/// 视频生成失败时展示给用户的提示
pub const VIDEO_FAILED_NOTICE: &str = "D-ID video failed.";

/// 数字人视频错误
#[derive(Debug, Error)]
pub enum AvatarVideoError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Service returned HTTP {0}")]
    Rejected(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 提交成功后的视频任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkJob {
    /// 任务 ID
    pub id: String,
    /// 由 ID 推导出的结果视频 URL（不轮询渲染状态）
    pub result_url: String,
}

/// Avatar Video Port
#[async_trait]
pub trait AvatarVideoPort: Send + Sync {
    /// 提交一次视频生成任务
    async fn create_talk(&self, answer: &Answer) -> Result<TalkJob, AvatarVideoError>;
}
