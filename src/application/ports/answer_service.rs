//! Answer Service Port - 大模型问答抽象
//!
//! 定义 chat-completion 调用的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Answer, Question};

/// 问答服务错误
#[derive(Debug, Error)]
pub enum AnswerServiceError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Answer Service Port
///
/// 每次提交只发送一次请求，不重试、不流式
#[async_trait]
pub trait AnswerServicePort: Send + Sync {
    /// 以单条 user 消息发送问题，返回第一个 choice 的内容
    async fn ask(&self, question: &Question) -> Result<Answer, AnswerServiceError>;
}
