//! Speech Synthesizer Port - 语音合成抽象

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Answer, AudioClip};

/// 语音合成错误
#[derive(Debug, Error)]
pub enum SpeechSynthesisError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Speech Synthesizer Port
///
/// 音色在适配器构造时固定
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 将回答文本合成为 MP3 音频
    async fn synthesize(&self, answer: &Answer) -> Result<AudioClip, SpeechSynthesisError>;
}
