//! Data Transfer Objects

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{AudioOutcome, NotebookPreview, PromptOutcome};
use crate::domain::VideoResult;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Notebook DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct NotebookListResponse {
    pub notebooks: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewNotebookRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct NotebookPreviewResponse {
    pub name: String,
    pub content: String,
    pub language: String,
    pub viewer_url: String,
}

impl From<NotebookPreview> for NotebookPreviewResponse {
    fn from(preview: NotebookPreview) -> Self {
        Self {
            name: preview.name,
            content: preview.content,
            language: preview.language.to_string(),
            viewer_url: preview.viewer_url,
        }
    }
}

// ============================================================================
// Prompt DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SubmitPromptRequest {
    #[serde(default)]
    pub question: String,
}

/// 语音播放数据
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AudioPayload {
    Ready {
        content_type: String,
        /// Base64 编码的 MP3
        data: String,
    },
    Failed {
        notice: String,
    },
}

/// 视频渲染数据
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VideoPayload {
    /// 未配置视频凭证
    Skipped,
    Ready { url: String },
    Failed { notice: String },
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub run_id: Uuid,
    pub answer: String,
    pub audio: AudioPayload,
    pub video: VideoPayload,
    pub notices: Vec<String>,
    pub answered_at: String,
}

impl From<AudioOutcome> for AudioPayload {
    fn from(outcome: AudioOutcome) -> Self {
        match outcome {
            AudioOutcome::Ready(clip) => AudioPayload::Ready {
                data: BASE64.encode(&clip.data),
                content_type: clip.content_type,
            },
            AudioOutcome::Failed { notice } => AudioPayload::Failed { notice },
        }
    }
}

impl From<Option<VideoResult>> for VideoPayload {
    fn from(result: Option<VideoResult>) -> Self {
        match result {
            None => VideoPayload::Skipped,
            Some(VideoResult::Ready { url }) => VideoPayload::Ready { url },
            Some(VideoResult::Failed { notice }) => VideoPayload::Failed { notice },
        }
    }
}

impl From<PromptOutcome> for PromptResponse {
    fn from(outcome: PromptOutcome) -> Self {
        Self {
            run_id: outcome.run_id,
            answer: outcome.answer.into_string(),
            audio: outcome.audio.into(),
            video: outcome.video.into(),
            notices: outcome.notices,
            answered_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Answer, AudioClip};
    use serde_json::json;

    #[test]
    fn test_prompt_response_shape() {
        let outcome = PromptOutcome {
            run_id: Uuid::nil(),
            answer: Answer::new("X"),
            audio: AudioOutcome::Ready(AudioClip::mp3(b"mp3".to_vec())),
            video: Some(VideoResult::Ready {
                url: "https://talks.d-id.com/abc123.mp4".to_string(),
            }),
            notices: vec![],
        };

        let value = serde_json::to_value(PromptResponse::from(outcome)).unwrap();

        assert_eq!(value["answer"], "X");
        assert_eq!(
            value["audio"],
            json!({"status": "ready", "content_type": "audio/mpeg", "data": "bXAz"})
        );
        assert_eq!(
            value["video"],
            json!({"status": "ready", "url": "https://talks.d-id.com/abc123.mp4"})
        );
    }

    #[test]
    fn test_skipped_and_failed_payloads() {
        assert_eq!(
            serde_json::to_value(VideoPayload::from(None)).unwrap(),
            json!({"status": "skipped"})
        );
        let audio = AudioPayload::from(AudioOutcome::Failed {
            notice: "Speech synthesis failed".to_string(),
        });
        assert_eq!(
            serde_json::to_value(audio).unwrap(),
            json!({"status": "failed", "notice": "Speech synthesis failed"})
        );
    }
}
