//! Prompt Command Handlers
//!
//! 一次提交内顺序执行: 问答 -> 语音合成（尽力而为）-> 数字人视频（可选）
//!
//! - 问答失败: 直接返回错误，不调用语音与视频
//! - 语音失败: 记录提示，继续视频步骤
//! - 未配置视频凭证: 跳过视频，不产生任何调用

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::SubmitPrompt;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AnswerServicePort, AvatarVideoPort, SpeechSynthesizerPort, VIDEO_FAILED_NOTICE,
};
use crate::domain::{Answer, AudioClip, Question, VideoResult};

/// 开始生成视频时展示的提示
pub const VIDEO_PENDING_NOTICE: &str = "📽️ Generating D-ID talking face video...";

// ============================================================================
// Response DTOs
// ============================================================================

/// 语音步骤结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioOutcome {
    Ready(AudioClip),
    Failed { notice: String },
}

/// 一次提交的全部渲染产物
#[derive(Debug, Clone)]
pub struct PromptOutcome {
    pub run_id: Uuid,
    pub answer: Answer,
    pub audio: AudioOutcome,
    /// None 表示未配置视频凭证，已跳过
    pub video: Option<VideoResult>,
    /// 信息类提示（按出现顺序）
    pub notices: Vec<String>,
}

// ============================================================================
// SubmitPrompt
// ============================================================================

/// SubmitPrompt Handler
pub struct SubmitPromptHandler {
    answer_service: Arc<dyn AnswerServicePort>,
    speech: Arc<dyn SpeechSynthesizerPort>,
    video: Option<Arc<dyn AvatarVideoPort>>,
}

impl SubmitPromptHandler {
    pub fn new(
        answer_service: Arc<dyn AnswerServicePort>,
        speech: Arc<dyn SpeechSynthesizerPort>,
        video: Option<Arc<dyn AvatarVideoPort>>,
    ) -> Self {
        Self {
            answer_service,
            speech,
            video,
        }
    }

    pub async fn handle(&self, command: SubmitPrompt) -> Result<PromptOutcome, ApplicationError> {
        let question = Question::new(command.question).map_err(ApplicationError::validation)?;
        let run_id = Uuid::new_v4();

        tracing::info!(
            run_id = %run_id,
            question_len = question.as_str().len(),
            "Prompt submitted"
        );

        // 1. 问答（失败即终止）
        let answer = self.answer_service.ask(&question).await.map_err(|e| {
            tracing::warn!(run_id = %run_id, error = %e, "Answer service failed");
            ApplicationError::from(e)
        })?;

        // 2. 语音合成（失败不影响文本回答）
        let audio = match self.speech.synthesize(&answer).await {
            Ok(clip) => AudioOutcome::Ready(clip),
            Err(e) => {
                tracing::warn!(run_id = %run_id, error = %e, "Speech synthesis failed");
                AudioOutcome::Failed {
                    notice: format!("Speech synthesis failed: {}", e),
                }
            }
        };

        // 3. 数字人视频（仅在配置凭证时）
        let mut notices = Vec::new();
        let video = match &self.video {
            Some(client) => {
                notices.push(VIDEO_PENDING_NOTICE.to_string());
                Some(match client.create_talk(&answer).await {
                    Ok(job) => {
                        tracing::info!(run_id = %run_id, talk_id = %job.id, "Talk submitted");
                        VideoResult::Ready {
                            url: job.result_url,
                        }
                    }
                    Err(e) => {
                        tracing::warn!(run_id = %run_id, error = %e, "Avatar video failed");
                        VideoResult::Failed {
                            notice: VIDEO_FAILED_NOTICE.to_string(),
                        }
                    }
                })
            }
            None => {
                tracing::debug!(run_id = %run_id, "No video credential, skipping avatar video");
                None
            }
        };

        tracing::info!(
            run_id = %run_id,
            answer_len = answer.as_str().len(),
            audio_ok = matches!(audio, AudioOutcome::Ready(_)),
            video_attempted = video.is_some(),
            "Prompt completed"
        );

        Ok(PromptOutcome {
            run_id,
            answer,
            audio,
            video,
            notices,
        })
    }
}
