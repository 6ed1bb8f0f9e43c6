//! HTTP 测试辅助：桩端口与基于临时目录的应用状态

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

use super::state::AppState;
use crate::application::{
    AnswerServiceError, AnswerServicePort, AvatarVideoError, AvatarVideoPort,
    SpeechSynthesisError, SpeechSynthesizerPort, TalkJob,
};
use crate::domain::{Answer, AudioClip, NamingRule, PreviewPolicy, Question};
use crate::infrastructure::adapters::FsNotebookStore;

/// 固定回答；None 表示服务失败
pub struct StubAnswer(pub Option<&'static str>);

#[async_trait]
impl AnswerServicePort for StubAnswer {
    async fn ask(&self, _question: &Question) -> Result<Answer, AnswerServiceError> {
        self.0
            .map(Answer::new)
            .ok_or_else(|| AnswerServiceError::ServiceError("HTTP 401".to_string()))
    }
}

pub struct StubSpeech {
    pub calls: AtomicUsize,
}

impl StubSpeech {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl SpeechSynthesizerPort for StubSpeech {
    async fn synthesize(&self, _answer: &Answer) -> Result<AudioClip, SpeechSynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AudioClip::mp3(b"mp3".to_vec()))
    }
}

pub struct StubVideo;

#[async_trait]
impl AvatarVideoPort for StubVideo {
    async fn create_talk(&self, _answer: &Answer) -> Result<TalkJob, AvatarVideoError> {
        Ok(TalkJob {
            id: "abc123".to_string(),
            result_url: "https://talks.d-id.com/abc123.mp4".to_string(),
        })
    }
}

/// 含两个合法笔记本和一个无关文件的临时目录
pub fn notebook_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("agi1.ipynb"), "{\"cells\": []}").unwrap();
    std::fs::write(dir.path().join("agi_voice.ipynb"), "{}").unwrap();
    std::fs::write(dir.path().join("readme.ipynb"), "{}").unwrap();
    dir
}

pub fn app_state(
    dir: &TempDir,
    answer: Option<&'static str>,
    speech: Arc<StubSpeech>,
    video: Option<Arc<dyn AvatarVideoPort>>,
) -> AppState {
    AppState::new(
        Arc::new(FsNotebookStore::new(dir.path(), NamingRule::default())),
        Arc::new(StubAnswer(answer)),
        speech,
        video,
        NamingRule::default(),
        PreviewPolicy::default(),
    )
}
