//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod answer_service;
mod avatar_video;
mod notebook_store;
mod speech_synthesizer;

pub use answer_service::{AnswerServiceError, AnswerServicePort};
pub use avatar_video::{
    AvatarVideoError, AvatarVideoPort, TalkJob, TALK_ID_PLACEHOLDER, VIDEO_FAILED_NOTICE,
};
pub use notebook_store::NotebookStorePort;
pub use speech_synthesizer::{SpeechSynthesisError, SpeechSynthesizerPort};
