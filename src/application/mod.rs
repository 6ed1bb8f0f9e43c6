//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（NotebookStore、AnswerService、SpeechSynthesizer、AvatarVideo）
//! - commands: 问题提交命令及处理器
//! - queries: 笔记本列表/预览查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    SubmitPrompt,
    // Handlers
    handlers::{AudioOutcome, PromptOutcome, SubmitPromptHandler, VIDEO_PENDING_NOTICE},
};

pub use error::ApplicationError;

pub use ports::{
    // Answer service
    AnswerServiceError,
    AnswerServicePort,
    // Avatar video
    AvatarVideoError,
    AvatarVideoPort,
    TalkJob,
    VIDEO_FAILED_NOTICE,
    // Notebook store
    NotebookStorePort,
    // Speech synthesizer
    SpeechSynthesisError,
    SpeechSynthesizerPort,
};

pub use queries::{
    ListNotebooks,
    PreviewNotebook,
    // Handlers
    handlers::{ListNotebooksHandler, NotebookPreview, PreviewNotebookHandler},
};
