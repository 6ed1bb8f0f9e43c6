//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态（启动后只读）

use std::sync::Arc;

use crate::application::{
    // Command handlers
    SubmitPromptHandler,
    // Query handlers
    ListNotebooksHandler, PreviewNotebookHandler,
    // Ports
    AnswerServicePort, AvatarVideoPort, NotebookStorePort, SpeechSynthesizerPort,
};
use crate::domain::{NamingRule, PreviewPolicy};

/// 应用状态
pub struct AppState {
    // ========== Flags ==========
    /// 是否配置了视频凭证
    pub video_enabled: bool,

    // ========== Command Handlers ==========
    pub submit_prompt_handler: SubmitPromptHandler,

    // ========== Query Handlers ==========
    pub list_notebooks_handler: ListNotebooksHandler,
    pub preview_notebook_handler: PreviewNotebookHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        notebook_store: Arc<dyn NotebookStorePort>,
        answer_service: Arc<dyn AnswerServicePort>,
        speech: Arc<dyn SpeechSynthesizerPort>,
        video: Option<Arc<dyn AvatarVideoPort>>,
        naming_rule: NamingRule,
        preview_policy: PreviewPolicy,
    ) -> Self {
        Self {
            video_enabled: video.is_some(),

            // Command handlers
            submit_prompt_handler: SubmitPromptHandler::new(answer_service, speech, video),

            // Query handlers
            list_notebooks_handler: ListNotebooksHandler::new(notebook_store.clone()),
            preview_notebook_handler: PreviewNotebookHandler::new(
                notebook_store,
                naming_rule,
                preview_policy,
            ),
        }
    }
}
