//! Prompt Commands

/// 提交问题命令（点击 "Run AGI Prompt" 时触发）
#[derive(Debug, Clone)]
pub struct SubmitPrompt {
    pub question: String,
}
