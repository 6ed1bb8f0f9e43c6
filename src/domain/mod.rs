//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Notebook Context: 本地 AGI 笔记本的发现与预览
//! - Conversation Context: 问题、回答、语音与视频结果

pub mod conversation;
pub mod notebook;

pub use conversation::{Answer, AudioClip, Question, VideoResult};
pub use notebook::{NamingRule, NotebookError, NotebookRef, PreviewPolicy, PreviewText};
