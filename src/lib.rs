//! AGI Voice Agent Suite - AGI 笔记本预览与语音问答
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Notebook Context: 笔记本命名规则、预览截断
//! - Conversation Context: 问题、回答、语音、视频结果
//!
//! 应用层 (application/):
//! - Ports: NotebookStore, AnswerService, SpeechSynthesizer, AvatarVideo
//! - Commands: 提交问题（问答 -> 语音 -> 视频）
//! - Queries: 笔记本列表、预览
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 单页 UI + JSON API
//! - Adapters: 文件系统笔记本、OpenAI、ElevenLabs、D-ID

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
