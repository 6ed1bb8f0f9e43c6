//! 应用层 - 命令
//!
//! CQRS 命令侧：问题提交与下游语音/视频编排

mod prompt_commands;

pub mod handlers;

pub use prompt_commands::*;
