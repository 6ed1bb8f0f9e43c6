//! Conversation Context - 问答限界上下文
//!
//! 单次提交内的瞬态值：问题、回答、音频片段、视频结果

mod value_objects;

pub use value_objects::{Answer, AudioClip, Question, VideoResult};
