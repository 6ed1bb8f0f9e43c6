//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - 环境变量（最高优先级）
//! - 配置文件（TOML 格式）
//! - 默认值（最低优先级）

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, validate_config, ConfigError};
pub use types::{
    mask_secret, AnswerConfig, AppConfig, LogConfig, NotebooksConfig, ServerConfig, SpeechConfig,
    VideoConfig, DEFAULT_ANSWER_BASE_URL, DEFAULT_ANSWER_MODEL, DEFAULT_SPEECH_BASE_URL,
    DEFAULT_SPEECH_MODEL, DEFAULT_VIDEO_BASE_URL, DEFAULT_VIDEO_RESULT_URL_TEMPLATE,
    DEFAULT_VIDEO_SOURCE_URL, DEFAULT_VOICE_ID, DEFAULT_VOICE_NAME,
};
