//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量（`AGI_` 前缀）
//! 2. 配置文件（config.toml / config.local.toml / secrets.toml）
//! 3. 约定俗成的密钥环境变量（OPENAI_API_KEY / ELEVENLABS_API_KEY / D_ID_API_KEY）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{mask_secret, AppConfig};
use crate::application::ports::TALK_ID_PLACEHOLDER;
use crate::domain::notebook::NOTEBOOK_PLACEHOLDER;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local", "secrets"];

/// 约定俗成的密钥环境变量 -> 配置键
const SECRET_ENV_KEYS: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "answer.api_key"),
    ("ELEVENLABS_API_KEY", "speech.api_key"),
    ("D_ID_API_KEY", "video.api_key"),
];

/// 加载应用配置
///
/// # 环境变量示例
/// - `AGI_SERVER__PORT=8080`
/// - `AGI_ANSWER__API_KEY=sk-...`
/// - `AGI_VIDEO__API_KEY=...`
/// - `AGI_NOTEBOOKS__DIR=/srv/notebooks`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8501)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 约定俗成的密钥变量，作为默认值参与合并
    for (env_key, config_key) in SECRET_ENV_KEYS {
        if let Ok(value) = std::env::var(env_key) {
            builder = builder.set_default(*config_key, value)?;
        }
    }

    // 3. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 4. 环境变量（最高优先级）
    // 例如: AGI_ANSWER__MODEL=gpt-4o
    builder = builder.add_source(
        Environment::with_prefix("AGI")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// 缺少问答或语音密钥视为致命错误；视频密钥可选
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.answer.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Answer API key is required (AGI_ANSWER__API_KEY or OPENAI_API_KEY)".to_string(),
        ));
    }

    if config.speech.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Speech API key is required (AGI_SPEECH__API_KEY or ELEVENLABS_API_KEY)".to_string(),
        ));
    }

    for (name, url) in [
        ("answer", &config.answer.base_url),
        ("speech", &config.speech.base_url),
        ("video", &config.video.base_url),
    ] {
        if url.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} base URL cannot be empty",
                name
            )));
        }
    }

    if config.notebooks.preview_chars == 0 {
        return Err(ConfigError::ValidationError(
            "Preview budget cannot be 0".to_string(),
        ));
    }

    if !config
        .notebooks
        .viewer_url_template
        .contains(NOTEBOOK_PLACEHOLDER)
    {
        return Err(ConfigError::ValidationError(format!(
            "Viewer URL template must contain {}",
            NOTEBOOK_PLACEHOLDER
        )));
    }

    if !config.video.result_url_template.contains(TALK_ID_PLACEHOLDER) {
        return Err(ConfigError::ValidationError(format!(
            "Video result URL template must contain {}",
            TALK_ID_PLACEHOLDER
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，密钥已遮蔽）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Notebooks Dir: {:?}", config.notebooks.dir);
    tracing::info!(
        "Notebook Pattern: {}*{}",
        config.notebooks.prefix,
        config.notebooks.extension
    );
    tracing::info!("Preview Chars: {}", config.notebooks.preview_chars);
    tracing::info!("Answer Model: {}", config.answer.model);
    tracing::info!("Answer API Key: {}", mask_secret(&config.answer.api_key));
    tracing::info!(
        "Speech Voice: {} ({})",
        config.speech.voice_name,
        config.speech.voice_id
    );
    tracing::info!("Speech API Key: {}", mask_secret(&config.speech.api_key));
    match config.video.credential() {
        Some(key) => tracing::info!("Video: enabled, API Key: {}", mask_secret(key)),
        None => tracing::info!("Video: disabled (no API key)"),
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.answer.api_key = "sk-test".to_string();
        config.speech.api_key = "el-test".to_string();
        config
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_missing_answer_key() {
        let mut config = valid_config();
        config.answer.api_key = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_missing_speech_key() {
        let mut config = valid_config();
        config.speech.api_key = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_missing_video_key_is_fine() {
        let mut config = valid_config();
        config.video.api_key = None;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_bad_templates() {
        let mut config = valid_config();
        config.notebooks.viewer_url_template = "https://example.com/".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = valid_config();
        config.video.result_url_template = "https://talks.example.com/video.mp4".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9000

[answer]
api_key = "sk-file"
model = "gpt-4o"

[speech]
api_key = "el-file"

[video]
api_key = "did-file"
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.answer.api_key, "sk-file");
        assert_eq!(config.answer.model, "gpt-4o");
        assert_eq!(config.video.credential(), Some("did-file"));
        assert_eq!(config.notebooks.prefix, "agi");
    }
}
