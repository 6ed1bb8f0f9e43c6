//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::notebook::{
    DEFAULT_EXTENSION, DEFAULT_PREFIX, DEFAULT_PREVIEW_CHARS, DEFAULT_TRUNCATION_MARKER,
    DEFAULT_VIEWER_URL_TEMPLATE,
};
use crate::domain::{NamingRule, PreviewPolicy};

// 外部服务默认值，客户端配置的 Default 也引用这些常量
pub const DEFAULT_ANSWER_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_ANSWER_MODEL: &str = "gpt-4";
pub const DEFAULT_SPEECH_BASE_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_VOICE_NAME: &str = "Rachel";
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
pub const DEFAULT_SPEECH_MODEL: &str = "eleven_monolingual_v1";
pub const DEFAULT_VIDEO_BASE_URL: &str = "https://api.d-id.com";
pub const DEFAULT_VIDEO_SOURCE_URL: &str =
    "https://create-images-results.d-id.com/default-character.png";
pub const DEFAULT_VIDEO_RESULT_URL_TEMPLATE: &str = "https://talks.d-id.com/{id}.mp4";

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 笔记本配置
    #[serde(default)]
    pub notebooks: NotebooksConfig,

    /// 问答服务（OpenAI Chat）配置
    #[serde(default)]
    pub answer: AnswerConfig,

    /// 语音合成（ElevenLabs）配置
    #[serde(default)]
    pub speech: SpeechConfig,

    /// 数字人视频（D-ID）配置
    #[serde(default)]
    pub video: VideoConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 笔记本配置
#[derive(Debug, Clone, Deserialize)]
pub struct NotebooksConfig {
    /// 笔记本所在目录（不递归）
    #[serde(default = "default_notebooks_dir")]
    pub dir: PathBuf,

    /// 文件名前缀
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// 文件扩展名
    #[serde(default = "default_extension")]
    pub extension: String,

    /// 预览字符数
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// 截断标记
    #[serde(default = "default_truncation_marker")]
    pub truncation_marker: String,

    /// 外部查看链接模板，`{notebook}` 会被替换为文件名
    #[serde(default = "default_viewer_url_template")]
    pub viewer_url_template: String,
}

fn default_notebooks_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

fn default_truncation_marker() -> String {
    DEFAULT_TRUNCATION_MARKER.to_string()
}

fn default_viewer_url_template() -> String {
    DEFAULT_VIEWER_URL_TEMPLATE.to_string()
}

impl Default for NotebooksConfig {
    fn default() -> Self {
        Self {
            dir: default_notebooks_dir(),
            prefix: default_prefix(),
            extension: default_extension(),
            preview_chars: default_preview_chars(),
            truncation_marker: default_truncation_marker(),
            viewer_url_template: default_viewer_url_template(),
        }
    }
}

impl NotebooksConfig {
    pub fn naming_rule(&self) -> NamingRule {
        NamingRule::new(&self.prefix, &self.extension)
    }

    pub fn preview_policy(&self) -> PreviewPolicy {
        PreviewPolicy {
            max_chars: self.preview_chars,
            marker: self.truncation_marker.clone(),
            viewer_url_template: self.viewer_url_template.clone(),
        }
    }
}

/// 问答服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerConfig {
    /// API Key（必填）
    #[serde(default)]
    pub api_key: String,

    /// API 基础 URL
    #[serde(default = "default_answer_url")]
    pub base_url: String,

    /// 模型名称
    #[serde(default = "default_answer_model")]
    pub model: String,

    /// 请求超时（秒），未设置时使用客户端默认值
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_answer_url() -> String {
    DEFAULT_ANSWER_BASE_URL.to_string()
}

fn default_answer_model() -> String {
    DEFAULT_ANSWER_MODEL.to_string()
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_answer_url(),
            model: default_answer_model(),
            timeout_secs: None,
        }
    }
}

/// 语音合成配置
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// API Key（必填）
    #[serde(default)]
    pub api_key: String,

    /// API 基础 URL
    #[serde(default = "default_speech_url")]
    pub base_url: String,

    /// 音色名称（仅用于日志）
    #[serde(default = "default_voice_name")]
    pub voice_name: String,

    /// 音色 ID
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// 合成模型
    #[serde(default = "default_speech_model")]
    pub model_id: String,

    /// 请求超时（秒）
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_speech_url() -> String {
    DEFAULT_SPEECH_BASE_URL.to_string()
}

fn default_voice_name() -> String {
    DEFAULT_VOICE_NAME.to_string()
}

fn default_voice_id() -> String {
    DEFAULT_VOICE_ID.to_string()
}

fn default_speech_model() -> String {
    DEFAULT_SPEECH_MODEL.to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_speech_url(),
            voice_name: default_voice_name(),
            voice_id: default_voice_id(),
            model_id: default_speech_model(),
            timeout_secs: None,
        }
    }
}

/// 数字人视频配置
#[derive(Debug, Clone, Deserialize)]
pub struct VideoConfig {
    /// API Key（可选，未设置时跳过视频生成）
    #[serde(default)]
    pub api_key: Option<String>,

    /// API 基础 URL
    #[serde(default = "default_video_url")]
    pub base_url: String,

    /// 数字人形象图片 URL
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// 结果视频 URL 模板，`{id}` 会被替换为任务 ID
    #[serde(default = "default_result_url_template")]
    pub result_url_template: String,

    /// 请求超时（秒）
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_video_url() -> String {
    DEFAULT_VIDEO_BASE_URL.to_string()
}

fn default_source_url() -> String {
    DEFAULT_VIDEO_SOURCE_URL.to_string()
}

fn default_result_url_template() -> String {
    DEFAULT_VIDEO_RESULT_URL_TEMPLATE.to_string()
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_video_url(),
            source_url: default_source_url(),
            result_url_template: default_result_url_template(),
            timeout_secs: None,
        }
    }
}

impl VideoConfig {
    /// 有效的 API Key（空字符串视为未配置）
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// 遮蔽密钥，仅保留末 4 位
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.answer.model, "gpt-4");
        assert_eq!(config.speech.voice_name, "Rachel");
        assert_eq!(config.notebooks.preview_chars, 2000);
        assert!(config.video.api_key.is_none());
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8501");
    }

    #[test]
    fn test_video_credential_blank_is_none() {
        let mut config = VideoConfig::default();
        assert_eq!(config.credential(), None);
        config.api_key = Some("  ".to_string());
        assert_eq!(config.credential(), None);
        config.api_key = Some("did-key".to_string());
        assert_eq!(config.credential(), Some("did-key"));
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("sk-abcdef1234"), "****1234");
        assert_eq!(mask_secret("abc"), "****");
    }
}
