//! ElevenLabs TTS Client - 调用 ElevenLabs 语音合成服务
//!
//! 实现 SpeechSynthesizerPort trait
//!
//! 外部 TTS API:
//! POST {base_url}/v1/text-to-speech/{voice_id}
//! Headers: xi-api-key, Accept: audio/mpeg
//! Request: {"text": "...", "model_id": "..."}  (JSON)
//! Response: audio/mpeg binary

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechSynthesisError, SpeechSynthesizerPort};
use crate::config::{
    DEFAULT_SPEECH_BASE_URL, DEFAULT_SPEECH_MODEL, DEFAULT_VOICE_ID, DEFAULT_VOICE_NAME,
};
use crate::domain::{Answer, AudioClip};

/// TTS 请求体 (JSON)
#[derive(Debug, Serialize)]
struct TtsHttpRequest<'a> {
    /// 要合成的文本
    text: &'a str,
    /// 合成模型
    model_id: &'a str,
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsClientConfig {
    /// TTS 服务基础 URL
    pub base_url: String,
    /// API Key（xi-api-key 头）
    pub api_key: String,
    /// 音色名称（仅用于日志）
    pub voice_name: String,
    /// 音色 ID
    pub voice_id: String,
    /// 合成模型
    pub model_id: String,
    /// 请求超时时间（秒）
    pub timeout_secs: Option<u64>,
}

impl Default for ElevenLabsClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SPEECH_BASE_URL.to_string(),
            api_key: String::new(),
            voice_name: DEFAULT_VOICE_NAME.to_string(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: DEFAULT_SPEECH_MODEL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ElevenLabsClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }
}

/// ElevenLabs TTS 客户端
pub struct ElevenLabsClient {
    client: Client,
    config: ElevenLabsClientConfig,
}

impl ElevenLabsClient {
    pub fn new(config: ElevenLabsClientConfig) -> Result<Self, SpeechSynthesisError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| SpeechSynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn synthesis_url(&self) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.voice_id
        )
    }
}

#[async_trait]
impl SpeechSynthesizerPort for ElevenLabsClient {
    async fn synthesize(&self, answer: &Answer) -> Result<AudioClip, SpeechSynthesisError> {
        let http_request = TtsHttpRequest {
            text: answer.as_str(),
            model_id: &self.config.model_id,
        };

        tracing::debug!(
            url = %self.synthesis_url(),
            text_len = http_request.text.len(),
            voice = %self.config.voice_name,
            "Sending TTS request"
        );

        let response = self
            .client
            .post(self.synthesis_url())
            .header("xi-api-key", &self.config.api_key)
            .header(ACCEPT, "audio/mpeg")
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechSynthesisError::Timeout
                } else if e.is_connect() {
                    SpeechSynthesisError::NetworkError(format!(
                        "Cannot connect to TTS service: {}",
                        e
                    ))
                } else {
                    SpeechSynthesisError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpeechSynthesisError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // 直接获取音频字节
        let audio_data = response
            .bytes()
            .await
            .map_err(|e| {
                SpeechSynthesisError::InvalidResponse(format!("Failed to read audio: {}", e))
            })?
            .to_vec();

        if audio_data.is_empty() {
            return Err(SpeechSynthesisError::InvalidResponse(
                "Empty audio payload".to_string(),
            ));
        }

        tracing::info!(
            voice = %self.config.voice_name,
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(AudioClip::mp3(audio_data))
    }
}
