//! D-ID Client - 数字人视频生成
//!
//! 实现 AvatarVideoPort trait
//!
//! 外部 API:
//! POST {base_url}/talks
//! Request: {"script": {"type": "text", "input": "..."}, "source_url": "..."}
//! Response: {"id": "..."}
//!
//! 提交成功后直接由任务 ID 拼出结果 URL，不轮询渲染状态，
//! 因此返回的视频可能尚未就绪。

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    AvatarVideoError, AvatarVideoPort, TalkJob, TALK_ID_PLACEHOLDER,
};
use crate::config::{
    DEFAULT_VIDEO_BASE_URL, DEFAULT_VIDEO_RESULT_URL_TEMPLATE, DEFAULT_VIDEO_SOURCE_URL,
};
use crate::domain::Answer;

#[derive(Debug, Serialize)]
struct TalkScript<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    input: &'a str,
}

#[derive(Debug, Serialize)]
struct TalkRequest<'a> {
    script: TalkScript<'a>,
    source_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct TalkResponse {
    id: Option<String>,
}

/// D-ID 客户端配置
#[derive(Debug, Clone)]
pub struct DidClientConfig {
    pub base_url: String,
    pub api_key: String,
    /// 数字人形象图片
    pub source_url: String,
    /// 结果视频 URL 模板，包含 `{id}`
    pub result_url_template: String,
    pub timeout_secs: Option<u64>,
}

impl Default for DidClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VIDEO_BASE_URL.to_string(),
            api_key: String::new(),
            source_url: DEFAULT_VIDEO_SOURCE_URL.to_string(),
            result_url_template: DEFAULT_VIDEO_RESULT_URL_TEMPLATE.to_string(),
            timeout_secs: None,
        }
    }
}

impl DidClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }
}

/// D-ID 客户端
pub struct DidClient {
    client: Client,
    config: DidClientConfig,
}

impl DidClient {
    pub fn new(config: DidClientConfig) -> Result<Self, AvatarVideoError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AvatarVideoError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn talks_url(&self) -> String {
        format!("{}/talks", self.config.base_url.trim_end_matches('/'))
    }

    fn result_url(&self, talk_id: &str) -> String {
        self.config
            .result_url_template
            .replace(TALK_ID_PLACEHOLDER, talk_id)
    }
}

#[async_trait]
impl AvatarVideoPort for DidClient {
    async fn create_talk(&self, answer: &Answer) -> Result<TalkJob, AvatarVideoError> {
        let request = TalkRequest {
            script: TalkScript {
                kind: "text",
                input: answer.as_str(),
            },
            source_url: &self.config.source_url,
        };

        tracing::debug!(url = %self.talks_url(), "Submitting talk");

        let response = self
            .client
            .post(self.talks_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AvatarVideoError::NetworkError(e.to_string()))?;

        // 非 2xx 一律视为失败，不解析错误体
        let status = response.status();
        if !status.is_success() {
            return Err(AvatarVideoError::Rejected(status.as_u16()));
        }

        let body: TalkResponse = response
            .json()
            .await
            .map_err(|e| AvatarVideoError::InvalidResponse(e.to_string()))?;

        let id = body
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AvatarVideoError::InvalidResponse("Missing talk id".to_string()))?;

        Ok(TalkJob {
            result_url: self.result_url(&id),
            id,
        })
    }
}
