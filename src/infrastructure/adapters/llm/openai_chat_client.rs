//! OpenAI Chat Client - 调用 chat-completion 接口
//!
//! 实现 AnswerServicePort trait
//!
//! 外部 API:
//! POST {base_url}/chat/completions
//! Request: {"model": "gpt-4", "messages": [{"role": "user", "content": "..."}]}
//! Response: {"choices": [{"message": {"content": "..."}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{AnswerServiceError, AnswerServicePort};
use crate::config::{DEFAULT_ANSWER_BASE_URL, DEFAULT_ANSWER_MODEL};
use crate::domain::{Answer, Question};

/// Chat 请求体
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat 响应体（只解析需要的字段）
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// OpenAI Chat 客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiChatClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// Bearer 凭证
    pub api_key: String,
    /// 模型名称
    pub model: String,
    /// 请求超时（秒），None 使用 reqwest 默认行为
    pub timeout_secs: Option<u64>,
}

impl Default for OpenAiChatClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ANSWER_BASE_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_ANSWER_MODEL.to_string(),
            timeout_secs: None,
        }
    }
}

impl OpenAiChatClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }
}

/// OpenAI Chat 客户端
pub struct OpenAiChatClient {
    client: Client,
    config: OpenAiChatClientConfig,
}

impl OpenAiChatClient {
    pub fn new(config: OpenAiChatClientConfig) -> Result<Self, AnswerServiceError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AnswerServiceError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl AnswerServicePort for OpenAiChatClient {
    async fn ask(&self, question: &Question) -> Result<Answer, AnswerServiceError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: question.as_str(),
            }],
        };

        tracing::debug!(
            url = %self.completions_url(),
            model = %self.config.model,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnswerServiceError::Timeout
                } else if e.is_connect() {
                    AnswerServiceError::NetworkError(format!(
                        "Cannot connect to answer service: {}",
                        e
                    ))
                } else {
                    AnswerServiceError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AnswerServiceError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AnswerServiceError::InvalidResponse(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AnswerServiceError::InvalidResponse("Response has no message content".to_string())
            })?;

        tracing::info!(answer_len = content.len(), "Chat completion received");

        Ok(Answer::new(content))
    }
}
