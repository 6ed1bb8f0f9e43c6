//! LLM Adapter - OpenAI chat-completion 客户端实现

mod openai_chat_client;

pub use openai_chat_client::*;
