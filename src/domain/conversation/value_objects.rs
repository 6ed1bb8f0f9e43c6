//! Conversation Context - Value Objects

use serde::Serialize;

/// 用户问题（提交时非空）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// 创建问题，原文保留（不做 trim），仅拒绝空白输入
    pub fn new(text: impl Into<String>) -> Result<Self, &'static str> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err("问题不能为空");
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 模型回答
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer(String);

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 合成语音片段（MP3）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub data: Vec<u8>,
    pub content_type: String,
}

impl AudioClip {
    pub fn mp3(data: Vec<u8>) -> Self {
        Self {
            data,
            content_type: "audio/mpeg".to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// 数字人视频结果（不重试）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoResult {
    /// 可播放的视频 URL（可能尚未渲染完成）
    Ready { url: String },
    /// 失败提示
    Failed { notice: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_rejects_blank() {
        assert!(Question::new("").is_err());
        assert!(Question::new("   \n").is_err());
    }

    #[test]
    fn test_question_kept_verbatim() {
        let q = Question::new("  What does AGI1 notebook do? ").unwrap();
        assert_eq!(q.as_str(), "  What does AGI1 notebook do? ");
    }

    #[test]
    fn test_audio_clip_mp3() {
        let clip = AudioClip::mp3(vec![0xFF, 0xFB]);
        assert_eq!(clip.content_type, "audio/mpeg");
        assert_eq!(clip.len(), 2);
        assert!(!clip.is_empty());
    }
}
