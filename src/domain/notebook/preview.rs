//! 笔记本预览
//!
//! 按字符数截断原始内容并始终追加截断标记，同时生成外部查看链接

use serde::Serialize;

use super::NotebookRef;

/// 默认预览字符数
pub const DEFAULT_PREVIEW_CHARS: usize = 2000;

/// 默认截断标记（无论是否截断都会追加）
pub const DEFAULT_TRUNCATION_MARKER: &str = "\n...";

/// 查看链接模板中的文件名占位符
pub const NOTEBOOK_PLACEHOLDER: &str = "{notebook}";

/// 默认外部查看链接模板（Google Colab）
pub const DEFAULT_VIEWER_URL_TEMPLATE: &str =
    "https://colab.research.google.com/github/YOUR_USERNAME/AGI_Voice_Agent/blob/main/{notebook}";

/// 预览代码块的语言标记
pub const PREVIEW_LANGUAGE: &str = "json";

/// 预览策略
#[derive(Debug, Clone)]
pub struct PreviewPolicy {
    /// 最大字符数
    pub max_chars: usize,
    /// 截断标记
    pub marker: String,
    /// 查看链接模板，包含 `{notebook}`
    pub viewer_url_template: String,
}

impl Default for PreviewPolicy {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_PREVIEW_CHARS,
            marker: DEFAULT_TRUNCATION_MARKER.to_string(),
            viewer_url_template: DEFAULT_VIEWER_URL_TEMPLATE.to_string(),
        }
    }
}

impl PreviewPolicy {
    /// 截断内容并追加标记
    pub fn render(&self, content: &str) -> PreviewText {
        let mut text: String = content.chars().take(self.max_chars).collect();
        text.push_str(&self.marker);
        PreviewText(text)
    }

    /// 生成外部查看链接（不校验可达性）
    pub fn viewer_url(&self, notebook: &NotebookRef) -> String {
        self.viewer_url_template
            .replace(NOTEBOOK_PLACEHOLDER, notebook.as_str())
    }
}

/// 预览文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewText(String);

impl PreviewText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
