//! Notebook Context - Value Objects

use serde::{Deserialize, Serialize};

use super::NotebookError;

/// 默认文件名前缀（标记 AGI 相关笔记本）
pub const DEFAULT_PREFIX: &str = "agi";

/// 默认笔记本扩展名
pub const DEFAULT_EXTENSION: &str = ".ipynb";

/// 笔记本命名规则
///
/// 文件名必须同时满足前缀和扩展名要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRule {
    pub prefix: String,
    pub extension: String,
}

impl Default for NamingRule {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl NamingRule {
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    /// 文件名是否符合规则
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.prefix) && file_name.ends_with(&self.extension)
    }
}

/// 笔记本引用（以文件名唯一标识）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NotebookRef(String);

impl NotebookRef {
    /// 校验并创建笔记本引用
    ///
    /// 只接受当前目录下的纯文件名：不含路径分隔符，且不是 `.` 或 `..`。
    /// 文件名中间出现的 `..`（如 `agi..ipynb`）是合法的。
    pub fn parse(name: impl Into<String>, rule: &NamingRule) -> Result<Self, NotebookError> {
        let name = name.into();
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(NotebookError::InvalidName(name));
        }
        if !rule.matches(&name) {
            return Err(NotebookError::InvalidName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NotebookRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
