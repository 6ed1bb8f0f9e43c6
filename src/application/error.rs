//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::AnswerServiceError;
use crate::domain::NotebookError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<NotebookError> for ApplicationError {
    fn from(err: NotebookError) -> Self {
        match err {
            NotebookError::NotFound(name) => Self::not_found("Notebook", name),
            NotebookError::InvalidName(name) => {
                Self::ValidationError(format!("Invalid notebook name: {}", name))
            }
            NotebookError::IoError(msg) => Self::StorageError(msg),
        }
    }
}

impl From<AnswerServiceError> for ApplicationError {
    fn from(err: AnswerServiceError) -> Self {
        Self::ExternalServiceError(format!("Answer service failed: {}", err))
    }
}
