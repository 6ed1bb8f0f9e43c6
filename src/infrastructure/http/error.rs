//! HTTP Error Handling
//!
//! 业务错误统一以 HTTP 200 + errno 返回，页面据此显示错误提示

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const NOT_FOUND: i32 = 404;
    pub const INTERNAL_ERROR: i32 = 500;
    pub const SERVICE_UNAVAILABLE: i32 = 503;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn errno(&self) -> i32 {
        match self {
            ApiError::NotFound(_) => errno::NOT_FOUND,
            ApiError::BadRequest(_) => errno::BAD_REQUEST,
            ApiError::Internal(_) => errno::INTERNAL_ERROR,
            ApiError::ServiceUnavailable(_) => errno::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.errno();
        let msg = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(errno = code, error = %msg, "Resource not found");
                msg
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = code, error = %msg, "Bad request");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(errno = code, error = %msg, "Internal server error");
                msg
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(errno = code, error = %msg, "Service unavailable");
                msg
            }
        };

        (StatusCode::OK, Json(ErrorResponse::new(code, msg))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, id } => {
                ApiError::NotFound(format!("{} not found: {}", resource_type, id))
            }
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::ExternalServiceError(msg) => ApiError::ServiceUnavailable(msg),
            ApplicationError::StorageError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_mapping() {
        let err = ApiError::from(ApplicationError::not_found("Notebook", "agi9.ipynb"));
        assert_eq!(err.errno(), errno::NOT_FOUND);

        let err = ApiError::from(ApplicationError::validation("问题不能为空"));
        assert_eq!(err.errno(), errno::BAD_REQUEST);

        let err = ApiError::from(ApplicationError::ExternalServiceError("HTTP 401".into()));
        assert_eq!(err.errno(), errno::SERVICE_UNAVAILABLE);

        let err = ApiError::from(ApplicationError::StorageError("permission denied".into()));
        assert_eq!(err.errno(), errno::INTERNAL_ERROR);
    }

    #[test]
    fn test_error_is_http_ok() {
        let response = ApiError::Internal("disk".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
