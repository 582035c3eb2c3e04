//! 核心错误处理模块

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("请求数据无效: {0}")]
    UnprocessableEntity(String),
    #[error("资源冲突: {0}")]
    Conflict(String),
    #[error("资源不存在: {0}")]
    NotFound(String),
    #[error("不支持的媒体类型: {0}")]
    UnsupportedMediaType(String),
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CoreError::Conflict(_) => StatusCode::CONFLICT,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            CoreError::UnprocessableEntity(_) => "UNPROCESSABLE_ENTITY",
            CoreError::Conflict(_) => "CONFLICT",
            CoreError::NotFound(_) => "NOT_FOUND",
            CoreError::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.kind();
        let user_message = match self {
            CoreError::UnprocessableEntity(msg)
            | CoreError::Conflict(msg)
            | CoreError::NotFound(msg)
            | CoreError::UnsupportedMediaType(msg) => msg,
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("字段 {} 校验失败", field))
                })
            })
            .collect();
        // HashMap 遍历顺序不固定
        messages.sort();

        CoreError::UnprocessableEntity(messages.join(", "))
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                CoreError::UnsupportedMediaType("请求体必须是 application/json".to_string())
            }
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                CoreError::UnprocessableEntity(rejection.body_text())
            }
            other => CoreError::UnprocessableEntity(other.body_text()),
        }
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::NotFound(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CoreError::UnprocessableEntity("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(CoreError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(CoreError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            CoreError::UnsupportedMediaType("x".into()).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = CoreError::Conflict("水果 apple 已存在".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = CoreError::NotFound("水果 7 不存在".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
