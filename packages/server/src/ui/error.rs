//! Mapping of use case failures onto HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    infrastructure::dto::http::{ErrorDto, ValidationErrorDto},
    usecase::{HeartbeatError, ListError, ModifyMessageError, PostMessageError, RegisterError},
};

/// Error returned by every handler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 422: malformed body, query or identity
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// 409
    #[error("{0}")]
    Conflict(String),

    /// 404
    #[error("{0}")]
    NotFound(String),

    /// 401
    #[error("{0}")]
    Unauthorized(String),

    /// 500
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(errors) => {
                tracing::debug!("Rejected request: {}", errors.join(", "));
                (status, Json(ValidationErrorDto { errors })).into_response()
            }
            Self::Internal(error) => {
                tracing::error!("Request failed: {}", error);
                (status, Json(ErrorDto { error })).into_response()
            }
            Self::Conflict(error) | Self::NotFound(error) | Self::Unauthorized(error) => {
                (status, Json(ErrorDto { error })).into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(vec![rejection.body_text()])
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(vec![rejection.body_text()])
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::NameInUse(_) => Self::Conflict(error.to_string()),
            RegisterError::Storage(_) => Self::Internal(error.to_string()),
        }
    }
}

impl From<PostMessageError> for ApiError {
    fn from(error: PostMessageError) -> Self {
        match error {
            PostMessageError::ParticipantNotRecognized(_) => {
                Self::Validation(vec![error.to_string()])
            }
            PostMessageError::Storage(_) => Self::Internal(error.to_string()),
        }
    }
}

impl From<HeartbeatError> for ApiError {
    fn from(error: HeartbeatError) -> Self {
        match error {
            HeartbeatError::ParticipantNotFound(_) => Self::NotFound(error.to_string()),
            HeartbeatError::Storage(_) => Self::Internal(error.to_string()),
        }
    }
}

impl From<ModifyMessageError> for ApiError {
    fn from(error: ModifyMessageError) -> Self {
        match error {
            ModifyMessageError::Unauthorized(_) => Self::Unauthorized(error.to_string()),
            ModifyMessageError::MessageNotFound(_) => Self::NotFound(error.to_string()),
            ModifyMessageError::Storage(_) => Self::Internal(error.to_string()),
        }
    }
}

impl From<ListError> for ApiError {
    fn from(error: ListError) -> Self {
        Self::Internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usecase_errors_map_to_status_codes() {
        // テスト項目: ユースケースのエラーが対応する HTTP ステータスに変換される
        // given (前提条件):
        let cases: Vec<(ApiError, StatusCode)> = vec![
            (
                RegisterError::NameInUse("Maria".to_string()).into(),
                StatusCode::CONFLICT,
            ),
            (
                PostMessageError::ParticipantNotRecognized("ghost".to_string()).into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                HeartbeatError::ParticipantNotFound("ghost".to_string()).into(),
                StatusCode::NOT_FOUND,
            ),
            (
                ModifyMessageError::Unauthorized("João".to_string()).into(),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ModifyMessageError::MessageNotFound("m-1".to_string()).into(),
                StatusCode::NOT_FOUND,
            ),
            (
                ListError::Storage("down".to_string()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        // when (操作) / then (期待する結果):
        for (error, expected) in cases {
            assert_eq!(error.status(), expected, "{error}");
        }
    }

    #[test]
    fn test_validation_error_response() {
        // テスト項目: バリデーションエラーは 422 と errors 配列で返る
        // given (前提条件):
        let error = ApiError::Validation(vec!["name is required".to_string()]);

        // when (操作):
        let response = error.into_response();

        // then (期待する結果):
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
