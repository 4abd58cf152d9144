//! ドメイン層のエラー型

use thiserror::Error;

/// 値オブジェクトの生成に失敗したときのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("name '{0}' is reserved")]
    ReservedName(String),

    #[error("recipient must not be empty")]
    EmptyRecipient,

    #[error("text must not be empty")]
    EmptyText,

    #[error("type must be one of \"message\" or \"private_message\", got '{0}'")]
    InvalidMessageKind(String),

    #[error("limit must be a positive integer, got '{0}'")]
    InvalidLimit(String),
}

/// Repository 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("participant '{0}' already exists")]
    ParticipantAlreadyExists(String),

    #[error("participant '{0}' not found")]
    ParticipantNotFound(String),

    #[error("message '{0}' not found")]
    MessageNotFound(String),

    #[error("storage failure: {0}")]
    Storage(String),
}
