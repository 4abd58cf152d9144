//! UseCase 層のエラー型
//!
//! ユースケースごとに呼び出し側が区別すべき失敗だけを列挙します。
//! ストレージ由来の失敗はすべて `Storage` にまとめます。

use thiserror::Error;

use crate::domain::RepositoryError;

/// 参加者登録のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("name '{0}' is already in use")]
    NameInUse(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// メッセージ投稿のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostMessageError {
    #[error("participant '{0}' not recognized")]
    ParticipantNotRecognized(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// ハートビートのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeartbeatError {
    #[error("participant '{0}' not found")]
    ParticipantNotFound(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// メッセージ編集・削除のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModifyMessageError {
    /// 参加者として登録されていない、またはメッセージの送信者ではない
    #[error("participant '{0}' is not allowed to modify this message")]
    Unauthorized(String),

    #[error("message '{0}' not found")]
    MessageNotFound(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// 一覧取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<RepositoryError> for ListError {
    fn from(error: RepositoryError) -> Self {
        Self::Storage(error.to_string())
    }
}

impl From<RepositoryError> for PostMessageError {
    fn from(error: RepositoryError) -> Self {
        Self::Storage(error.to_string())
    }
}

impl From<RepositoryError> for ModifyMessageError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::MessageNotFound(id) => Self::MessageNotFound(id),
            other => Self::Storage(other.to_string()),
        }
    }
}
