//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! ## 並行性
//!
//! 各操作は単体ではアトミックですが、複数の操作の組み合わせ
//! （例: `exists` の後に `append`）はアトミックではありません。
//! その間に Reaper による退室処理が割り込む可能性があります。

use async_trait::async_trait;

use super::{
    ChatMessage, MessageBody, MessageId, MessageLimit, NewMessage, Participant, ParticipantName,
    RepositoryError, Timestamp,
};

/// 参加者レジストリ
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// 参加者を登録する
    ///
    /// 同名の参加者が既に存在する場合は `ParticipantAlreadyExists`。
    /// 存在確認と追加は一つのクリティカルセクションで行う。
    async fn register(
        &self,
        name: ParticipantName,
        now: Timestamp,
    ) -> Result<Participant, RepositoryError>;

    /// 参加者が存在するか
    async fn exists(&self, name: &ParticipantName) -> Result<bool, RepositoryError>;

    /// 現在の参加者一覧（順序は不定）
    async fn list_active(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// 最終生存時刻を更新する
    async fn refresh_heartbeat(
        &self,
        name: &ParticipantName,
        now: Timestamp,
    ) -> Result<Participant, RepositoryError>;

    /// `last_status < stale_before` の参加者をまとめて削除し、削除した参加者を返す
    async fn evict_stale(&self, stale_before: Timestamp)
    -> Result<Vec<Participant>, RepositoryError>;
}

/// メッセージストア
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// メッセージを追加し、採番した ID を返す
    async fn append(&self, message: NewMessage) -> Result<MessageId, RepositoryError>;

    /// ID でメッセージを取得する
    async fn find(&self, id: &MessageId) -> Result<ChatMessage, RepositoryError>;

    /// `reader` に見えるメッセージを新しい順に返す（`limit` 件まで）
    async fn list_visible_to(
        &self,
        reader: &ParticipantName,
        limit: Option<MessageLimit>,
    ) -> Result<Vec<ChatMessage>, RepositoryError>;

    /// 宛先・本文・種別を置き換える
    async fn edit(&self, id: &MessageId, edit: MessageBody)
    -> Result<ChatMessage, RepositoryError>;

    /// メッセージを削除する
    async fn remove(&self, id: &MessageId) -> Result<(), RepositoryError>;
}
