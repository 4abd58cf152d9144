//! ドメイン層
//!
//! 参加者（Participant）とメッセージ（ChatMessage）のモデル、値オブジェクト、
//! およびデータアクセスのインターフェース（Repository trait）を定義します。

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{ChatMessage, MessageBody, NewMessage, Participant};
pub use error::{RepositoryError, ValueObjectError};
pub use repository::{MessageRepository, ParticipantRepository};
pub use value_object::{
    BROADCAST_TARGET, MessageId, MessageIdFactory, MessageKind, MessageLimit, MessageText,
    ParticipantName, Recipient, Timestamp,
};
