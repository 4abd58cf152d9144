//! UseCase 層
//!
//! 各ユースケースは Repository trait（と Clock）にのみ依存し、
//! HTTP やストレージの具体的な実装には依存しません。

mod delete_message;
mod edit_message;
mod error;
mod evict_stale_participants;
mod list_messages;
mod list_participants;
mod post_message;
mod refresh_heartbeat;
mod register_participant;

pub use delete_message::DeleteMessageUseCase;
pub use edit_message::EditMessageUseCase;
pub use error::{HeartbeatError, ListError, ModifyMessageError, PostMessageError, RegisterError};
pub use evict_stale_participants::{EvictStaleParticipantsUseCase, EvictionReport};
pub use list_messages::ListMessagesUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use post_message::PostMessageUseCase;
pub use refresh_heartbeat::RefreshHeartbeatUseCase;
pub use register_participant::RegisterParticipantUseCase;
