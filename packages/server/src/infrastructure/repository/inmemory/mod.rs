//! InMemory Repository 実装
//!
//! プロセス内のコレクションをドキュメントストアとして使用します。
//! 各操作は一つのロック区間で完結し、ロックを保持したまま await しません。

mod message;
mod participant;

pub use message::InMemoryMessageRepository;
pub use participant::InMemoryParticipantRepository;
