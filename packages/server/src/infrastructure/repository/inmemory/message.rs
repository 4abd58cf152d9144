//! InMemory Message Repository 実装
//!
//! メッセージを挿入順の Vec として保持します。
//! 一覧取得は挿入順の逆（新しい順）で、表示用の `time` は並び順に使いません。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ChatMessage, MessageBody, MessageId, MessageIdFactory, MessageLimit, MessageRepository,
    NewMessage, ParticipantName, RepositoryError,
};

/// インメモリメッセージストア
#[derive(Default)]
pub struct InMemoryMessageRepository {
    /// 挿入順のメッセージ履歴
    messages: Mutex<Vec<ChatMessage>>,
}

impl InMemoryMessageRepository {
    /// 空のストアを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存されているメッセージ数
    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.messages.lock().await.len()
    }
}

fn not_found(id: &MessageId) -> RepositoryError {
    RepositoryError::MessageNotFound(id.as_str().to_string())
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn append(&self, message: NewMessage) -> Result<MessageId, RepositoryError> {
        let id = MessageIdFactory::generate();
        let mut messages = self.messages.lock().await;
        messages.push(message.into_message(id.clone()));
        Ok(id)
    }

    async fn find(&self, id: &MessageId) -> Result<ChatMessage, RepositoryError> {
        let messages = self.messages.lock().await;
        messages
            .iter()
            .find(|m| &m.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn list_visible_to(
        &self,
        reader: &ParticipantName,
        limit: Option<MessageLimit>,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        let messages = self.messages.lock().await;
        let take = limit.map_or(usize::MAX, |l| l.value());
        Ok(messages
            .iter()
            .rev()
            .filter(|m| m.is_visible_to(reader))
            .take(take)
            .cloned()
            .collect())
    }

    async fn edit(
        &self,
        id: &MessageId,
        edit: MessageBody,
    ) -> Result<ChatMessage, RepositoryError> {
        let mut messages = self.messages.lock().await;
        let message = messages
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| not_found(id))?;
        message.apply(edit);
        Ok(message.clone())
    }

    async fn remove(&self, id: &MessageId) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        let index = messages
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| not_found(id))?;
        messages.remove(index);
        Ok(())
    }
}
