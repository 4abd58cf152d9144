//! UseCase: メッセージ削除処理

use std::sync::Arc;

use crate::domain::{MessageId, MessageRepository, ParticipantName, ParticipantRepository};

use super::{edit_message::ensure_owner, error::ModifyMessageError};

/// メッセージ削除のユースケース
pub struct DeleteMessageUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl DeleteMessageUseCase {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// 送信者本人のメッセージを削除する
    pub async fn execute(
        &self,
        actor: &ParticipantName,
        id: &MessageId,
    ) -> Result<(), ModifyMessageError> {
        ensure_owner(self.participants.as_ref(), self.messages.as_ref(), actor, id).await?;
        self.messages.remove(id).await?;

        tracing::info!("Message '{}' deleted by '{}'", id, actor);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MessageBody, MessageKind, MessageText, NewMessage, Recipient, Timestamp},
        infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    };

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    async fn setup() -> (
        DeleteMessageUseCase,
        Arc<InMemoryMessageRepository>,
        MessageId,
    ) {
        let participants = Arc::new(InMemoryParticipantRepository::new());
        let messages = Arc::new(InMemoryMessageRepository::new());
        for n in ["Maria", "João"] {
            participants
                .register(name(n), Timestamp::new(0))
                .await
                .unwrap();
        }
        let body = MessageBody {
            to: Recipient::Broadcast,
            text: MessageText::new("oi".to_string()).unwrap(),
            kind: MessageKind::Message,
        };
        let id = messages
            .append(NewMessage::posted(name("Maria"), body, "10:00:00".to_string()))
            .await
            .unwrap();
        let usecase = DeleteMessageUseCase::new(participants, messages.clone());
        (usecase, messages, id)
    }

    #[tokio::test]
    async fn test_delete_own_message() {
        // テスト項目: 送信者本人は自分のメッセージを削除できる
        // given (前提条件):
        let (usecase, messages, id) = setup().await;

        // when (操作):
        let result = usecase.execute(&name("Maria"), &id).await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
        assert_eq!(messages.count().await, 0);
    }

    #[tokio::test]
    async fn test_delete_someone_elses_message_unauthorized() {
        // テスト項目: 他人のメッセージは削除できない
        // given (前提条件):
        let (usecase, messages, id) = setup().await;

        // when (操作):
        let result = usecase.execute(&name("João"), &id).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ModifyMessageError::Unauthorized("João".to_string()))
        );
        assert_eq!(messages.count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_twice_not_found() {
        // テスト項目: 削除済みのメッセージを再度削除すると MessageNotFound
        // given (前提条件):
        let (usecase, _messages, id) = setup().await;
        usecase.execute(&name("Maria"), &id).await.unwrap();

        // when (操作):
        let result = usecase.execute(&name("Maria"), &id).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ModifyMessageError::MessageNotFound(id.into_string()))
        );
    }
}
