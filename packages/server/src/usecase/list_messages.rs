//! UseCase: メッセージ一覧取得

use std::sync::Arc;

use crate::domain::{ChatMessage, MessageLimit, MessageRepository, ParticipantName};

use super::error::ListError;

/// メッセージ一覧取得のユースケース
///
/// 読み手に見えるメッセージ（全員宛て・読み手宛て・読み手発）を新しい順に返します。
pub struct ListMessagesUseCase {
    messages: Arc<dyn MessageRepository>,
}

impl ListMessagesUseCase {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    pub async fn execute(
        &self,
        reader: &ParticipantName,
        limit: Option<MessageLimit>,
    ) -> Result<Vec<ChatMessage>, ListError> {
        Ok(self.messages.list_visible_to(reader, limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MessageBody, MessageKind, MessageText, NewMessage, Recipient},
        infrastructure::repository::InMemoryMessageRepository,
    };

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_list_messages_with_limit() {
        // テスト項目: limit 件数までの新しいメッセージだけが返される
        // given (前提条件):
        let repository = Arc::new(InMemoryMessageRepository::new());
        for i in 0..5 {
            let body = MessageBody {
                to: Recipient::Broadcast,
                text: MessageText::new(format!("msg {i}")).unwrap(),
                kind: MessageKind::Message,
            };
            repository
                .append(NewMessage::posted(name("Maria"), body, "10:00:00".to_string()))
                .await
                .unwrap();
        }
        let usecase = ListMessagesUseCase::new(repository);

        // when (操作):
        let result = usecase
            .execute(&name("João"), Some(MessageLimit::new(2).unwrap()))
            .await
            .unwrap();

        // then (期待する結果):
        let texts: Vec<&str> = result.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["msg 4", "msg 3"]);
    }
}
