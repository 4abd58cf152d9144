//! Conversion logic between DTOs and domain types.

use crate::domain::{
    ChatMessage, MessageBody, MessageKind, MessageLimit, MessageText, Participant,
    ParticipantName, Recipient, ValueObjectError,
};
use crate::infrastructure::dto::http as dto;

/// Validation messages collected while converting a request DTO
pub type ValidationErrors = Vec<String>;

// ========================================
// DTO → Domain
// ========================================

fn required<T>(
    field: &str,
    value: Option<String>,
    parse: impl FnOnce(String) -> Result<T, ValueObjectError>,
    errors: &mut ValidationErrors,
) -> Option<T> {
    match value {
        None => {
            errors.push(format!("{field} is required"));
            None
        }
        Some(raw) => parse(raw).map_err(|e| errors.push(e.to_string())).ok(),
    }
}

impl TryFrom<dto::RegisterParticipantRequest> for ParticipantName {
    type Error = ValidationErrors;

    fn try_from(request: dto::RegisterParticipantRequest) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        match required("name", request.name, ParticipantName::new, &mut errors) {
            Some(name) => Ok(name),
            None => Err(errors),
        }
    }
}

impl TryFrom<dto::MessagePayload> for MessageBody {
    type Error = ValidationErrors;

    fn try_from(payload: dto::MessagePayload) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        let to = required("to", payload.to, Recipient::new, &mut errors);
        let text = required("text", payload.text, MessageText::new, &mut errors);
        let kind = required(
            "type",
            payload.kind,
            |raw| MessageKind::from_client(&raw),
            &mut errors,
        );

        match (to, text, kind) {
            (Some(to), Some(text), Some(kind)) => Ok(MessageBody { to, text, kind }),
            _ => Err(errors),
        }
    }
}

impl dto::ListMessagesQuery {
    /// Parse the optional `limit`; absent means "no limit"
    pub fn limit(&self) -> Result<Option<MessageLimit>, ValidationErrors> {
        self.limit
            .as_deref()
            .map(MessageLimit::parse)
            .transpose()
            .map_err(|e| vec![e.to_string()])
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<Participant> for dto::ParticipantDto {
    fn from(model: Participant) -> Self {
        Self {
            name: model.name.into_string(),
            last_status: model.last_status.value(),
        }
    }
}

impl From<ChatMessage> for dto::MessageDto {
    fn from(model: ChatMessage) -> Self {
        Self {
            id: model.id.into_string(),
            from: model.from.into_string(),
            to: model.to.as_str().to_string(),
            text: model.text.into_string(),
            kind: model.kind.as_str().to_string(),
            time: model.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageId, Timestamp};

    fn payload(to: Option<&str>, text: Option<&str>, kind: Option<&str>) -> dto::MessagePayload {
        dto::MessagePayload {
            to: to.map(str::to_string),
            text: text.map(str::to_string),
            kind: kind.map(str::to_string),
        }
    }

    #[test]
    fn test_register_request_to_name() {
        // テスト項目: name が指定されていれば ParticipantName に変換される
        // given (前提条件):
        let request = dto::RegisterParticipantRequest {
            name: Some("Maria".to_string()),
        };

        // when (操作):
        let name = ParticipantName::try_from(request);

        // then (期待する結果):
        assert_eq!(name.unwrap().as_str(), "Maria");
    }

    #[test]
    fn test_register_request_missing_or_blank_name() {
        // テスト項目: name がない・空の場合はバリデーションエラー
        // given (前提条件):
        let missing = dto::RegisterParticipantRequest { name: None };
        let blank = dto::RegisterParticipantRequest {
            name: Some("  ".to_string()),
        };

        // when (操作):
        let missing = ParticipantName::try_from(missing);
        let blank = ParticipantName::try_from(blank);

        // then (期待する結果):
        assert_eq!(missing, Err(vec!["name is required".to_string()]));
        assert_eq!(blank, Err(vec!["name must not be empty".to_string()]));
    }

    #[test]
    fn test_register_request_with_broadcast_target_name() {
        // テスト項目: 全員宛ての宛先名での登録はバリデーションエラー
        // given (前提条件):
        let request = dto::RegisterParticipantRequest {
            name: Some("Todos".to_string()),
        };

        // when (操作):
        let result = ParticipantName::try_from(request);

        // then (期待する結果):
        assert_eq!(result, Err(vec!["name 'Todos' is reserved".to_string()]));
    }

    #[test]
    fn test_message_payload_to_body() {
        // テスト項目: 正しいペイロードは MessageBody に変換される
        // given (前提条件):
        let payload = payload(Some("Todos"), Some("hi"), Some("message"));

        // when (操作):
        let body = MessageBody::try_from(payload).unwrap();

        // then (期待する結果):
        assert!(body.to.is_broadcast());
        assert_eq!(body.text.as_str(), "hi");
        assert_eq!(body.kind, MessageKind::Message);
    }

    #[test]
    fn test_message_payload_collects_every_error() {
        // テスト項目: 不正なフィールドはすべてエラーとして列挙される
        // given (前提条件):
        let payload = payload(None, Some(""), Some("status"));

        // when (操作):
        let result = MessageBody::try_from(payload);

        // then (期待する結果):
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], "to is required");
        assert_eq!(errors[1], "text must not be empty");
        assert!(errors[2].contains("status"));
    }

    #[test]
    fn test_list_messages_query_limit() {
        // テスト項目: limit なしは上限なし、不正値はエラー
        // given (前提条件):
        let absent = dto::ListMessagesQuery { limit: None };
        let valid = dto::ListMessagesQuery {
            limit: Some("3".to_string()),
        };
        let zero = dto::ListMessagesQuery {
            limit: Some("0".to_string()),
        };

        // when (操作) / then (期待する結果):
        assert_eq!(absent.limit(), Ok(None));
        assert_eq!(valid.limit().unwrap().map(|l| l.value()), Some(3));
        assert!(zero.limit().is_err());
    }

    #[test]
    fn test_domain_participant_to_dto() {
        // テスト項目: ドメインの Participant が DTO に変換される
        // given (前提条件):
        let participant = Participant::new(
            ParticipantName::new("Maria".to_string()).unwrap(),
            Timestamp::new(2000),
        );

        // when (操作):
        let dto_participant: dto::ParticipantDto = participant.into();

        // then (期待する結果):
        assert_eq!(dto_participant.name, "Maria");
        assert_eq!(dto_participant.last_status, 2000);
    }

    #[test]
    fn test_domain_message_to_dto_serializes_wire_names() {
        // テスト項目: ChatMessage が DTO に変換され、type フィールド名で出力される
        // given (前提条件):
        let message = ChatMessage {
            id: MessageId::new("m-1".to_string()),
            from: ParticipantName::new("Maria".to_string()).unwrap(),
            to: Recipient::Broadcast,
            text: MessageText::new("hi".to_string()).unwrap(),
            kind: MessageKind::Status,
            time: "12:00:00".to_string(),
        };

        // when (操作):
        let dto_message: dto::MessageDto = message.into();
        let json = serde_json::to_value(&dto_message).unwrap();

        // then (期待する結果):
        assert_eq!(json["type"], "status");
        assert_eq!(json["to"], "Todos");
        assert_eq!(json["from"], "Maria");
        assert_eq!(json["time"], "12:00:00");
    }
}
