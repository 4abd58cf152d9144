//! エンティティ

use super::value_object::{
    MessageId, MessageKind, MessageText, ParticipantName, Recipient, Timestamp,
};

/// 入室時に記録されるシステムメッセージの本文
pub const ARRIVAL_TEXT: &str = "entered the room";

/// 退室（タイムアウト）時に記録されるシステムメッセージの本文
pub const DEPARTURE_TEXT: &str = "left the room";

/// チャットルームの参加者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: ParticipantName,
    /// 最後に生存通知（登録またはハートビート）を受け取った時刻
    pub last_status: Timestamp,
}

impl Participant {
    pub fn new(name: ParticipantName, last_status: Timestamp) -> Self {
        Self { name, last_status }
    }

    /// `stale_before` より前から生存通知がない場合は期限切れ
    pub fn is_stale(&self, stale_before: Timestamp) -> bool {
        self.last_status < stale_before
    }
}

/// ストアに保存されたメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub from: ParticipantName,
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
    /// 表示用の時刻（`HH:MM:SS`）。並び順には使わない。
    pub time: String,
}

impl ChatMessage {
    /// 全員宛て、読み手宛て、または読み手が送ったメッセージのみ見える
    pub fn is_visible_to(&self, reader: &ParticipantName) -> bool {
        match &self.to {
            Recipient::Broadcast => true,
            Recipient::Participant(to) => to == reader || &self.from == reader,
        }
    }

    pub fn is_sent_by(&self, name: &ParticipantName) -> bool {
        &self.from == name
    }

    /// 編集可能なフィールド（宛先・本文・種別）を置き換える
    pub fn apply(&mut self, body: MessageBody) {
        self.to = body.to;
        self.text = body.text;
        self.kind = body.kind;
    }
}

/// ID 採番前のメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub from: ParticipantName,
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
    pub time: String,
}

impl NewMessage {
    /// 参加者が投稿するメッセージ
    pub fn posted(from: ParticipantName, body: MessageBody, time: String) -> Self {
        Self {
            from,
            to: body.to,
            text: body.text,
            kind: body.kind,
            time,
        }
    }

    /// 入室アナウンス
    pub fn arrival(name: ParticipantName, time: String) -> Self {
        Self::status(name, ARRIVAL_TEXT, time)
    }

    /// 退室アナウンス
    pub fn departure(name: ParticipantName, time: String) -> Self {
        Self::status(name, DEPARTURE_TEXT, time)
    }

    fn status(name: ParticipantName, text: &'static str, time: String) -> Self {
        Self {
            from: name,
            to: Recipient::Broadcast,
            text: MessageText::system(text),
            kind: MessageKind::Status,
            time,
        }
    }

    pub fn into_message(self, id: MessageId) -> ChatMessage {
        ChatMessage {
            id,
            from: self.from,
            to: self.to,
            text: self.text,
            kind: self.kind,
            time: self.time,
        }
    }
}

/// クライアントが投稿・編集できるメッセージ本体（宛先・本文・種別）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody {
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::MessageIdFactory;

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    fn private(from: &str, to: &str) -> ChatMessage {
        NewMessage {
            from: name(from),
            to: Recipient::Participant(name(to)),
            text: MessageText::new("psst".to_string()).unwrap(),
            kind: MessageKind::PrivateMessage,
            time: "10:00:00".to_string(),
        }
        .into_message(MessageIdFactory::generate())
    }

    #[test]
    fn test_participant_is_stale_is_strict() {
        // テスト項目: last_status が stale_before と等しい場合は期限切れではない
        // given (前提条件):
        let participant = Participant::new(name("Maria"), Timestamp::new(10_000));

        // when (操作):
        let at_boundary = participant.is_stale(Timestamp::new(10_000));
        let after = participant.is_stale(Timestamp::new(10_001));

        // then (期待する結果):
        assert!(!at_boundary);
        assert!(after);
    }

    #[test]
    fn test_private_message_visibility() {
        // テスト項目: プライベートメッセージは送信者と宛先にだけ見える
        // given (前提条件):
        let message = private("Maria", "João");

        // when (操作):
        let maria = message.is_visible_to(&name("Maria"));
        let joao = message.is_visible_to(&name("João"));
        let ana = message.is_visible_to(&name("Ana"));

        // then (期待する結果):
        assert!(maria);
        assert!(joao);
        assert!(!ana);
    }

    #[test]
    fn test_departure_is_broadcast_status() {
        // テスト項目: 退室アナウンスは全員宛ての status メッセージ
        // given (前提条件):

        // when (操作):
        let message = NewMessage::departure(name("Maria"), "10:00:00".to_string());

        // then (期待する結果):
        assert_eq!(message.from, name("Maria"));
        assert!(message.to.is_broadcast());
        assert_eq!(message.kind, MessageKind::Status);
        assert_eq!(message.text.as_str(), DEPARTURE_TEXT);
    }

    #[test]
    fn test_apply_edit_keeps_identity_fields() {
        // テスト項目: 編集では id・送信者・時刻は変わらない
        // given (前提条件):
        let mut message = private("Maria", "João");
        let original = message.clone();
        let edit = MessageBody {
            to: Recipient::Broadcast,
            text: MessageText::new("hello all".to_string()).unwrap(),
            kind: MessageKind::Message,
        };

        // when (操作):
        message.apply(edit);

        // then (期待する結果):
        assert_eq!(message.id, original.id);
        assert_eq!(message.from, original.from);
        assert_eq!(message.time, original.time);
        assert!(message.to.is_broadcast());
        assert_eq!(message.text.as_str(), "hello all");
        assert_eq!(message.kind, MessageKind::Message);
    }
}
