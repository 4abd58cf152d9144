//! 値オブジェクト
//!
//! 生成時にバリデーションを行い、不正な値がドメインに入り込まないようにします。

use std::{fmt, num::IntErrorKind};

use uuid::Uuid;

use super::error::ValueObjectError;

/// 全員宛てメッセージの宛先として予約された値
pub const BROADCAST_TARGET: &str = "Todos";

/// 参加者名
///
/// 大文字・小文字を区別し、バイト単位で完全一致したときのみ同一とみなす。
/// 全員宛ての宛先（`"Todos"`）は参加者名として使えない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// 空文字列・空白のみの名前と、予約された宛先名は拒否する
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::EmptyName);
        }
        if value == BROADCAST_TARGET {
            return Err(ValueObjectError::ReservedName(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ParticipantName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// メッセージの宛先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// 全員宛て（`"Todos"`）
    Broadcast,
    /// 特定の参加者宛て
    Participant(ParticipantName),
}

impl Recipient {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value == BROADCAST_TARGET {
            return Ok(Self::Broadcast);
        }
        ParticipantName::new(value)
            .map(Self::Participant)
            .map_err(|_| ValueObjectError::EmptyRecipient)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Broadcast => BROADCAST_TARGET,
            Self::Participant(name) => name.as_str(),
        }
    }

    pub fn is_broadcast(&self) -> bool {
        matches!(self, Self::Broadcast)
    }
}

impl TryFrom<String> for Recipient {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// メッセージ本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::EmptyText);
        }
        Ok(Self(value))
    }

    /// システムメッセージ用の固定文言
    pub(crate) fn system(text: &'static str) -> Self {
        Self(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// メッセージ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// 公開メッセージ
    Message,
    /// プライベートメッセージ
    PrivateMessage,
    /// 入室・退室などのシステムイベント
    Status,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
            Self::Status => "status",
        }
    }

    /// クライアントが指定できる種別のみ受け付ける
    ///
    /// `status` はシステムだけが書き込めるため、ここでは拒否する。
    pub fn from_client(value: &str) -> Result<Self, ValueObjectError> {
        match value {
            "message" => Ok(Self::Message),
            "private_message" => Ok(Self::PrivateMessage),
            other => Err(ValueObjectError::InvalidMessageKind(other.to_string())),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// メッセージ ID（ストアが採番する）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// MessageId の生成器
pub struct MessageIdFactory;

impl MessageIdFactory {
    /// UUID v4 から新しい MessageId を生成
    pub fn generate() -> MessageId {
        MessageId(Uuid::new_v4().to_string())
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// `millis` ミリ秒前の時刻
    pub fn saturating_sub_millis(&self, millis: i64) -> Self {
        Self(self.0.saturating_sub(millis))
    }
}

/// メッセージ一覧の取得件数上限（1 以上の整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLimit(usize);

impl MessageLimit {
    pub fn new(value: usize) -> Result<Self, ValueObjectError> {
        if value == 0 {
            return Err(ValueObjectError::InvalidLimit(value.to_string()));
        }
        Ok(Self(value))
    }

    /// クエリ文字列から上限を解釈する
    ///
    /// `0`・負数・数値以外はすべて入力エラー。「上限なし」として扱わない。
    /// `usize` に収まらない正の整数は全件を意味する。
    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        let invalid = || ValueObjectError::InvalidLimit(raw.to_string());
        let value = match raw.trim().parse::<usize>() {
            Ok(value) => value,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
            Err(_) => return Err(invalid()),
        };
        Self::new(value).map_err(|_| invalid())
    }

    pub fn value(&self) -> usize {
        self.0
    }
}
