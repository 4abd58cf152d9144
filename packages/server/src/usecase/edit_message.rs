//! UseCase: メッセージ編集処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - EditMessageUseCase::execute() メソッド
//! - 参加者確認・送信者確認・メッセージの置き換え
//!
//! ### どのような状況を想定しているか
//! - 正常系：送信者本人による編集
//! - 異常系：未登録の識別子、他人のメッセージ、存在しないメッセージ

use std::sync::Arc;

use crate::domain::{
    ChatMessage, MessageBody, MessageId, MessageRepository, ParticipantName, ParticipantRepository,
};

use super::error::ModifyMessageError;

/// メッセージ編集のユースケース
pub struct EditMessageUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl EditMessageUseCase {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// 送信者本人のメッセージの宛先・本文・種別を置き換える
    pub async fn execute(
        &self,
        editor: &ParticipantName,
        id: &MessageId,
        body: MessageBody,
    ) -> Result<ChatMessage, ModifyMessageError> {
        ensure_owner(self.participants.as_ref(), self.messages.as_ref(), editor, id).await?;
        let edited = self.messages.edit(id, body).await?;

        tracing::info!("Message '{}' edited by '{}'", id, editor);
        Ok(edited)
    }
}

/// `actor` が参加中であり、メッセージ `id` の送信者であることを確認する
///
/// 確認と変更は別々の操作であり、その間の退室・削除とは競合しうる。
pub(super) async fn ensure_owner(
    participants: &dyn ParticipantRepository,
    messages: &dyn MessageRepository,
    actor: &ParticipantName,
    id: &MessageId,
) -> Result<(), ModifyMessageError> {
    if !participants.exists(actor).await? {
        return Err(ModifyMessageError::Unauthorized(actor.as_str().to_string()));
    }

    let message = messages.find(id).await?;
    if !message.is_sent_by(actor) {
        return Err(ModifyMessageError::Unauthorized(actor.as_str().to_string()));
    }
    Ok(())
}
