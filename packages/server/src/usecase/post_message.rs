//! UseCase: メッセージ投稿処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostMessageUseCase::execute() メソッド
//! - 参加者の存在確認と、メッセージストアへの追加
//!
//! ### なぜこのテストが必要か
//! - 未登録の識別子からの投稿は、何も書き込まずに拒否しなければならない
//! - 送信者は常にヘッダーの識別子であり、クライアントの指定を信用しない
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加中の参加者による公開・非公開メッセージの投稿
//! - 異常系：未登録の識別子からの投稿
//! - エッジケース：存在確認の後、追加の前に退室処理が割り込む（許容している競合）

use std::sync::Arc;

use batepapo_shared::time::{Clock, timestamp_to_brt_hms};

use crate::domain::{
    MessageBody, MessageId, MessageRepository, NewMessage, ParticipantName, ParticipantRepository,
};

use super::error::PostMessageError;

/// メッセージ投稿のユースケース
pub struct PostMessageUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
}

impl PostMessageUseCase {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            participants,
            messages,
            clock,
        }
    }

    /// メッセージ投稿を実行
    ///
    /// # Arguments
    ///
    /// * `from` - 送信者（リクエストヘッダーの識別子）
    /// * `body` - 宛先・本文・種別
    ///
    /// # Returns
    ///
    /// * `Ok(MessageId)` - 採番されたメッセージ ID
    /// * `Err(PostMessageError::ParticipantNotRecognized)` - 送信者が参加していない
    pub async fn execute(
        &self,
        from: ParticipantName,
        body: MessageBody,
    ) -> Result<MessageId, PostMessageError> {
        // 1. 送信者の存在確認
        //    ここから append までの間に Reaper が送信者を退室させる可能性がある（許容）
        if !self.participants.exists(&from).await? {
            return Err(PostMessageError::ParticipantNotRecognized(
                from.into_string(),
            ));
        }

        // 2. メッセージを追加
        let time = timestamp_to_brt_hms(self.clock.now_millis());
        let message = NewMessage::posted(from, body, time);
        let id = self.messages.append(message).await?;

        tracing::debug!("Message '{}' stored", id);
        Ok(id)
    }
}
