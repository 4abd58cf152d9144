//! UseCase: 期限切れ参加者の退室処理（Reaper の 1 tick 分）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - EvictStaleParticipantsUseCase::execute() メソッド
//! - 期限切れ参加者の一括削除と、退室アナウンスの記録
//!
//! ### なぜこのテストが必要か
//! - 退室した参加者は exists から見えなくなり、退室アナウンスがちょうど 1 件記録される
//! - 1 人分のアナウンス記録に失敗しても、他の参加者の処理は続けなければならない
//!
//! ### どのような状況を想定しているか
//! - 正常系：期限切れの参加者だけが退室する
//! - 異常系：アナウンスの記録に一部失敗する、evict_stale 自体が失敗する
//! - エッジケース：しきい値ちょうどの参加者は退室しない

use std::{sync::Arc, time::Duration};

use batepapo_shared::time::{Clock, timestamp_to_brt_hms};

use crate::domain::{
    MessageRepository, NewMessage, ParticipantName, ParticipantRepository, RepositoryError,
    Timestamp,
};

/// 1 tick の処理結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvictionReport {
    /// 退室させた参加者
    pub evicted: Vec<ParticipantName>,
    /// 退室アナウンスの記録に失敗した参加者
    pub failed_announcements: Vec<ParticipantName>,
}

/// 期限切れ参加者の退室処理のユースケース
pub struct EvictStaleParticipantsUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
    /// 最後の生存通知からこの時間を超えると期限切れ
    staleness_threshold: Duration,
}

impl EvictStaleParticipantsUseCase {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        staleness_threshold: Duration,
    ) -> Self {
        Self {
            participants,
            messages,
            clock,
            staleness_threshold,
        }
    }

    /// 期限切れの参加者を退室させ、参加者ごとに退室アナウンスを記録する
    ///
    /// # Returns
    ///
    /// * `Ok(EvictionReport)` - 退室させた参加者と、アナウンスに失敗した参加者
    /// * `Err(RepositoryError)` - evict_stale 自体が失敗した（この tick は何もしていない）
    pub async fn execute(&self) -> Result<EvictionReport, RepositoryError> {
        let now = self.clock.now_millis();
        let threshold = i64::try_from(self.staleness_threshold.as_millis()).unwrap_or(i64::MAX);
        let stale_before = Timestamp::new(now).saturating_sub_millis(threshold);

        // 1. 期限切れの参加者をアトミックに削除
        let evicted = self.participants.evict_stale(stale_before).await?;

        // 2. 参加者ごとに退室アナウンスを記録（1 件の失敗で止めない）
        let time = timestamp_to_brt_hms(now);
        let mut report = EvictionReport::default();
        for participant in evicted {
            let departure = NewMessage::departure(participant.name.clone(), time.clone());
            match self.messages.append(departure).await {
                Ok(_) => {
                    tracing::info!("Participant '{}' left the room (timeout)", participant.name);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to record departure of '{}': {}",
                        participant.name,
                        e
                    );
                    report.failed_announcements.push(participant.name.clone());
                }
            }
            report.evicted.push(participant.name);
        }

        Ok(report)
    }
}
