//! UseCase: ハートビート（生存通知）処理

use std::sync::Arc;

use batepapo_shared::time::Clock;

use crate::domain::{
    Participant, ParticipantName, ParticipantRepository, RepositoryError, Timestamp,
};

use super::error::HeartbeatError;

/// ハートビートのユースケース
pub struct RefreshHeartbeatUseCase {
    participants: Arc<dyn ParticipantRepository>,
    clock: Arc<dyn Clock>,
}

impl RefreshHeartbeatUseCase {
    pub fn new(participants: Arc<dyn ParticipantRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            participants,
            clock,
        }
    }

    /// 参加者の最終生存時刻を現在時刻に更新する
    pub async fn execute(&self, name: &ParticipantName) -> Result<Participant, HeartbeatError> {
        let now = Timestamp::new(self.clock.now_millis());
        let participant = self
            .participants
            .refresh_heartbeat(name, now)
            .await
            .map_err(|e| match e {
                RepositoryError::ParticipantNotFound(name) => {
                    HeartbeatError::ParticipantNotFound(name)
                }
                other => HeartbeatError::Storage(other.to_string()),
            })?;

        tracing::debug!("Heartbeat from '{}'", participant.name);
        Ok(participant)
    }
}
