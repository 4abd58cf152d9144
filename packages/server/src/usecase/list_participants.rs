//! UseCase: 参加者一覧取得

use std::sync::Arc;

use crate::domain::{Participant, ParticipantRepository};

use super::error::ListError;

/// 参加者一覧取得のユースケース
pub struct ListParticipantsUseCase {
    participants: Arc<dyn ParticipantRepository>,
}

impl ListParticipantsUseCase {
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    /// 参加中の参加者を名前順で返す
    pub async fn execute(&self) -> Result<Vec<Participant>, ListError> {
        let mut participants = self.participants.list_active().await?;

        // Sort by name for consistent ordering
        participants.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(participants)
    }
}
