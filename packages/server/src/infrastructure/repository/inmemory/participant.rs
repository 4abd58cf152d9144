//! InMemory Participant Repository 実装
//!
//! ドメイン層が定義する ParticipantRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Participant, ParticipantName, ParticipantRepository, RepositoryError, Timestamp,
};

/// インメモリ参加者レジストリ
///
/// Key: 参加者名
/// Value: Participant
#[derive(Default)]
pub struct InMemoryParticipantRepository {
    participants: Mutex<HashMap<ParticipantName, Participant>>,
}

impl InMemoryParticipantRepository {
    /// 空のレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn register(
        &self,
        name: ParticipantName,
        now: Timestamp,
    ) -> Result<Participant, RepositoryError> {
        let mut participants = self.participants.lock().await;
        if participants.contains_key(&name) {
            return Err(RepositoryError::ParticipantAlreadyExists(
                name.into_string(),
            ));
        }

        let participant = Participant::new(name.clone(), now);
        participants.insert(name, participant.clone());
        Ok(participant)
    }

    async fn exists(&self, name: &ParticipantName) -> Result<bool, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.contains_key(name))
    }

    async fn list_active(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.values().cloned().collect())
    }

    async fn refresh_heartbeat(
        &self,
        name: &ParticipantName,
        now: Timestamp,
    ) -> Result<Participant, RepositoryError> {
        let mut participants = self.participants.lock().await;
        match participants.get_mut(name) {
            Some(participant) => {
                participant.last_status = now;
                Ok(participant.clone())
            }
            None => Err(RepositoryError::ParticipantNotFound(
                name.as_str().to_string(),
            )),
        }
    }

    async fn evict_stale(
        &self,
        stale_before: Timestamp,
    ) -> Result<Vec<Participant>, RepositoryError> {
        let mut participants = self.participants.lock().await;
        let stale: Vec<ParticipantName> = participants
            .values()
            .filter(|p| p.is_stale(stale_before))
            .map(|p| p.name.clone())
            .collect();

        let evicted = stale
            .iter()
            .filter_map(|name| participants.remove(name))
            .collect();
        Ok(evicted)
    }
}
