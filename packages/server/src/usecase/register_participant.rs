//! UseCase: 参加者登録処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RegisterParticipantUseCase::execute() メソッド
//! - 参加者の登録（重複チェック）と入室アナウンスの記録
//!
//! ### なぜこのテストが必要か
//! - 参加者名は参加中の間は一意でなければならない
//! - 入室アナウンスは登録が成功したときだけ記録される
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の登録
//! - 異常系：参加中の名前での登録試行、入室アナウンスの記録失敗
//! - エッジケース：退室（タイムアウト）後の同名での再登録

use std::sync::Arc;

use batepapo_shared::time::{Clock, timestamp_to_brt_hms};

use crate::domain::{
    MessageRepository, NewMessage, Participant, ParticipantName, ParticipantRepository,
    RepositoryError, Timestamp,
};

use super::error::RegisterError;

/// 参加者登録のユースケース
pub struct RegisterParticipantUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
}

impl RegisterParticipantUseCase {
    /// 新しい RegisterParticipantUseCase を作成
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

    /// 参加者登録を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 登録された参加者
    /// * `Err(RegisterError::NameInUse)` - 同名の参加者が参加中
    pub async fn execute(&self, name: ParticipantName) -> Result<Participant, RegisterError> {
        let now = self.clock.now_millis();

        // 1. 重複チェックと登録（Repository 内でアトミックに行う）
        let participant = self
            .participants
            .register(name, Timestamp::new(now))
            .await
            .map_err(|e| match e {
                RepositoryError::ParticipantAlreadyExists(name) => RegisterError::NameInUse(name),
                other => RegisterError::Storage(other.to_string()),
            })?;

        // 2. 入室アナウンスを記録
        //    失敗しても登録は取り消さない（許容）。参加者はハートビートが
        //    なければ Reaper に退室させられ、その後は同じ名前で登録できる
        let arrival = NewMessage::arrival(participant.name.clone(), timestamp_to_brt_hms(now));
        self.messages
            .append(arrival)
            .await
            .map_err(|e| RegisterError::Storage(e.to_string()))?;

        tracing::info!("Participant '{}' entered the room", participant.name);
        Ok(participant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MessageKind, entity::ARRIVAL_TEXT, repository::MockMessageRepository},
        infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    };
    use batepapo_shared::time::ManualClock;

    struct Fixture {
        participants: Arc<InMemoryParticipantRepository>,
        messages: Arc<InMemoryMessageRepository>,
        clock: Arc<ManualClock>,
        usecase: RegisterParticipantUseCase,
    }

    fn create_fixture() -> Fixture {
        let participants = Arc::new(InMemoryParticipantRepository::new());
        let messages = Arc::new(InMemoryMessageRepository::new());
        let clock = Arc::new(ManualClock::new(1_672_585_445_000));
        let usecase =
            RegisterParticipantUseCase::new(participants.clone(), messages.clone(), clock.clone());
        Fixture {
            participants,
            messages,
            clock,
            usecase,
        }
    }

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_register_participant_success() {
        // テスト項目: 新規参加者が登録され、入室アナウンスが記録される
        // given (前提条件):
        let fixture = create_fixture();

        // when (操作):
        let result = fixture.usecase.execute(name("Maria")).await;

        // then (期待する結果):
        let participant = result.unwrap();
        assert_eq!(participant.last_status, Timestamp::new(1_672_585_445_000));
        assert!(fixture.participants.exists(&name("Maria")).await.unwrap());

        let messages = fixture
            .messages
            .list_visible_to(&name("someone else"), None)
            .await
            .unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].from, name("Maria"));
        assert_eq!(messages[0].kind, MessageKind::Status);
        assert_eq!(messages[0].text.as_str(), ARRIVAL_TEXT);
        assert_eq!(messages[0].time, "12:04:05");
    }

    #[tokio::test]
    async fn test_register_participant_duplicate_error() {
        // テスト項目: 参加中の名前での登録は NameInUse になり、アナウンスも増えない
        // given (前提条件):
        let fixture = create_fixture();
        fixture.usecase.execute(name("Maria")).await.unwrap();

        // when (操作):
        let result = fixture.usecase.execute(name("Maria")).await;

        // then (期待する結果):
        assert_eq!(result, Err(RegisterError::NameInUse("Maria".to_string())));
        assert_eq!(fixture.messages.count().await, 1);
        assert_eq!(fixture.participants.list_active().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_arrival_failure_keeps_registration() {
        // テスト項目: 入室アナウンスの記録に失敗すると Storage エラーになるが、
        //             登録自体は残る（既知の部分的な状態として記録）
        // given (前提条件):
        let participants = Arc::new(InMemoryParticipantRepository::new());
        let mut messages = MockMessageRepository::new();
        messages
            .expect_append()
            .times(1)
            .returning(|_| Err(RepositoryError::Storage("write failed".to_string())));
        let usecase = RegisterParticipantUseCase::new(
            participants.clone(),
            Arc::new(messages),
            Arc::new(ManualClock::new(0)),
        );

        // when (操作):
        let result = usecase.execute(name("Maria")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RegisterError::Storage(
                "storage failure: write failed".to_string()
            ))
        );
        assert!(participants.exists(&name("Maria")).await.unwrap());
    }

    #[tokio::test]
    async fn test_register_again_after_eviction() {
        // テスト項目: 退室後は同じ名前で新しい参加者として登録できる
        // given (前提条件):
        let fixture = create_fixture();
        fixture.usecase.execute(name("Maria")).await.unwrap();
        fixture.clock.advance(60_000);
        let now = fixture.clock.now_millis();
        fixture
            .participants
            .evict_stale(Timestamp::new(now))
            .await
            .unwrap();

        // when (操作):
        let result = fixture.usecase.execute(name("Maria")).await;

        // then (期待する結果): 新しい last_status を持つ別インスタンス
        assert_eq!(result.unwrap().last_status, Timestamp::new(now));
    }
}
