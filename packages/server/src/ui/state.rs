//! Server state shared by every request handler.

use std::sync::Arc;

use batepapo_shared::time::Clock;

use crate::{
    domain::{MessageRepository, ParticipantRepository},
    usecase::{
        DeleteMessageUseCase, EditMessageUseCase, ListMessagesUseCase, ListParticipantsUseCase,
        PostMessageUseCase, RefreshHeartbeatUseCase, RegisterParticipantUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// RegisterParticipantUseCase（参加者登録）
    pub register_participant_usecase: Arc<RegisterParticipantUseCase>,
    /// ListParticipantsUseCase（参加者一覧）
    pub list_participants_usecase: Arc<ListParticipantsUseCase>,
    /// PostMessageUseCase（メッセージ投稿）
    pub post_message_usecase: Arc<PostMessageUseCase>,
    /// ListMessagesUseCase（メッセージ一覧）
    pub list_messages_usecase: Arc<ListMessagesUseCase>,
    /// RefreshHeartbeatUseCase（ハートビート）
    pub refresh_heartbeat_usecase: Arc<RefreshHeartbeatUseCase>,
    /// EditMessageUseCase（メッセージ編集）
    pub edit_message_usecase: Arc<EditMessageUseCase>,
    /// DeleteMessageUseCase（メッセージ削除）
    pub delete_message_usecase: Arc<DeleteMessageUseCase>,
}

impl AppState {
    /// Wire every request use case to the given repositories and clock
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            register_participant_usecase: Arc::new(RegisterParticipantUseCase::new(
                participants.clone(),
                messages.clone(),
                clock.clone(),
            )),
            list_participants_usecase: Arc::new(ListParticipantsUseCase::new(participants.clone())),
            post_message_usecase: Arc::new(PostMessageUseCase::new(
                participants.clone(),
                messages.clone(),
                clock.clone(),
            )),
            list_messages_usecase: Arc::new(ListMessagesUseCase::new(messages.clone())),
            refresh_heartbeat_usecase: Arc::new(RefreshHeartbeatUseCase::new(
                participants.clone(),
                clock,
            )),
            edit_message_usecase: Arc::new(EditMessageUseCase::new(
                participants.clone(),
                messages.clone(),
            )),
            delete_message_usecase: Arc::new(DeleteMessageUseCase::new(participants, messages)),
        }
    }
}
