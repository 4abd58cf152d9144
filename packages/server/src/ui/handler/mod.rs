//! Request handlers.

mod http;
mod message;
mod participant;
mod status;

pub use http::health_check;
pub use message::{delete_message, edit_message, list_messages, post_message};
pub use participant::{list_participants, register_participant};
pub use status::refresh_heartbeat;
