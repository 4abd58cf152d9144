//! HTTP delivery layer: routing, extractors, handlers and error mapping.

pub mod error;
mod handler;
pub mod identity;
mod server;
mod signal;
pub mod state;

pub use error::ApiError;
pub use identity::Identity;
pub use server::Server;
pub use state::AppState;
