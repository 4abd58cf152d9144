//! Multi-user chat room server.
//!
//! Participants register by name, keep their presence alive with periodic
//! heartbeats, and exchange public and private messages over a JSON HTTP API.
//! A background reaper evicts participants whose heartbeats stopped.

pub mod domain;
pub mod infrastructure;
pub mod scheduler;
pub mod ui;
pub mod usecase;
