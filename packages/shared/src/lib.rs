//! Utilities shared by the BatePapo binaries: logging setup and time helpers.

pub mod logger;
pub mod time;
