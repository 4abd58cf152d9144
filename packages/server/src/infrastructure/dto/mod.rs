//! Data Transfer Objects (DTOs) for the HTTP API.
//!
//! - `http`: request bodies, query parameters and response bodies
//! - `conversion`: conversions between DTOs and domain types

pub mod conversion;
pub mod http;
