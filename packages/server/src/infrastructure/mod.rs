//! Infrastructure 層
//!
//! - `repository`: ドメイン層の Repository trait の具体的な実装
//! - `dto`: HTTP API のリクエスト・レスポンス DTO

pub mod dto;
pub mod repository;
