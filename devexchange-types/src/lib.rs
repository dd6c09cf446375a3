//! Core type definitions for DevExchange.
//!
//! This crate defines the fundamental, view-agnostic types used throughout
//! the core engine:
//! - Record identifiers (sequential integers for questions, answers, and
//!   tags; provider-assigned strings for users)
//! - The `Vote` value applied to vote counters
//!
//! All domain-specific records (questions, answers, tags, users) belong in
//! `devexchange-model`, not here.

mod ids;
mod vote;

pub use ids::{AnswerId, QuestionId, TagId, UserId};
pub use vote::Vote;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("invalid vote value: {0} (expected -1, 0, or 1)")]
    InvalidVote(i64),
}
