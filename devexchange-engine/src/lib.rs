//! Entity mutators for DevExchange.
//!
//! Isolated state transitions over the collection provider: voting,
//! accepting answers, view counting, reputation and badges, and tag
//! following. Every function is generic over
//! [`Collection`](devexchange_store::Collection), so the in-memory mock
//! and the remote record-table provider are interchangeable.
//!
//! The mutators never retry; retry policy belongs to the presentation
//! layer, which also owns rolling back any optimistic UI state when a
//! call fails.

mod error;
mod mutators;

pub use error::{EngineError, EngineResult};
pub use mutators::{
    accept_answer, answers_for_question, follow_tag, increment_views, post_answer,
    unfollow_tag, update_reputation, vote_answer, vote_question,
};
