//! Entity records for DevExchange.
//!
//! Defines the value records that every other subsystem operates on:
//! - [`Question`], [`Answer`], [`Tag`], [`User`] — the stored records
//! - `*Draft` structs — the caller-supplied part of a create; the
//!   collection provider fills in identifiers, timestamps, and counters
//! - `*Patch` structs — explicit partial updates where an absent field
//!   means "keep the stored value"
//!
//! Records are immutable by convention: consumers receive clones from the
//! collection provider and route every mutation back through it.

mod answer;
mod question;
mod tag;
mod user;

pub use answer::{Answer, AnswerDraft, AnswerPatch};
pub use question::{normalize_tags, Question, QuestionDraft, QuestionPatch};
pub use tag::{Tag, TagDraft, TagPatch};
pub use user::{
    Badge, BadgeTier, User, UserDraft, UserPatch, REPUTATION_MILESTONES,
};
