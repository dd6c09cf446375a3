use chrono::{DateTime, Utc};
use devexchange_types::TagId;
use serde::{Deserialize, Serialize};

/// A tag in the directory.
///
/// `question_count` is denormalized and not kept in sync by the question
/// mutators; it reflects whatever the backing store last wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: TagId,
    /// Unique lowercase name, used as the question filter key.
    pub name: String,
    pub description: String,
    pub question_count: u64,
    pub followers: u64,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating a tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDraft {
    pub name: String,
    pub description: String,
}

/// Partial update for a tag. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
}
