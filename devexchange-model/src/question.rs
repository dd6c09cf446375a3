use chrono::{DateTime, Utc};
use devexchange_types::{AnswerId, QuestionId, UserId};
use serde::{Deserialize, Serialize};

/// The number of tags a question may carry.
pub(crate) const MAX_TAGS: usize = 5;

/// A question posted to the exchange.
///
/// Field names serialize in camelCase to match the record-table wire
/// format used by remote providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    /// Markdown body; may embed fenced code segments.
    pub body: String,
    /// Unique lowercase tag names, at most five.
    pub tags: Vec<String>,
    pub author_id: UserId,
    pub author_name: String,
    pub author_reputation: i64,
    pub votes: i64,
    pub answer_count: u32,
    /// Monotonically non-decreasing view counter.
    pub views: u64,
    /// Set when the asker marks an answer as the resolution. Must
    /// reference an answer whose `question_id` equals this question's id.
    pub accepted_answer_id: Option<AnswerId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating a question. The provider assigns
/// the id, zeroes the counters, and stamps both timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub author_id: UserId,
    pub author_name: String,
    pub author_reputation: i64,
}

/// Partial update for a question. Absent fields keep their stored value;
/// `accepted_answer_id` is doubly optional so it can be cleared
/// (`Some(None)`) as well as set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_answer_id: Option<Option<AnswerId>>,
}

/// Normalizes a question's tag set: lowercases every name, drops
/// duplicates (keeping first occurrence), and caps the set at five.
#[must_use]
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(tags.len().min(MAX_TAGS));
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() || seen.contains(&tag) {
            continue;
        }
        seen.push(tag);
        if seen.len() == MAX_TAGS {
            break;
        }
    }
    seen
}
