use chrono::{DateTime, Utc};
use devexchange_types::{AnswerId, QuestionId, UserId};
use serde::{Deserialize, Serialize};

/// An answer submitted to an existing question.
///
/// Answers are never orphaned by the provider: deleting a question does
/// not cascade, so callers that remove questions are responsible for the
/// answers left behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub body: String,
    pub author_id: UserId,
    pub author_name: String,
    pub author_reputation: i64,
    pub votes: i64,
    /// At most one answer per question carries this flag; accepting one
    /// unaccepts all siblings.
    pub is_accepted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDraft {
    pub question_id: QuestionId,
    pub body: String,
    pub author_id: UserId,
    pub author_name: String,
    pub author_reputation: i64,
}

/// Partial update for an answer. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_accepted: Option<bool>,
}
