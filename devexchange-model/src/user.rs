use chrono::{DateTime, Utc};
use devexchange_types::UserId;
use serde::{Deserialize, Serialize};

/// Reputation milestones and the badge each one awards.
///
/// Crossing a milestone is permanent: the badge stays even if reputation
/// later drops back below the threshold.
pub const REPUTATION_MILESTONES: [(i64, &str, BadgeTier); 5] = [
    (100, "Supporter", BadgeTier::Bronze),
    (500, "Teacher", BadgeTier::Bronze),
    (1000, "Scholar", BadgeTier::Silver),
    (2000, "Enlightened", BadgeTier::Silver),
    (5000, "Guru", BadgeTier::Gold),
];

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Integer score driving badge awards; floored at 0.
    pub reputation: i64,
    /// Ordered, monotonically growing badge list.
    pub badges: Vec<Badge>,
    pub joined_at: DateTime<Utc>,
}

impl User {
    /// Appends every milestone badge this user's reputation has earned
    /// but does not yet hold. Never removes or duplicates a badge, so
    /// re-running at the same reputation is a no-op.
    pub fn award_milestone_badges(&mut self) {
        for (threshold, name, tier) in REPUTATION_MILESTONES {
            if self.reputation >= threshold && !self.badges.iter().any(|b| b.name == name) {
                self.badges.push(Badge::new(name, tier));
            }
        }
    }
}

/// Caller-supplied fields for registering a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub username: String,
    pub email: String,
}

/// Partial update for a user. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reputation: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<Badge>>,
}

/// A permanent achievement marker tied to a reputation milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    #[serde(rename = "type")]
    pub tier: BadgeTier,
}

impl Badge {
    /// Creates a badge.
    #[must_use]
    pub fn new(name: impl Into<String>, tier: BadgeTier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }
}

/// Badge metal, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
}
