//! The vote value applied to question and answer vote counters.

use serde::{Deserialize, Serialize};

/// A single vote action: up, down, or neutral (no change).
///
/// Votes are plain counter deltas. The engine keeps no per-user vote
/// record, so repeated votes from the same caller keep accumulating;
/// deduplication belongs to a future vote ledger, not to this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Vote {
    /// Downvote (-1).
    Down,
    /// No change (0).
    Neutral,
    /// Upvote (+1).
    Up,
}

impl Vote {
    /// The delta this vote applies to a vote counter.
    #[must_use]
    pub const fn delta(&self) -> i64 {
        match self {
            Vote::Down => -1,
            Vote::Neutral => 0,
            Vote::Up => 1,
        }
    }
}

impl From<Vote> for i8 {
    fn from(vote: Vote) -> Self {
        vote.delta() as i8
    }
}

impl TryFrom<i8> for Vote {
    type Error = crate::Error;

    fn try_from(raw: i8) -> Result<Self, Self::Error> {
        match raw {
            -1 => Ok(Vote::Down),
            0 => Ok(Vote::Neutral),
            1 => Ok(Vote::Up),
            other => Err(crate::Error::InvalidVote(i64::from(other))),
        }
    }
}

impl TryFrom<i64> for Vote {
    type Error = crate::Error;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            -1 => Ok(Vote::Down),
            0 => Ok(Vote::Neutral),
            1 => Ok(Vote::Up),
            other => Err(crate::Error::InvalidVote(other)),
        }
    }
}
