//! Identifier types used throughout the DevExchange core.
//!
//! Question, answer, and tag identifiers are sequential integers assigned
//! by the collection provider (max existing + 1). User identifiers are
//! provider-assigned strings of the form `userN`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! int_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from a raw integer.
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the underlying integer.
            #[must_use]
            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>()
                    .map(Self)
                    .map_err(|_| crate::Error::InvalidId(s.to_string()))
            }
        }
    };
}

int_id! {
    /// Unique identifier for a question.
    QuestionId
}

int_id! {
    /// Unique identifier for an answer.
    AnswerId
}

int_id! {
    /// Unique identifier for a tag.
    TagId
}

/// Unique identifier for a user.
///
/// Stored as an opaque string because the backing provider owns the
/// format (the mock store assigns `user1`, `user2`, ...; a remote table
/// service may use anything else).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a user identifier from a raw string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for UserId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
