use serde::{Deserialize, Serialize};

/// Page size for the question feed.
pub const QUESTION_PAGE_SIZE: usize = 10;

/// Page size for the tag and user directories.
pub const DIRECTORY_PAGE_SIZE: usize = 36;

/// Sort order for the question feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSort {
    /// Most recently created first (the default).
    #[default]
    Newest,
    /// Highest vote count first.
    Votes,
    /// Most recently updated first.
    Activity,
}

impl QuestionSort {
    /// Parses a sort key, falling back to the default for unknown input.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "votes" => Self::Votes,
            "activity" => Self::Activity,
            _ => Self::default(),
        }
    }
}

/// Sort order for the tag directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSort {
    /// Most questions first (the default).
    #[default]
    Popular,
    /// Lexicographic by name.
    Name,
    /// Most recently created first.
    Newest,
}

impl TagSort {
    /// Parses a sort key, falling back to the default for unknown input.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "name" => Self::Name,
            "newest" => Self::Newest,
            _ => Self::default(),
        }
    }
}

/// Sort order for the user directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserSort {
    /// Highest reputation first (the default).
    #[default]
    Reputation,
    /// Most recently joined first.
    Newest,
    /// Lexicographic by username.
    Name,
}

impl UserSort {
    /// Parses a sort key, falling back to the default for unknown input.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "newest" => Self::Newest,
            "name" => Self::Name,
            _ => Self::default(),
        }
    }
}

/// Requested view over the question collection.
///
/// `search` is a case-insensitive substring match over title, body, or
/// any tag name. `tag` is a case-insensitive exact match against the tag
/// set; only one value is supported — selecting a second tag replaces
/// the first rather than intersecting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionQuery {
    pub search: Option<String>,
    pub tag: Option<String>,
    pub sort: QuestionSort,
    pub page: usize,
    pub page_size: usize,
}

impl Default for QuestionQuery {
    fn default() -> Self {
        Self {
            search: None,
            tag: None,
            sort: QuestionSort::default(),
            page: 1,
            page_size: QUESTION_PAGE_SIZE,
        }
    }
}

/// Requested view over the tag directory. `search` matches name or
/// description; `name` is an exact (case-insensitive) name filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagQuery {
    pub search: Option<String>,
    pub name: Option<String>,
    pub sort: TagSort,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TagQuery {
    fn default() -> Self {
        Self {
            search: None,
            name: None,
            sort: TagSort::default(),
            page: 1,
            page_size: DIRECTORY_PAGE_SIZE,
        }
    }
}

/// Requested view over the user directory. `search` matches the
/// username; `username` is an exact (case-insensitive) filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserQuery {
    pub search: Option<String>,
    pub username: Option<String>,
    pub sort: UserSort,
    pub page: usize,
    pub page_size: usize,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            search: None,
            username: None,
            sort: UserSort::default(),
            page: 1,
            page_size: DIRECTORY_PAGE_SIZE,
        }
    }
}
