//! Feed composition for DevExchange.
//!
//! A feed is a filtered, sorted, paginated view over an already-fetched
//! collection. Composition is a pure function: no provider access, no
//! hidden state, identical inputs give identical output. The same
//! filter → stable sort → page-window pipeline serves the question feed,
//! the tag directory, and the user directory; only the predicates and
//! comparators differ.
//!
//! Resetting to page 1 when a filter change shrinks the result set is the
//! caller's job; the window only clamps the requested page into range.

mod compose;
mod page;
mod query;

pub use compose::{compose_questions, compose_tags, compose_users, order_answers};
pub use page::{page_window, FeedPage};
pub use query::{
    QuestionQuery, QuestionSort, TagQuery, TagSort, UserQuery, UserSort, DIRECTORY_PAGE_SIZE,
    QUESTION_PAGE_SIZE,
};
