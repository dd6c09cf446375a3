use crate::page::{page_window, FeedPage};
use crate::query::{QuestionQuery, QuestionSort, TagQuery, TagSort, UserQuery, UserSort};
use devexchange_model::{Answer, Question, Tag, User};

/// Lowercases a filter value, treating blank input as no filter.
fn active(filter: &Option<String>) -> Option<String> {
    filter
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Composes the question feed: search and tag filters, stable sort,
/// page window.
#[must_use]
pub fn compose_questions(
    mut questions: Vec<Question>,
    query: &QuestionQuery,
) -> FeedPage<Question> {
    if let Some(term) = active(&query.search) {
        questions.retain(|q| {
            q.title.to_lowercase().contains(&term)
                || q.body.to_lowercase().contains(&term)
                || q.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
        });
    }
    if let Some(tag) = active(&query.tag) {
        questions.retain(|q| q.tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)));
    }

    match query.sort {
        QuestionSort::Newest => questions.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        QuestionSort::Votes => questions.sort_by(|a, b| b.votes.cmp(&a.votes)),
        QuestionSort::Activity => questions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }

    page_window(questions, query.page, query.page_size)
}

/// Composes the tag directory: name/description search, optional exact
/// name filter, stable sort, page window.
#[must_use]
pub fn compose_tags(mut tags: Vec<Tag>, query: &TagQuery) -> FeedPage<Tag> {
    if let Some(term) = active(&query.search) {
        tags.retain(|t| {
            t.name.to_lowercase().contains(&term) || t.description.to_lowercase().contains(&term)
        });
    }
    if let Some(name) = active(&query.name) {
        tags.retain(|t| t.name.eq_ignore_ascii_case(&name));
    }

    match query.sort {
        TagSort::Popular => tags.sort_by(|a, b| b.question_count.cmp(&a.question_count)),
        TagSort::Name => tags.sort_by(|a, b| a.name.cmp(&b.name)),
        TagSort::Newest => tags.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    page_window(tags, query.page, query.page_size)
}

/// Composes the user directory: username search, optional exact username
/// filter, stable sort, page window.
#[must_use]
pub fn compose_users(mut users: Vec<User>, query: &UserQuery) -> FeedPage<User> {
    if let Some(term) = active(&query.search) {
        users.retain(|u| u.username.to_lowercase().contains(&term));
    }
    if let Some(username) = active(&query.username) {
        users.retain(|u| u.username.eq_ignore_ascii_case(&username));
    }

    match query.sort {
        UserSort::Reputation => users.sort_by(|a, b| b.reputation.cmp(&a.reputation)),
        UserSort::Newest => users.sort_by(|a, b| b.joined_at.cmp(&a.joined_at)),
        UserSort::Name => users.sort_by(|a, b| a.username.cmp(&b.username)),
    }

    page_window(users, query.page, query.page_size)
}

/// Orders a question's answers for display: the accepted answer first,
/// then by votes descending. Stable, so equal-vote answers keep their
/// submission order.
#[must_use]
pub fn order_answers(mut answers: Vec<Answer>) -> Vec<Answer> {
    answers.sort_by(|a, b| {
        b.is_accepted
            .cmp(&a.is_accepted)
            .then(b.votes.cmp(&a.votes))
    });
    answers
}
