//! The entity mutators: named, single-purpose state transitions.
//!
//! Each mutator reads one record, computes the new derived value, and
//! writes it back through the collection provider. There is no locking
//! and no per-user vote ledger: the read-modify-write cycle is
//! last-write-wins, and repeated votes from the same caller accumulate.
//! Callers issue one mutation at a time and await completion.
//!
//! On failure, record state is left unchanged, with one documented
//! exception: [`accept_answer`] writes the answer collection and then the
//! question collection in two steps, so a failure between them leaves the
//! answer flags updated while the question still references the old
//! accepted answer.

use crate::error::{EngineError, EngineResult};
use devexchange_model::{
    Answer, AnswerDraft, AnswerPatch, Question, QuestionPatch, Tag, TagPatch, User, UserPatch,
};
use devexchange_store::Collection;
use devexchange_types::{AnswerId, QuestionId, TagId, UserId, Vote};
use tracing::debug;

/// Applies a vote to a question's counter and touches `updated_at`.
pub async fn vote_question(
    questions: &impl Collection<Question>,
    id: QuestionId,
    vote: Vote,
) -> EngineResult<Question> {
    let question = questions.get(&id).await?;
    debug!("applying vote {} to question {id}", vote.delta());
    let patch = QuestionPatch {
        votes: Some(question.votes + vote.delta()),
        ..Default::default()
    };
    Ok(questions.update(&id, patch).await?)
}

/// Applies a vote to an answer's counter and touches `updated_at`.
pub async fn vote_answer(
    answers: &impl Collection<Answer>,
    id: AnswerId,
    vote: Vote,
) -> EngineResult<Answer> {
    let answer = answers.get(&id).await?;
    debug!("applying vote {} to answer {id}", vote.delta());
    let patch = AnswerPatch {
        votes: Some(answer.votes + vote.delta()),
        ..Default::default()
    };
    Ok(answers.update(&id, patch).await?)
}

/// Marks an answer as the accepted resolution of its question.
///
/// Fails with [`EngineError::AnswerMismatch`] (leaving all records
/// untouched) when the answer belongs to a different question. Otherwise
/// unaccepts every sibling, accepts the target, and finally writes the
/// question's `accepted_answer_id`. The two collections are updated
/// sequentially with no transaction spanning them.
pub async fn accept_answer(
    questions: &impl Collection<Question>,
    answers: &impl Collection<Answer>,
    question_id: QuestionId,
    answer_id: AnswerId,
) -> EngineResult<Answer> {
    let target = answers.get(&answer_id).await?;
    if target.question_id != question_id {
        return Err(EngineError::AnswerMismatch {
            answer: answer_id,
            question: question_id,
        });
    }
    // Resolve the question before any write so a bad id cannot leave a
    // half-applied acceptance.
    questions.get(&question_id).await?;

    for sibling in answers.get_all().await? {
        if sibling.question_id == question_id && sibling.is_accepted && sibling.id != answer_id {
            let patch = AnswerPatch {
                is_accepted: Some(false),
                ..Default::default()
            };
            answers.update(&sibling.id, patch).await?;
        }
    }

    let patch = AnswerPatch {
        is_accepted: Some(true),
        ..Default::default()
    };
    let accepted = answers.update(&answer_id, patch).await?;

    debug!("accepted answer {answer_id} for question {question_id}");
    let patch = QuestionPatch {
        accepted_answer_id: Some(Some(answer_id)),
        ..Default::default()
    };
    questions.update(&question_id, patch).await?;

    Ok(accepted)
}

/// Bumps a question's view counter by one.
///
/// Called once per detail-page load; views are not deduplicated per
/// visitor.
pub async fn increment_views(
    questions: &impl Collection<Question>,
    id: QuestionId,
) -> EngineResult<Question> {
    let question = questions.get(&id).await?;
    let patch = QuestionPatch {
        views: Some(question.views + 1),
        ..Default::default()
    };
    Ok(questions.update(&id, patch).await?)
}

/// Adjusts a user's reputation (floored at 0) and awards any newly
/// crossed milestone badges. Badges already held are never duplicated or
/// removed, so re-running at the same reputation is a no-op.
pub async fn update_reputation(
    users: &impl Collection<User>,
    id: &UserId,
    points: i64,
) -> EngineResult<User> {
    let mut user = users.get(id).await?;
    user.reputation = (user.reputation + points).max(0);
    user.award_milestone_badges();
    debug!("user {id} reputation now {}", user.reputation);
    let patch = UserPatch {
        reputation: Some(user.reputation),
        badges: Some(user.badges),
        ..Default::default()
    };
    Ok(users.update(id, patch).await?)
}

/// Bumps a tag's follower counter.
pub async fn follow_tag(tags: &impl Collection<Tag>, id: TagId) -> EngineResult<Tag> {
    let tag = tags.get(&id).await?;
    let patch = TagPatch {
        followers: Some(tag.followers + 1),
        ..Default::default()
    };
    Ok(tags.update(&id, patch).await?)
}

/// Drops a tag's follower counter, floored at 0.
pub async fn unfollow_tag(tags: &impl Collection<Tag>, id: TagId) -> EngineResult<Tag> {
    let tag = tags.get(&id).await?;
    let patch = TagPatch {
        followers: Some(tag.followers.saturating_sub(1)),
        ..Default::default()
    };
    Ok(tags.update(&id, patch).await?)
}

/// Submits an answer to an existing question and bumps the question's
/// answer counter.
pub async fn post_answer(
    questions: &impl Collection<Question>,
    answers: &impl Collection<Answer>,
    draft: AnswerDraft,
) -> EngineResult<Answer> {
    let question = questions.get(&draft.question_id).await?;
    let answer = answers.create(draft).await?;
    let patch = QuestionPatch {
        answer_count: Some(question.answer_count + 1),
        ..Default::default()
    };
    questions.update(&question.id, patch).await?;
    Ok(answer)
}

/// Fetches the answers submitted to one question, in submission order.
/// Display ordering (accepted first, then votes) is the feed composer's
/// concern.
pub async fn answers_for_question(
    answers: &impl Collection<Answer>,
    question_id: QuestionId,
) -> EngineResult<Vec<Answer>> {
    Ok(answers
        .get_all()
        .await?
        .into_iter()
        .filter(|a| a.question_id == question_id)
        .collect())
}
