use devexchange_engine::{
    answers_for_question, follow_tag, increment_views, post_answer, unfollow_tag, vote_answer,
    vote_question, EngineError,
};
use devexchange_model::{AnswerDraft, QuestionDraft, TagDraft};
use devexchange_store::{Collection, MemoryProvider, StoreError};
use devexchange_types::{QuestionId, UserId, Vote};

fn question_draft() -> QuestionDraft {
    QuestionDraft {
        title: "title".to_string(),
        body: "body".to_string(),
        tags: vec!["rust".to_string()],
        author_id: UserId::new("user1"),
        author_name: "alice".to_string(),
        author_reputation: 10,
    }
}

fn answer_draft(question_id: QuestionId) -> AnswerDraft {
    AnswerDraft {
        question_id,
        body: "try this".to_string(),
        author_id: UserId::new("user2"),
        author_name: "bob".to_string(),
        author_reputation: 5,
    }
}

// ── Question votes ───────────────────────────────────────────────

#[tokio::test]
async fn upvote_increments_counter() {
    let provider = MemoryProvider::new();
    let q = provider.questions.create(question_draft()).await.unwrap();
    let voted = vote_question(&provider.questions, q.id, Vote::Up)
        .await
        .unwrap();
    assert_eq!(voted.votes, 1);
}

#[tokio::test]
async fn repeated_downvotes_accumulate() {
    // Votes are raw counter deltas with no per-user ledger.
    let provider = MemoryProvider::new();
    let q = provider.questions.create(question_draft()).await.unwrap();
    for _ in 0..3 {
        vote_question(&provider.questions, q.id, Vote::Up)
            .await
            .unwrap();
    }
    let after_first = vote_question(&provider.questions, q.id, Vote::Down)
        .await
        .unwrap();
    assert_eq!(after_first.votes, 2);
    let after_second = vote_question(&provider.questions, q.id, Vote::Down)
        .await
        .unwrap();
    assert_eq!(after_second.votes, 1);
}

#[tokio::test]
async fn neutral_vote_changes_nothing_but_touches_updated_at() {
    let provider = MemoryProvider::new();
    let q = provider.questions.create(question_draft()).await.unwrap();
    let voted = vote_question(&provider.questions, q.id, Vote::Neutral)
        .await
        .unwrap();
    assert_eq!(voted.votes, 0);
    assert!(voted.updated_at >= q.updated_at);
}

#[tokio::test]
async fn votes_can_go_negative() {
    let provider = MemoryProvider::new();
    let q = provider.questions.create(question_draft()).await.unwrap();
    let voted = vote_question(&provider.questions, q.id, Vote::Down)
        .await
        .unwrap();
    assert_eq!(voted.votes, -1);
}

#[tokio::test]
async fn vote_on_missing_question_is_not_found() {
    let provider = MemoryProvider::new();
    let err = vote_question(&provider.questions, QuestionId::new(9), Vote::Up)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Store(StoreError::NotFound { .. })
    ));
}

// ── Answer votes ─────────────────────────────────────────────────

#[tokio::test]
async fn answer_votes_accumulate() {
    let provider = MemoryProvider::new();
    let q = provider.questions.create(question_draft()).await.unwrap();
    let a = provider.answers.create(answer_draft(q.id)).await.unwrap();
    vote_answer(&provider.answers, a.id, Vote::Up).await.unwrap();
    let voted = vote_answer(&provider.answers, a.id, Vote::Up).await.unwrap();
    assert_eq!(voted.votes, 2);
}

// ── Views ────────────────────────────────────────────────────────

#[tokio::test]
async fn views_increment_by_one_per_call() {
    let provider = MemoryProvider::new();
    let q = provider.questions.create(question_draft()).await.unwrap();
    increment_views(&provider.questions, q.id).await.unwrap();
    let viewed = increment_views(&provider.questions, q.id).await.unwrap();
    assert_eq!(viewed.views, 2);
}

// ── Tag following ────────────────────────────────────────────────

#[tokio::test]
async fn follow_and_unfollow_move_the_counter() {
    let provider = MemoryProvider::new();
    let tag = provider
        .tags
        .create(TagDraft {
            name: "rust".to_string(),
            description: String::new(),
        })
        .await
        .unwrap();
    follow_tag(&provider.tags, tag.id).await.unwrap();
    let followed = follow_tag(&provider.tags, tag.id).await.unwrap();
    assert_eq!(followed.followers, 2);
    let unfollowed = unfollow_tag(&provider.tags, tag.id).await.unwrap();
    assert_eq!(unfollowed.followers, 1);
}

#[tokio::test]
async fn unfollow_floors_at_zero() {
    let provider = MemoryProvider::new();
    let tag = provider
        .tags
        .create(TagDraft {
            name: "rust".to_string(),
            description: String::new(),
        })
        .await
        .unwrap();
    let unfollowed = unfollow_tag(&provider.tags, tag.id).await.unwrap();
    assert_eq!(unfollowed.followers, 0);
}

// ── Posting answers ──────────────────────────────────────────────

#[tokio::test]
async fn post_answer_bumps_answer_count() {
    let provider = MemoryProvider::new();
    let q = provider.questions.create(question_draft()).await.unwrap();
    post_answer(&provider.questions, &provider.answers, answer_draft(q.id))
        .await
        .unwrap();
    let question = provider.questions.get(&q.id).await.unwrap();
    assert_eq!(question.answer_count, 1);
}

#[tokio::test]
async fn post_answer_to_missing_question_fails_without_creating() {
    let provider = MemoryProvider::new();
    let err = post_answer(
        &provider.questions,
        &provider.answers,
        answer_draft(QuestionId::new(42)),
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Store(StoreError::NotFound { .. })
    ));
    assert!(provider.answers.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn answers_for_question_filters_by_question() {
    let provider = MemoryProvider::new();
    let q1 = provider.questions.create(question_draft()).await.unwrap();
    let q2 = provider.questions.create(question_draft()).await.unwrap();
    provider.answers.create(answer_draft(q1.id)).await.unwrap();
    provider.answers.create(answer_draft(q2.id)).await.unwrap();
    provider.answers.create(answer_draft(q1.id)).await.unwrap();

    let answers = answers_for_question(&provider.answers, q1.id).await.unwrap();
    assert_eq!(answers.len(), 2);
    assert!(answers.iter().all(|a| a.question_id == q1.id));
}
