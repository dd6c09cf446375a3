//! The `Record` trait: how each entity kind plugs into a collection.
//!
//! A record knows its identifier, how the provider allocates the next
//! identifier, how to materialize a full record from a caller's draft,
//! and how to apply a partial update. Providers stay generic over this.

use chrono::{DateTime, Utc};
use devexchange_model::{
    normalize_tags, Answer, AnswerDraft, AnswerPatch, Badge, BadgeTier, Question, QuestionDraft,
    QuestionPatch, Tag, TagDraft, TagPatch, User, UserDraft, UserPatch,
};
use devexchange_types::{AnswerId, QuestionId, TagId, UserId};
use std::fmt;

/// A value record managed by a collection provider.
pub trait Record: Clone + Send + Sync + 'static {
    /// The identifier type.
    type Id: Clone + PartialEq + fmt::Display + Send + Sync;
    /// Caller-supplied fields for a create.
    type Draft: Send;
    /// Explicit partial update; absent fields keep stored values.
    type Patch: Send;

    /// Singular kind name, used in errors and log lines.
    const KIND: &'static str;
    /// Table name under a remote provider's base URL.
    const TABLE: &'static str;

    /// This record's identifier.
    fn id(&self) -> Self::Id;

    /// Allocates the identifier for a new record given the existing ones.
    fn next_id(existing: &[Self]) -> Self::Id;

    /// Builds a full record from a draft: provider defaults (zeroed
    /// counters), the assigned id, and creation timestamps.
    fn from_draft(draft: Self::Draft, id: Self::Id, now: DateTime<Utc>) -> Self;

    /// Applies a partial update in place.
    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

impl Record for Question {
    type Id = QuestionId;
    type Draft = QuestionDraft;
    type Patch = QuestionPatch;

    const KIND: &'static str = "question";
    const TABLE: &'static str = "questions";

    fn id(&self) -> QuestionId {
        self.id
    }

    fn next_id(existing: &[Self]) -> QuestionId {
        let max = existing.iter().map(|q| q.id.as_u64()).max().unwrap_or(0);
        QuestionId::new(max + 1)
    }

    fn from_draft(draft: QuestionDraft, id: QuestionId, now: DateTime<Utc>) -> Self {
        Question {
            id,
            title: draft.title,
            body: draft.body,
            tags: normalize_tags(draft.tags),
            author_id: draft.author_id,
            author_name: draft.author_name,
            author_reputation: draft.author_reputation,
            votes: 0,
            answer_count: 0,
            views: 0,
            accepted_answer_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: QuestionPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(tags) = patch.tags {
            self.tags = normalize_tags(tags);
        }
        if let Some(votes) = patch.votes {
            self.votes = votes;
        }
        if let Some(answer_count) = patch.answer_count {
            self.answer_count = answer_count;
        }
        if let Some(views) = patch.views {
            self.views = views;
        }
        if let Some(accepted) = patch.accepted_answer_id {
            self.accepted_answer_id = accepted;
        }
        self.updated_at = now;
    }
}

impl Record for Answer {
    type Id = AnswerId;
    type Draft = AnswerDraft;
    type Patch = AnswerPatch;

    const KIND: &'static str = "answer";
    const TABLE: &'static str = "answers";

    fn id(&self) -> AnswerId {
        self.id
    }

    fn next_id(existing: &[Self]) -> AnswerId {
        let max = existing.iter().map(|a| a.id.as_u64()).max().unwrap_or(0);
        AnswerId::new(max + 1)
    }

    fn from_draft(draft: AnswerDraft, id: AnswerId, now: DateTime<Utc>) -> Self {
        Answer {
            id,
            question_id: draft.question_id,
            body: draft.body,
            author_id: draft.author_id,
            author_name: draft.author_name,
            author_reputation: draft.author_reputation,
            votes: 0,
            is_accepted: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: AnswerPatch, now: DateTime<Utc>) {
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(votes) = patch.votes {
            self.votes = votes;
        }
        if let Some(is_accepted) = patch.is_accepted {
            self.is_accepted = is_accepted;
        }
        self.updated_at = now;
    }
}

impl Record for Tag {
    type Id = TagId;
    type Draft = TagDraft;
    type Patch = TagPatch;

    const KIND: &'static str = "tag";
    const TABLE: &'static str = "tags";

    fn id(&self) -> TagId {
        self.id
    }

    fn next_id(existing: &[Self]) -> TagId {
        let max = existing.iter().map(|t| t.id.as_u64()).max().unwrap_or(0);
        TagId::new(max + 1)
    }

    fn from_draft(draft: TagDraft, id: TagId, now: DateTime<Utc>) -> Self {
        Tag {
            id,
            name: draft.name.trim().to_lowercase(),
            description: draft.description,
            question_count: 0,
            followers: 0,
            created_at: now,
        }
    }

    fn apply_patch(&mut self, patch: TagPatch, _now: DateTime<Utc>) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(question_count) = patch.question_count {
            self.question_count = question_count;
        }
        if let Some(followers) = patch.followers {
            self.followers = followers;
        }
    }
}

impl Record for User {
    type Id = UserId;
    type Draft = UserDraft;
    type Patch = UserPatch;

    const KIND: &'static str = "user";
    const TABLE: &'static str = "users";

    fn id(&self) -> UserId {
        self.id.clone()
    }

    fn next_id(existing: &[Self]) -> UserId {
        let max = existing
            .iter()
            .filter_map(|u| u.id.as_str().strip_prefix("user"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        UserId::new(format!("user{}", max + 1))
    }

    fn from_draft(draft: UserDraft, id: UserId, now: DateTime<Utc>) -> Self {
        User {
            id,
            username: draft.username,
            email: draft.email,
            // New members start with one reputation point and the
            // starter badge rather than a bare zeroed profile.
            reputation: 1,
            badges: vec![Badge::new("Student", BadgeTier::Bronze)],
            joined_at: now,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch, _now: DateTime<Utc>) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(reputation) = patch.reputation {
            self.reputation = reputation;
        }
        if let Some(badges) = patch.badges {
            self.badges = badges;
        }
    }
}
