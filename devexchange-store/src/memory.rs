//! Array-backed in-memory provider.
//!
//! The backing vec is the sole owner of the records; every read hands out
//! clones, and every write goes through [`Collection`] so the ownership
//! contract holds even in tests. State lives in an explicitly constructed
//! provider value, never in module-level globals.

use crate::error::{StoreError, StoreResult};
use crate::record::Record;
use crate::Collection;
use async_trait::async_trait;
use chrono::Utc;
use devexchange_model::{Answer, Question, Tag, User};
use std::sync::Mutex;
use tracing::debug;

/// An in-memory collection of one record kind.
#[derive(Debug)]
pub struct MemoryCollection<R> {
    records: Mutex<Vec<R>>,
}

impl<R> Default for MemoryCollection<R> {
    fn default() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

impl<R: Record> MemoryCollection<R> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Creates a collection seeded with existing records.
    #[must_use]
    pub fn from_records(records: Vec<R>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<R>> {
        // A poisoned lock means a panic mid-write; the backing vec is
        // still structurally valid, so recover the guard.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl<R: Record> Collection<R> for MemoryCollection<R> {
    async fn get_all(&self) -> StoreResult<Vec<R>> {
        Ok(self.lock().clone())
    }

    async fn get(&self, id: &R::Id) -> StoreResult<R> {
        self.lock()
            .iter()
            .find(|r| r.id() == *id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(R::KIND, id))
    }

    async fn create(&self, draft: R::Draft) -> StoreResult<R> {
        let mut records = self.lock();
        let id = R::next_id(&records);
        let record = R::from_draft(draft, id, Utc::now());
        records.push(record.clone());
        debug!("created {} {}", R::KIND, record.id());
        Ok(record)
    }

    async fn update(&self, id: &R::Id, patch: R::Patch) -> StoreResult<R> {
        let mut records = self.lock();
        let record = records
            .iter_mut()
            .find(|r| r.id() == *id)
            .ok_or_else(|| StoreError::not_found(R::KIND, id))?;
        record.apply_patch(patch, Utc::now());
        debug!("updated {} {}", R::KIND, id);
        Ok(record.clone())
    }

    async fn delete(&self, id: &R::Id) -> StoreResult<bool> {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|r| r.id() != *id);
        if records.len() == before {
            return Err(StoreError::not_found(R::KIND, id));
        }
        debug!("deleted {} {}", R::KIND, id);
        Ok(true)
    }
}

/// The full in-memory provider: one collection per record kind.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    pub questions: MemoryCollection<Question>,
    pub answers: MemoryCollection<Answer>,
    pub tags: MemoryCollection<Tag>,
    pub users: MemoryCollection<User>,
}

impl MemoryProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider seeded with existing records.
    #[must_use]
    pub fn seeded(
        questions: Vec<Question>,
        answers: Vec<Answer>,
        tags: Vec<Tag>,
        users: Vec<User>,
    ) -> Self {
        Self {
            questions: MemoryCollection::from_records(questions),
            answers: MemoryCollection::from_records(answers),
            tags: MemoryCollection::from_records(tags),
            users: MemoryCollection::from_records(users),
        }
    }
}
