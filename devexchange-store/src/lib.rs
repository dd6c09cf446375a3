//! Collection providers for DevExchange.
//!
//! The provider is the sole owner of the backing records; consumers get
//! clones and route every mutation back through the [`Collection`]
//! contract. Two interchangeable implementations:
//!
//! - [`MemoryCollection`] / [`MemoryProvider`] — mutex-guarded vec, used
//!   by tests and offline development
//! - [`RemoteCollection`] / [`RemoteProvider`] — HTTP JSON client for a
//!   remote record-table service
//!
//! The feed composer and the entity mutators are generic over
//! [`Collection`], so swapping providers never touches domain logic.

mod error;
mod memory;
mod record;
mod remote;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryCollection, MemoryProvider};
pub use record::Record;
pub use remote::{RemoteCollection, RemoteProvider, RemoteStoreConfig};

use async_trait::async_trait;

/// The collection provider contract, one instance per record kind.
#[async_trait]
pub trait Collection<R: Record>: Send + Sync {
    /// Returns the full unfiltered collection.
    async fn get_all(&self) -> StoreResult<Vec<R>>;

    /// Returns the record with the given identifier.
    async fn get(&self, id: &R::Id) -> StoreResult<R>;

    /// Creates a record from a draft. The provider assigns the
    /// identifier, timestamps, and default counters.
    async fn create(&self, draft: R::Draft) -> StoreResult<R>;

    /// Applies a partial update and returns the updated record.
    async fn update(&self, id: &R::Id, patch: R::Patch) -> StoreResult<R>;

    /// Removes a record. Returns `true` on success.
    async fn delete(&self, id: &R::Id) -> StoreResult<bool>;
}
