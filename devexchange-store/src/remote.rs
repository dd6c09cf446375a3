//! Remote record-table provider.
//!
//! Talks JSON to a record-table service exposing one table per record
//! kind under `{base_url}/{table}`. Transport failures surface as
//! [`StoreError::Unavailable`]; a 404 maps to [`StoreError::NotFound`].
//! The client never retries — retry policy belongs to the caller.

use crate::error::{StoreError, StoreResult};
use crate::record::Record;
use crate::Collection;
use async_trait::async_trait;
use devexchange_model::{Answer, Question, Tag, User};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::time::Duration;
use tracing::debug;

/// Connection settings for the remote record-table service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteStoreConfig {
    /// Base URL of the record-table service (e.g. `https://api.example.com/v1`).
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RemoteStoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

/// A remote collection of one record kind.
pub struct RemoteCollection<R> {
    client: Client,
    base_url: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RemoteCollection<R> {
    /// Builds a table client from a shared HTTP client and the service's
    /// base URL.
    #[must_use]
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            _record: PhantomData,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/{}", self.base_url, R::TABLE)
    }

    fn record_url(&self, id: &R::Id) -> String {
        format!("{}/{}/{}", self.base_url, R::TABLE, id)
    }
}

impl<R> RemoteCollection<R>
where
    R: Record + DeserializeOwned,
{
    /// Checks the response status, then decodes the record body.
    async fn decode(&self, response: Response, id: Option<&R::Id>) -> StoreResult<R> {
        let response = self.check_status(response, id)?;
        response
            .json::<R>()
            .await
            .map_err(|e| StoreError::Unavailable(format!("failed to parse {}: {e}", R::KIND)))
    }

    fn check_status(&self, response: Response, id: Option<&R::Id>) -> StoreResult<Response> {
        match response.status() {
            StatusCode::NOT_FOUND => {
                let id = id.map(|i| i.to_string()).unwrap_or_default();
                Err(StoreError::NotFound { kind: R::KIND, id })
            }
            status if !status.is_success() => Err(StoreError::Unavailable(format!(
                "{} request failed with status {status}",
                R::KIND
            ))),
            _ => Ok(response),
        }
    }
}

#[async_trait]
impl<R> Collection<R> for RemoteCollection<R>
where
    R: Record + Serialize + DeserializeOwned,
    R::Draft: Serialize,
    R::Patch: Serialize,
{
    async fn get_all(&self) -> StoreResult<Vec<R>> {
        debug!("fetching all {}", R::TABLE);
        let response = self
            .client
            .get(self.table_url())
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("{} list failed: {e}", R::TABLE)))?;
        let response = self.check_status(response, None)?;
        response
            .json::<Vec<R>>()
            .await
            .map_err(|e| StoreError::Unavailable(format!("failed to parse {} list: {e}", R::TABLE)))
    }

    async fn get(&self, id: &R::Id) -> StoreResult<R> {
        let response = self
            .client
            .get(self.record_url(id))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("{} fetch failed: {e}", R::KIND)))?;
        self.decode(response, Some(id)).await
    }

    async fn create(&self, draft: R::Draft) -> StoreResult<R> {
        debug!("creating {}", R::KIND);
        let response = self
            .client
            .post(self.table_url())
            .json(&draft)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("{} create failed: {e}", R::KIND)))?;
        self.decode(response, None).await
    }

    async fn update(&self, id: &R::Id, patch: R::Patch) -> StoreResult<R> {
        debug!("updating {} {}", R::KIND, id);
        let response = self
            .client
            .patch(self.record_url(id))
            .json(&patch)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("{} update failed: {e}", R::KIND)))?;
        self.decode(response, Some(id)).await
    }

    async fn delete(&self, id: &R::Id) -> StoreResult<bool> {
        debug!("deleting {} {}", R::KIND, id);
        let response = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("{} delete failed: {e}", R::KIND)))?;
        self.check_status(response, Some(id))?;
        Ok(true)
    }
}

/// The full remote provider: one table client per record kind, sharing a
/// single HTTP client.
pub struct RemoteProvider {
    pub questions: RemoteCollection<Question>,
    pub answers: RemoteCollection<Answer>,
    pub tags: RemoteCollection<Tag>,
    pub users: RemoteCollection<User>,
}

impl RemoteProvider {
    /// Builds a provider from connection settings.
    ///
    /// Returns [`StoreError::Unavailable`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &RemoteStoreConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::Unavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            questions: RemoteCollection::new(client.clone(), &config.base_url),
            answers: RemoteCollection::new(client.clone(), &config.base_url),
            tags: RemoteCollection::new(client.clone(), &config.base_url),
            users: RemoteCollection::new(client, &config.base_url),
        })
    }
}
