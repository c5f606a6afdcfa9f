use crate::domain::model::{Actor, Actress};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    /// API root, without the collection segment.
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
}

/// A record type served by one collection of the API.
pub trait Entity: Sized + Send + std::fmt::Debug + 'static {
    /// Path segment under the API root, e.g. `actresses`.
    const COLLECTION: &'static str;
    /// Human label used in log lines.
    const LABEL: &'static str;

    /// Structural check plus conversion into the typed record.
    fn from_json(value: serde_json::Value) -> Result<Self>;

    fn entity_id(&self) -> u64;
}

/// Read access to the cast collections.
///
/// Every method swallows failures: single lookups yield `None`, collection
/// lookups yield an empty vec, batch lookups yield one slot per requested id.
#[async_trait]
pub trait CastSource: Send + Sync {
    async fn get_actress(&self, id: u64) -> Option<Actress>;
    async fn get_all_actresses(&self) -> Vec<Actress>;
    async fn get_actresses(&self, ids: &[u64]) -> Vec<Option<Actress>>;

    async fn get_actor(&self, id: u64) -> Option<Actor>;
    async fn get_all_actors(&self) -> Vec<Actor>;
    async fn get_actors(&self, ids: &[u64]) -> Vec<Option<Actor>>;
}
