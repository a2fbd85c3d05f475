//! Object store client layer
//!
//! `ObjectStore` is the seam between the application and whatever holds the
//! objects: a remote bucket over REST, or an in-process store for tests and
//! offline use. All persistence, querying and authentication live behind it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::session::Session;

pub mod backend;
pub mod models;

pub use backend::{MemoryStore, RestStore};
pub use models::{LABEL_KEY, ObjectFields, ObjectQuery, SortOrder, StoredObject};

#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug {
    /// Fetch the current user's objects matching `query`
    async fn query(&self, query: &ObjectQuery) -> Result<Vec<StoredObject>>;

    /// Persist a new object; the store assigns the id and timestamps
    async fn create(&self, fields: ObjectFields) -> Result<StoredObject>;

    /// Delete one object, resolved by its identifier
    async fn delete(&self, object: &StoredObject) -> Result<()>;

    /// Session the store operations are scoped to
    fn session(&self) -> &Session;

    fn backend_name(&self) -> &'static str;
}

pub struct StoreFactory;

impl StoreFactory {
    pub async fn create(config: &AppConfig) -> Result<Arc<dyn ObjectStore>> {
        let boxed: Box<dyn ObjectStore> = match config.store.backend.as_str() {
            "memory" => Box::new(MemoryStore::new(&config.store.bucket)),
            "rest" => Box::new(RestStore::connect(config).await?),
            other => {
                return Err(crate::errors::BucketlistError::backend_not_found(format!(
                    "unknown store backend '{}', expected 'memory' or 'rest'",
                    other
                )));
            }
        };

        tracing::info!("Using store backend: {}", boxed.backend_name());
        Ok(Arc::from(boxed))
    }
}
