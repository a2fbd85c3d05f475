//! In-process object store
//!
//! Assigns UUID identifiers and wall-clock timestamps, and answers queries
//! with the same sort semantics as the remote backend. Used by the test
//! suite and as the offline default backend.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::{BucketlistError, Result};
use crate::session::Session;
use crate::storage::models::{ObjectFields, ObjectQuery, SortOrder, StoredObject};
use crate::storage::ObjectStore;

#[derive(Debug)]
pub struct MemoryStore {
    bucket: String,
    session: Session,
    objects: Mutex<Vec<StoredObject>>,
}

impl MemoryStore {
    pub fn new(bucket: &str) -> Self {
        MemoryStore {
            bucket: bucket.to_string(),
            session: Session::local(),
            objects: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<StoredObject>> {
        // A poisoned lock means a panic mid-mutation; propagating the panic
        // is the only sensible option for an in-process test store.
        self.objects.lock().expect("memory store lock poisoned")
    }

    /// Number of stored objects, for assertions in tests
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn query(&self, query: &ObjectQuery) -> Result<Vec<StoredObject>> {
        let mut objects = self.lock().clone();
        match query.sort {
            SortOrder::CreatedDesc => objects.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::CreatedAsc => objects.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
        Ok(objects)
    }

    async fn create(&self, fields: ObjectFields) -> Result<StoredObject> {
        let now = Utc::now();
        let object = StoredObject {
            id: Uuid::new_v4().to_string(),
            owner: self.session.user_id.clone(),
            bucket: self.bucket.clone(),
            created_at: now,
            modified_at: now,
            fields,
        };
        self.lock().push(object.clone());
        Ok(object)
    }

    async fn delete(&self, object: &StoredObject) -> Result<()> {
        let mut objects = self.lock();
        let before = objects.len();
        objects.retain(|o| o.id != object.id);
        if objects.len() == before {
            return Err(BucketlistError::not_found(format!(
                "object {} does not exist",
                object.id
            )));
        }
        Ok(())
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn label_fields(label: &str) -> ObjectFields {
        let mut fields = ObjectFields::new();
        fields.insert(crate::storage::LABEL_KEY.to_string(), json!(label));
        fields
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = MemoryStore::new("myBucket");
        let a = store.create(label_fields("a")).await.unwrap();
        let b = store.create(label_fields("b")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_query_sorts_created_desc() {
        let store = MemoryStore::new("myBucket");
        let first = store.create(label_fields("first")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = store.create(label_fields("second")).await.unwrap();

        let results = store
            .query(&ObjectQuery::all().sort_by_created_desc())
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, second.id);
        assert_eq!(results[1].id, first.id);
    }

    #[tokio::test]
    async fn test_delete_unknown_object_fails() {
        let store = MemoryStore::new("myBucket");
        let obj = store.create(label_fields("x")).await.unwrap();
        store.delete(&obj).await.unwrap();
        let err = store.delete(&obj).await.unwrap_err();
        assert!(matches!(err, BucketlistError::NotFound(_)));
    }
}
