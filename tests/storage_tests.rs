use std::sync::Arc;

use serde_json::json;

use bucketlist::config::AppConfig;
use bucketlist::storage::{
    LABEL_KEY, MemoryStore, ObjectFields, ObjectQuery, ObjectStore, SortOrder, StoreFactory,
    StoredObject,
};

fn label_fields(label: &str) -> ObjectFields {
    let mut fields = ObjectFields::new();
    fields.insert(LABEL_KEY.to_string(), json!(label));
    fields
}

#[cfg(test)]
mod stored_object_tests {
    use super::*;

    #[test]
    fn test_round_trips_through_json() {
        let value = json!({
            "_id": "o1",
            "_created": 1700000000000i64,
            "_modified": 1700000000000i64,
            "myObjectValue": "MyObject 1"
        });
        let record = value.as_object().unwrap().clone();
        let object = StoredObject::from_remote("user-1", "myBucket", record).unwrap();

        let serialized = serde_json::to_string(&object).unwrap();
        let back: StoredObject = serde_json::from_str(&serialized).unwrap();
        assert_eq!(object, back);
    }

    #[test]
    fn test_label_and_uri() {
        let value = json!({
            "_id": "o1",
            "_created": 1i64,
            "_modified": 1i64,
            "myObjectValue": "MyObject 9"
        });
        let object =
            StoredObject::from_remote("u", "myBucket", value.as_object().unwrap().clone())
                .unwrap();
        assert_eq!(object.label(), "MyObject 9");
        assert_eq!(object.uri(), "kiicloud://users/u/buckets/myBucket/objects/o1");
    }

    #[test]
    fn test_non_string_label_is_empty() {
        let value = json!({
            "_id": "o1",
            "_created": 1i64,
            "_modified": 1i64,
            "myObjectValue": 17
        });
        let object =
            StoredObject::from_remote("u", "b", value.as_object().unwrap().clone()).unwrap();
        assert_eq!(object.label(), "");
    }
}

#[cfg(test)]
mod memory_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_query_both_orders() {
        let store = MemoryStore::new("myBucket");
        let first = store.create(label_fields("first")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = store.create(label_fields("second")).await.unwrap();

        let desc = store
            .query(&ObjectQuery::all().sort_by_created_desc())
            .await
            .unwrap();
        assert_eq!(desc[0].id, second.id);

        let asc = store
            .query(&ObjectQuery::all().sort_by_created_asc())
            .await
            .unwrap();
        assert_eq!(asc[0].id, first.id);
    }

    #[tokio::test]
    async fn test_created_objects_carry_session_owner() {
        let store = MemoryStore::new("myBucket");
        let object = store.create(label_fields("x")).await.unwrap();
        assert_eq!(object.owner, store.session().user_id);
        assert_eq!(object.bucket, "myBucket");
    }

    #[tokio::test]
    async fn test_delete_removes_only_the_target() {
        let store = MemoryStore::new("myBucket");
        let keep = store.create(label_fields("keep")).await.unwrap();
        let drop = store.create(label_fields("drop")).await.unwrap();

        store.delete(&drop).await.unwrap();
        let remaining = store.query(&ObjectQuery::all()).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);
    }
}

#[cfg(test)]
mod factory_tests {
    use super::*;

    #[tokio::test]
    async fn test_factory_builds_memory_backend() {
        let config = AppConfig::default();
        let store: Arc<dyn ObjectStore> = StoreFactory::create(&config).await.unwrap();
        assert_eq!(store.backend_name(), "memory");
        assert_eq!(store.session().user_id, "local");
    }

    #[tokio::test]
    async fn test_factory_rejects_unknown_backend() {
        let mut config = AppConfig::default();
        config.store.backend = "carrier-pigeon".to_string();
        let err = StoreFactory::create(&config).await.unwrap_err();
        assert!(err.format_simple().contains("carrier-pigeon"));
    }

    #[tokio::test]
    async fn test_rest_backend_requires_app_id() {
        let mut config = AppConfig::default();
        config.store.backend = "rest".to_string();
        let err = StoreFactory::create(&config).await.unwrap_err();
        assert!(matches!(
            err,
            bucketlist::errors::BucketlistError::Config(_)
        ));
    }
}

#[test]
fn test_query_default_sort_is_created_desc() {
    assert_eq!(ObjectQuery::all().sort, SortOrder::CreatedDesc);
}
