use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use bucketlist::controller::ListController;
use bucketlist::errors::{BucketlistError, Result};
use bucketlist::session::Session;
use bucketlist::storage::{
    MemoryStore, ObjectFields, ObjectQuery, ObjectStore, StoredObject,
};

/// Store wrapper that can be told to fail the next operation and counts
/// delete requests, so tests can assert on what actually reached the store.
#[derive(Debug)]
struct FlakyStore {
    inner: MemoryStore,
    fail_query: AtomicBool,
    fail_create: AtomicBool,
    fail_delete: AtomicBool,
    delete_calls: AtomicUsize,
}

impl FlakyStore {
    fn new() -> Self {
        FlakyStore {
            inner: MemoryStore::new("myBucket"),
            fail_query: AtomicBool::new(false),
            fail_create: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            delete_calls: AtomicUsize::new(0),
        }
    }

    fn fail(flag: &AtomicBool) -> Result<()> {
        if flag.swap(false, Ordering::SeqCst) {
            Err(BucketlistError::remote_operation("injected failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ObjectStore for FlakyStore {
    async fn query(&self, query: &ObjectQuery) -> Result<Vec<StoredObject>> {
        Self::fail(&self.fail_query)?;
        self.inner.query(query).await
    }

    async fn create(&self, fields: ObjectFields) -> Result<StoredObject> {
        Self::fail(&self.fail_create)?;
        self.inner.create(fields).await
    }

    async fn delete(&self, object: &StoredObject) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        Self::fail(&self.fail_delete)?;
        self.inner.delete(object).await
    }

    fn session(&self) -> &Session {
        self.inner.session()
    }

    fn backend_name(&self) -> &'static str {
        "flaky"
    }
}

fn controller_with_flaky() -> (ListController, Arc<FlakyStore>) {
    let store = Arc::new(FlakyStore::new());
    (ListController::new(store.clone()), store)
}

#[tokio::test]
async fn test_load_replaces_prior_content_in_server_order() {
    let (mut controller, store) = controller_with_flaky();

    let a = controller.create().await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    let b = controller.create().await.unwrap();

    // Poison the displayed list with a stale extra entry, then load
    controller.load().await.unwrap();
    assert_eq!(controller.len(), 2);
    // Newest first: B then A
    assert_eq!(controller.item(0).unwrap().id, b.id);
    assert_eq!(controller.item(1).unwrap().id, a.id);
    assert_eq!(store.delete_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_consecutive_creates_number_labels_and_prepend() {
    let (mut controller, _store) = controller_with_flaky();

    for expected in 1..=4u32 {
        let object = controller.create().await.unwrap();
        assert_eq!(object.label(), format!("MyObject {}", expected));
        assert_eq!(controller.item(0).unwrap().id, object.id);
    }
    assert_eq!(controller.len(), 4);
    assert_eq!(controller.object_count(), 4);
}

#[tokio::test]
async fn test_failed_create_burns_counter_but_not_list() {
    let (mut controller, store) = controller_with_flaky();

    controller.create().await.unwrap(); // MyObject 1
    store.fail_create.store(true, Ordering::SeqCst);
    let err = controller.create().await.unwrap_err(); // MyObject 2 burned
    assert!(matches!(err, BucketlistError::RemoteOperation(_)));
    assert_eq!(controller.len(), 1);
    assert_eq!(controller.object_count(), 2);

    // Next successful create skips the burned value
    let object = controller.create().await.unwrap();
    assert_eq!(object.label(), "MyObject 3");
}

#[tokio::test]
async fn test_declining_the_prompt_changes_nothing() {
    let (mut controller, store) = controller_with_flaky();
    controller.create().await.unwrap();
    controller.create().await.unwrap();

    // Capturing a target without confirming must not touch list or store
    let _captured = controller.item(0).unwrap().clone();
    assert_eq!(controller.len(), 2);
    assert_eq!(store.delete_calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.inner.len(), 2);
}

#[tokio::test]
async fn test_confirmed_delete_removes_exactly_the_captured_object() {
    let (mut controller, store) = controller_with_flaky();
    controller.create().await.unwrap();
    let victim = controller.create().await.unwrap();
    controller.create().await.unwrap();

    controller.delete(&victim).await.unwrap();

    assert_eq!(controller.len(), 2);
    assert!(controller.items().iter().all(|o| o.id != victim.id));
    assert_eq!(store.delete_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.inner.len(), 2);
}

#[tokio::test]
async fn test_failed_delete_leaves_list_unchanged() {
    let (mut controller, store) = controller_with_flaky();
    let victim = controller.create().await.unwrap();

    store.fail_delete.store(true, Ordering::SeqCst);
    let err = controller.delete(&victim).await.unwrap_err();
    assert!(matches!(err, BucketlistError::RemoteOperation(_)));
    assert_eq!(controller.len(), 1);
    assert_eq!(controller.item(0).unwrap().id, victim.id);
    assert_eq!(store.inner.len(), 1);
}

#[tokio::test]
async fn test_failed_load_leaves_list_empty() {
    let (mut controller, store) = controller_with_flaky();
    controller.create().await.unwrap();
    assert_eq!(controller.len(), 1);

    store.fail_query.store(true, Ordering::SeqCst);
    controller.load().await.unwrap_err();
    assert!(controller.is_empty());

    // A later successful load recovers the server state
    controller.load().await.unwrap();
    assert_eq!(controller.len(), 1);
}

#[tokio::test]
async fn test_captured_target_survives_list_reordering() {
    let (mut controller, _store) = controller_with_flaky();
    controller.create().await.unwrap();
    let victim = controller.create().await.unwrap();

    // Prompt is shown for `victim`; the list changes underneath it
    let captured = victim.clone();
    controller.create().await.unwrap();
    controller.load().await.unwrap();

    controller.delete(&captured).await.unwrap();
    assert_eq!(controller.len(), 2);
    assert!(controller.items().iter().all(|o| o.id != victim.id));
}

#[tokio::test]
async fn test_counter_resets_with_a_fresh_controller() {
    let store = Arc::new(MemoryStore::new("myBucket"));
    let mut first = ListController::new(store.clone());
    first.create().await.unwrap();
    first.create().await.unwrap();

    let mut second = ListController::new(store);
    let object = second.create().await.unwrap();
    assert_eq!(object.label(), "MyObject 1");
}
