//! List screen controller
//!
//! Owns the ordered list of objects shown to the user and the operations
//! that may change it. The list is a mirror of the last server-confirmed
//! state: `load` replaces it, `create` prepends, `delete` removes, and no
//! mutation happens before the store confirms the operation. Failures leave
//! the list exactly as it was (except `load`, which clears up front, so a
//! failed load shows an empty list).

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::storage::{LABEL_KEY, ObjectFields, ObjectQuery, ObjectStore, StoredObject};

pub struct ListController {
    store: Arc<dyn ObjectStore>,
    items: Vec<StoredObject>,
    /// Counter feeding the auto-generated labels. Increments once per
    /// `create` call whether or not the request succeeds (a failed create
    /// burns the value), and resets only when the controller is recreated.
    object_count: u32,
}

impl ListController {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        ListController {
            store,
            items: Vec::new(),
            object_count: 0,
        }
    }

    /// Objects in display order, newest first
    pub fn items(&self) -> &[StoredObject] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&StoredObject> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn object_count(&self) -> u32 {
        self.object_count
    }

    pub fn store(&self) -> &Arc<dyn ObjectStore> {
        &self.store
    }

    /// Fetch all objects for the current session, newest first, and replace
    /// the displayed list with the result. The list is cleared before the
    /// request goes out, so a failed load leaves it empty.
    pub async fn load(&mut self) -> Result<usize> {
        self.items.clear();
        let query = ObjectQuery::all().sort_by_created_desc();
        let objects = self.store.query(&query).await.inspect_err(|e| {
            warn!("Error loading objects: {}", e);
        })?;
        debug!("Objects loaded: {}", objects.len());
        self.items = objects;
        Ok(self.items.len())
    }

    /// Create a new auto-labelled object and prepend it to the list once the
    /// store confirms it.
    pub async fn create(&mut self) -> Result<StoredObject> {
        self.object_count += 1;
        let label = format!("MyObject {}", self.object_count);

        let mut fields = ObjectFields::new();
        fields.insert(LABEL_KEY.to_string(), json!(label));

        let object = self.store.create(fields).await.inspect_err(|e| {
            warn!("Error creating object: {}", e);
        })?;
        debug!("Created object: {}", object.uri());
        self.items.insert(0, object.clone());
        Ok(object)
    }

    /// Delete the given object. The target is the exact instance captured
    /// when the user was prompted, not a list position, so a reload between
    /// prompt and confirmation cannot redirect the delete to another row.
    pub async fn delete(&mut self, target: &StoredObject) -> Result<()> {
        self.store.delete(target).await.inspect_err(|e| {
            warn!("Error deleting object: {}", e);
        })?;
        debug!("Deleted object: {}", target.uri());
        self.items.retain(|o| o.id != target.id);
        Ok(())
    }
}
