use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{BucketlistError, Result};

/// Field holding an object's display label
pub const LABEL_KEY: &str = "myObjectValue";

/// JSON key/value payload of a stored object
pub type ObjectFields = serde_json::Map<String, Value>;

/// A remotely persisted key/value record.
///
/// The identifier and timestamps are assigned by the store on creation;
/// everything the application put into the object lives in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredObject {
    pub id: String,
    pub owner: String,
    pub bucket: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub fields: ObjectFields,
}

impl StoredObject {
    /// Display label, read from the `myObjectValue` field
    pub fn label(&self) -> &str {
        self.fields
            .get(LABEL_KEY)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Location reference of the object within the store
    pub fn uri(&self) -> String {
        format!(
            "kiicloud://users/{}/buckets/{}/objects/{}",
            self.owner, self.bucket, self.id
        )
    }

    /// Build an object from a remote JSON record.
    ///
    /// Reserved keys are underscore-prefixed (`_id`, `_created`, `_modified`,
    /// `_owner`); all remaining keys are application fields.
    pub fn from_remote(owner: &str, bucket: &str, record: ObjectFields) -> Result<Self> {
        let id = record
            .get("_id")
            .and_then(Value::as_str)
            .ok_or_else(|| BucketlistError::serialization("remote object is missing _id"))?
            .to_string();

        let created_at = timestamp_field(&record, "_created");
        let modified_at = timestamp_field(&record, "_modified");
        let owner = record
            .get("_owner")
            .and_then(Value::as_str)
            .unwrap_or(owner)
            .to_string();

        let fields: ObjectFields = record
            .into_iter()
            .filter(|(key, _)| !key.starts_with('_'))
            .collect();

        Ok(StoredObject {
            id,
            owner,
            bucket: bucket.to_string(),
            created_at,
            modified_at,
            fields,
        })
    }
}

/// Reserved timestamps are epoch milliseconds; missing or malformed values
/// fall back to now rather than failing the whole query.
fn timestamp_field(record: &ObjectFields, key: &str) -> DateTime<Utc> {
    record
        .get(key)
        .and_then(Value::as_i64)
        .and_then(DateTime::from_timestamp_millis)
        .unwrap_or_else(Utc::now)
}

/// Sort order applied by the store when answering a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    CreatedDesc,
    CreatedAsc,
}

/// An all-objects query against the current user's bucket
#[derive(Debug, Clone, Default)]
pub struct ObjectQuery {
    pub sort: SortOrder,
}

impl ObjectQuery {
    pub fn all() -> Self {
        ObjectQuery::default()
    }

    pub fn sort_by_created_desc(mut self) -> Self {
        self.sort = SortOrder::CreatedDesc;
        self
    }

    pub fn sort_by_created_asc(mut self) -> Self {
        self.sort = SortOrder::CreatedAsc;
        self
    }
}
