//! Remote object store over REST
//!
//! Talks to a KiiCloud-style BaaS API: `POST /oauth2/token` for login, then
//! user-scoped bucket routes under `/apps/<app>/users/me/buckets/<bucket>`.
//! Reserved keys in responses are underscore-prefixed (`_id`, `_created`,
//! `_modified`, `_owner`); everything else is application data.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::{BucketlistError, Result};
use crate::session::Session;
use crate::storage::models::{ObjectFields, ObjectQuery, SortOrder, StoredObject};
use crate::storage::ObjectStore;

#[derive(Debug)]
pub struct RestStore {
    client: reqwest::Client,
    endpoint: String,
    app_id: String,
    bucket: String,
    session: Session,
}

#[derive(Deserialize)]
struct LoginResponse {
    id: String,
    access_token: String,
}

#[derive(Deserialize)]
struct QueryResponse {
    results: Vec<ObjectFields>,
}

#[derive(Deserialize)]
struct CreateResponse {
    #[serde(rename = "objectID")]
    object_id: String,
    #[serde(rename = "createdAt")]
    created_at: i64,
}

impl RestStore {
    /// Authenticate against the store and return a session-scoped client
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        if config.store.app_id.is_empty() {
            return Err(BucketlistError::config(
                "store.app_id is required for the rest backend",
            ));
        }
        if config.auth.username.is_empty() {
            return Err(BucketlistError::config(
                "auth.username is required for the rest backend",
            ));
        }

        let endpoint = config.store.endpoint.trim_end_matches('/').to_string();
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{}/oauth2/token", endpoint))
            .json(&json!({
                "username": config.auth.username,
                "password": config.auth.password,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BucketlistError::session(format!(
                "login failed ({}): {}",
                status, body
            )));
        }

        let login: LoginResponse = response.json().await?;
        debug!("Authenticated as user {}", login.id);

        Ok(RestStore {
            client,
            endpoint,
            app_id: config.store.app_id.clone(),
            bucket: config.store.bucket.clone(),
            session: Session::new(login.id, login.access_token),
        })
    }

    fn bucket_url(&self) -> String {
        format!(
            "{}/apps/{}/users/me/buckets/{}",
            self.endpoint, self.app_id, self.bucket
        )
    }

    /// Wire format of a bucket query
    pub(crate) fn query_body(query: &ObjectQuery) -> serde_json::Value {
        json!({
            "bucketQuery": {
                "clause": { "type": "all" },
                "orderBy": "_created",
                "descending": matches!(query.sort, SortOrder::CreatedDesc),
            }
        })
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::NOT_FOUND {
            Err(BucketlistError::not_found(body))
        } else {
            Err(BucketlistError::remote_operation(format!(
                "{}: {}",
                status, body
            )))
        }
    }
}

#[async_trait]
impl ObjectStore for RestStore {
    async fn query(&self, query: &ObjectQuery) -> Result<Vec<StoredObject>> {
        let response = self
            .client
            .post(format!("{}/query", self.bucket_url()))
            .bearer_auth(&self.session.access_token)
            .json(&Self::query_body(query))
            .send()
            .await?;

        let parsed: QueryResponse = Self::check(response).await?.json().await?;
        parsed
            .results
            .into_iter()
            .map(|record| StoredObject::from_remote(&self.session.user_id, &self.bucket, record))
            .collect()
    }

    async fn create(&self, fields: ObjectFields) -> Result<StoredObject> {
        let response = self
            .client
            .post(format!("{}/objects", self.bucket_url()))
            .bearer_auth(&self.session.access_token)
            .json(&fields)
            .send()
            .await?;

        let created: CreateResponse = Self::check(response).await?.json().await?;
        let created_at = DateTime::from_timestamp_millis(created.created_at)
            .unwrap_or_else(Utc::now);

        Ok(StoredObject {
            id: created.object_id,
            owner: self.session.user_id.clone(),
            bucket: self.bucket.clone(),
            created_at,
            modified_at: created_at,
            fields,
        })
    }

    async fn delete(&self, object: &StoredObject) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/objects/{}", self.bucket_url(), object.id))
            .bearer_auth(&self.session.access_token)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn backend_name(&self) -> &'static str {
        "rest"
    }
}
