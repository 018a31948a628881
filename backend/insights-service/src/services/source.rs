//! Record retrieval
//!
//! Sources hand back untyped JSON records; validation happens in
//! `models::parse_users` / `models::parse_posts`.

use async_trait::async_trait;
use nova_common::ServiceClient;
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::error::AppResult;

#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_users(&self) -> AppResult<Vec<Value>>;
    async fn fetch_posts(&self) -> AppResult<Vec<Value>>;
}

/// Reads users and posts from a JSON HTTP API
pub struct HttpRecordSource {
    client: ServiceClient,
    users_path: String,
    posts_path: String,
}

impl HttpRecordSource {
    pub fn new(client: ServiceClient, users_path: &str, posts_path: &str) -> Self {
        Self {
            client,
            users_path: users_path.to_string(),
            posts_path: posts_path.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = ServiceClient::with_timeout(
            &config.service.service_name,
            &config.source.base_url,
            config.source.timeout(),
        )?;

        Ok(Self::new(
            client,
            &config.source.users_path,
            &config.source.posts_path,
        ))
    }

    async fn fetch(&self, path: &str, kind: &str) -> AppResult<Vec<Value>> {
        let records: Vec<Value> = self.client.get_json(path).await?;
        info!(kind, count = records.len(), "Fetched records");
        Ok(records)
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_users(&self) -> AppResult<Vec<Value>> {
        self.fetch(&self.users_path, "users").await
    }

    async fn fetch_posts(&self) -> AppResult<Vec<Value>> {
        self.fetch(&self.posts_path, "posts").await
    }
}
