//! Reqwest-backed `AvatarStore` over the storage bulk-remove endpoint.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::{AvatarStore, AvatarStoreError};

use super::config::BackendApiConfig;
use super::dto::RemoveObjectsDto;
use super::http_errors::{status_message, transport_message};

pub struct HttpAvatarStore {
    client: Client,
    config: BackendApiConfig,
}

impl HttpAvatarStore {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: BackendApiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: config.client()?,
            config,
        })
    }
}

fn bucket_path(bucket: &str) -> String {
    format!("storage/v1/object/{bucket}")
}

#[async_trait]
impl AvatarStore for HttpAvatarStore {
    async fn remove(&self, key: &str) -> Result<(), AvatarStoreError> {
        let url = self
            .config
            .endpoint(&bucket_path(self.config.avatar_bucket()))
            .map_err(|err| AvatarStoreError::transport(err.to_string()))?;
        let service_key = self.config.service_role_key();
        let response = self
            .client
            .delete(url)
            .header("apikey", service_key)
            .bearer_auth(service_key)
            .json(&RemoveObjectsDto { prefixes: [key] })
            .send()
            .await
            .map_err(|err| AvatarStoreError::transport(transport_message(&err)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.bytes().await.unwrap_or_default();
        Err(AvatarStoreError::rejected(
            status.as_u16(),
            status_message(status, &body),
        ))
    }
}
