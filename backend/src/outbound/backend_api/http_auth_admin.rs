//! Reqwest-backed `AuthAdminApi` using the service-role key.

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use tracing::debug;

use crate::domain::UserId;
use crate::domain::ports::{AuthAdminApi, AuthAdminError, AuthUserLookup};

use super::config::BackendApiConfig;
use super::http_errors::{status_message, transport_message};

/// Admin user endpoints under `/auth/v1/admin/users/{id}`.
pub struct HttpAuthAdminApi {
    client: Client,
    config: BackendApiConfig,
}

impl HttpAuthAdminApi {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: BackendApiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: config.client()?,
            config,
        })
    }

    async fn call(
        &self,
        method: Method,
        user_id: &UserId,
    ) -> Result<(StatusCode, Vec<u8>), AuthAdminError> {
        let url = self
            .config
            .endpoint(&user_path(user_id))
            .map_err(|err| AuthAdminError::transport(err.to_string()))?;
        let key = self.config.service_role_key();
        let response = self
            .client
            .request(method, url)
            .header("apikey", key)
            .bearer_auth(key)
            .send()
            .await
            .map_err(|err| AuthAdminError::transport(transport_message(&err)))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| AuthAdminError::transport(transport_message(&err)))?;
        Ok((status, body.to_vec()))
    }
}

fn user_path(user_id: &UserId) -> String {
    format!("auth/v1/admin/users/{user_id}")
}

fn rejected(status: StatusCode, body: &[u8]) -> AuthAdminError {
    AuthAdminError::rejected(status.as_u16(), status_message(status, body))
}

fn lookup_from_status(status: StatusCode, body: &[u8]) -> Result<AuthUserLookup, AuthAdminError> {
    match status {
        StatusCode::NOT_FOUND => Ok(AuthUserLookup::NotFound),
        _ if status.is_success() => Ok(AuthUserLookup::Found),
        _ => Err(rejected(status, body)),
    }
}

#[async_trait]
impl AuthAdminApi for HttpAuthAdminApi {
    async fn find_user(&self, user_id: &UserId) -> Result<AuthUserLookup, AuthAdminError> {
        let (status, body) = self.call(Method::GET, user_id).await?;
        debug!(%user_id, status = status.as_u16(), "admin user lookup");
        lookup_from_status(status, &body)
    }

    async fn delete_user(&self, user_id: &UserId) -> Result<(), AuthAdminError> {
        let (status, body) = self.call(Method::DELETE, user_id).await?;
        if status.is_success() {
            Ok(())
        } else {
            Err(rejected(status, &body))
        }
    }
}
