//! Reqwest-backed `LoginService` using the password grant.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::warn;

use crate::domain::ports::LoginService;
use crate::domain::{Error, LoginCredentials, UserId};

use super::config::BackendApiConfig;
use super::dto::{PasswordGrantDto, TokenResponseDto};
use super::http_errors::{status_message, transport_message};

const TOKEN_PATH: &str = "auth/v1/token?grant_type=password";

/// Authenticates end users with the public anon key.
pub struct HttpLoginService {
    client: Client,
    config: BackendApiConfig,
}

impl HttpLoginService {
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

fn user_from_response(status: StatusCode, body: &[u8]) -> Result<UserId, Error> {
    match status {
        // The auth service answers bad credentials with 400.
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
            Err(Error::unauthorized("invalid credentials"))
        }
        _ if status.is_success() => {
            let token: TokenResponseDto = serde_json::from_slice(body)
                .map_err(|err| Error::internal(format!("invalid token response: {err}")))?;
            UserId::new(&token.user.id)
                .map_err(|err| Error::internal(format!("invalid user id in token response: {err}")))
        }
        _ => {
            warn!(status = status.as_u16(), "auth service rejected login");
            Err(Error::service_unavailable(status_message(status, body)))
        }
    }
}

#[async_trait]
impl LoginService for HttpLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let url = self
            .config
            .endpoint(TOKEN_PATH)
            .map_err(|err| Error::internal(err.to_string()))?;
        let response = self
            .client
            .post(url)
            .header("apikey", self.config.anon_key())
            .json(&PasswordGrantDto {
                email: credentials.email(),
                password: credentials.password(),
            })
            .send()
            .await
            .map_err(|err| Error::service_unavailable(transport_message(&err)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| Error::service_unavailable(transport_message(&err)))?;
        user_from_response(status, &body)
    }
}
