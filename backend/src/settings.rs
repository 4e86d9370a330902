//! Application settings loaded via OrthoConfig.
//!
//! Values come from `UNISHARE_*` environment variables, CLI flags or a
//! config file. Every external dependency is optional: a missing database
//! or backend API leaves the matching ports on fixtures so the server still
//! boots.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::backend_api::{BackendApiConfig, BackendApiConfigError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_AVATAR_BUCKET: &str = "avatars";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address '{value}': {message}")]
    InvalidBindAddr { value: String, message: String },
    #[error("invalid backend API settings: {0}")]
    BackendApi(#[from] BackendApiConfigError),
}

/// Runtime settings for the server binary.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "UNISHARE")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Postgres connection string for the hosted database.
    pub database_url: Option<String>,
    /// Base URL of the hosted auth and storage APIs.
    pub backend_url: Option<String>,
    /// Privileged key for the admin and storage APIs.
    pub service_role_key: Option<String>,
    /// Public key used for password logins.
    pub anon_key: Option<String>,
    /// Storage bucket holding profile avatars.
    pub avatar_bucket: Option<String>,
    /// Timeout applied to every outbound HTTP request.
    pub http_timeout_secs: Option<u64>,
}

impl std::fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSettings")
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("backend_url", &self.backend_url)
            .field("avatar_bucket", &self.avatar_bucket)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish_non_exhaustive()
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

impl AppSettings {
    /// Listen address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = non_blank(self.bind_addr.as_ref()).unwrap_or(DEFAULT_BIND_ADDR);
        raw.trim()
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            })
    }

    pub fn database_url(&self) -> Option<&str> {
        non_blank(self.database_url.as_ref())
    }

    pub fn avatar_bucket(&self) -> &str {
        non_blank(self.avatar_bucket.as_ref()).unwrap_or(DEFAULT_AVATAR_BUCKET)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(
            self.http_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        )
    }

    /// Backend API settings, or `None` when the URL or either key is unset.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BackendApi`] when the values are present but
    /// invalid.
    pub fn backend_api(&self) -> Result<Option<BackendApiConfig>, SettingsError> {
        let (Some(url), Some(service_key), Some(anon_key)) = (
            non_blank(self.backend_url.as_ref()),
            non_blank(self.service_role_key.as_ref()),
            non_blank(self.anon_key.as_ref()),
        ) else {
            return Ok(None);
        };
        Ok(Some(BackendApiConfig::new(
            url,
            service_key,
            anon_key,
            self.avatar_bucket(),
            self.http_timeout(),
        )?))
    }
}
