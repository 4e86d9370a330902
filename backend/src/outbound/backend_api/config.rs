//! Connection settings for the hosted auth and storage APIs.

use std::time::Duration;

use url::Url;
use zeroize::Zeroizing;

/// Errors raised while validating API settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendApiConfigError {
    #[error("backend URL is invalid: {0}")]
    InvalidBaseUrl(String),
    #[error("backend URL must use http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("{0} must not be empty")]
    EmptyValue(&'static str),
}

/// Base URL, keys and timeout shared by every API adapter.
#[derive(Clone)]
pub struct BackendApiConfig {
    base_url: Url,
    service_role_key: Zeroizing<String>,
    anon_key: Zeroizing<String>,
    avatar_bucket: String,
    timeout: Duration,
}

impl std::fmt::Debug for BackendApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("avatar_bucket", &self.avatar_bucket)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl BackendApiConfig {
    /// Validate and build the settings.
    ///
    /// The base URL path always ends in `/` so relative endpoint paths are
    /// appended rather than replacing its last segment.
    pub fn new(
        base_url: &str,
        service_role_key: impl Into<String>,
        anon_key: impl Into<String>,
        avatar_bucket: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BackendApiConfigError> {
        let mut base_url = Url::parse(base_url.trim())
            .map_err(|err| BackendApiConfigError::InvalidBaseUrl(err.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(BackendApiConfigError::UnsupportedScheme(
                base_url.scheme().to_owned(),
            ));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let service_role_key = Zeroizing::new(service_role_key.into());
        if service_role_key.trim().is_empty() {
            return Err(BackendApiConfigError::EmptyValue("service role key"));
        }
        let anon_key = Zeroizing::new(anon_key.into());
        if anon_key.trim().is_empty() {
            return Err(BackendApiConfigError::EmptyValue("anon key"));
        }
        let avatar_bucket = avatar_bucket.into();
        if avatar_bucket.trim().is_empty() {
            return Err(BackendApiConfigError::EmptyValue("avatar bucket"));
        }

        Ok(Self {
            base_url,
            service_role_key,
            anon_key,
            avatar_bucket,
            timeout,
        })
    }

    /// Resolve `path` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }

    pub fn service_role_key(&self) -> &str {
        self.service_role_key.as_str()
    }

    pub fn anon_key(&self) -> &str {
        self.anon_key.as_str()
    }

    pub fn avatar_bucket(&self) -> &str {
        &self.avatar_bucket
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build a reqwest client honouring the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend cannot be initialised.
    pub fn client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder().timeout(self.timeout).build()
    }
}
