//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call it to authenticate credentials without importing the
//! hosted auth service client, so handler tests can swap in a fixture.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Domain use-case port for authentication.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// Email of the fixture account accepted by [`FixtureLoginService`].
pub const FIXTURE_LOGIN_EMAIL: &str = "ada@uni.example";
/// Password of the fixture account accepted by [`FixtureLoginService`].
pub const FIXTURE_LOGIN_PASSWORD: &str = "password";
/// User id returned for the fixture account.
pub const FIXTURE_LOGIN_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

/// In-memory authenticator used when the hosted auth service is not configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        if credentials.email() == FIXTURE_LOGIN_EMAIL
            && credentials.password() == FIXTURE_LOGIN_PASSWORD
        {
            UserId::new(FIXTURE_LOGIN_USER_ID)
                .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
