//! Driving port for reading the current user's profile.
//!
//! Inbound adapters load a profile through this port without importing
//! persistence details. The fixture keeps handlers testable before a database
//! is wired.

use async_trait::async_trait;

use crate::domain::{Error, Profile, UserId};

/// Domain use-case port for reading the authenticated user's profile.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Return the profile for the authenticated user.
    async fn fetch_profile(&self, user_id: &UserId) -> Result<Profile, Error>;
}

/// Fixture profile query returning a fixed display name and no avatar.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileQuery;

#[async_trait]
impl ProfileQuery for FixtureProfileQuery {
    async fn fetch_profile(&self, user_id: &UserId) -> Result<Profile, Error> {
        Ok(Profile::new(
            user_id.clone(),
            Some("Ada Lovelace".to_owned()),
            None,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_profile_query_returns_requested_user() {
        let user_id = UserId::random();
        let profile = FixtureProfileQuery
            .fetch_profile(&user_id)
            .await
            .expect("profile response");
        assert_eq!(profile.id(), &user_id);
        assert_eq!(profile.display_name(), Some("Ada Lovelace"));
        assert!(profile.avatar_url().is_none());
    }
}
