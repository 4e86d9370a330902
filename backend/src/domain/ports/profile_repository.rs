//! Port abstraction for profile persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Profile, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by profile repository adapters.
    pub enum ProfileRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "profile repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "profile repository query failed: {message}",
    }
}

/// Read access to the `profiles` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch a profile by user identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, ProfileRepositoryError>;
}

/// Fixture repository that never finds a profile.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileRepository;

#[async_trait]
impl ProfileRepository for FixtureProfileRepository {
    async fn find_by_id(&self, _id: &UserId) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(None)
    }
}
