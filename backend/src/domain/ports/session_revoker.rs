//! Port for signing a user out of the hosted auth service.

use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised while revoking auth sessions.
    pub enum SessionRevokerError {
        /// The auth store could not be reached.
        Connection { message: String } => "session store connection failed: {message}",
        /// The revocation statement failed.
        Query { message: String } => "session revocation failed: {message}",
    }
}

/// Revokes every auth-service session belonging to a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRevoker: Send + Sync {
    /// Sign `user_id` out everywhere, returning the number of sessions revoked.
    async fn revoke_sessions(&self, user_id: &UserId) -> Result<u64, SessionRevokerError>;
}
