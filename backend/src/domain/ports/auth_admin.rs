//! Port for the privileged auth administration API.
//!
//! This is the service-role surface of the hosted auth service, distinct from
//! the end-user login flow in [`super::LoginService`].

use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by auth admin adapters.
    pub enum AuthAdminError {
        /// The admin API could not be reached.
        Transport { message: String } => "auth admin API unreachable: {message}",
        /// The admin API answered with a failure status.
        Rejected { status: u16, message: String } =>
            "auth admin API rejected request ({status}): {message}",
    }
}

/// Result of looking up an auth record by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthUserLookup {
    /// The auth record exists.
    Found,
    /// No auth record has this id.
    NotFound,
}

/// Service-role user management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthAdminApi: Send + Sync {
    /// Check whether an auth record exists for `user_id`.
    async fn find_user(&self, user_id: &UserId) -> Result<AuthUserLookup, AuthAdminError>;

    /// Delete the auth record for `user_id`.
    async fn delete_user(&self, user_id: &UserId) -> Result<(), AuthAdminError>;
}
