//! Port for direct SQL access to the auth users table.
//!
//! This is the last-resort path of account deletion. The two error variants
//! are not interchangeable: `Query` is a clean failure the caller records and
//! moves past, `Connection` means the store itself is unreachable.

use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by direct auth-table access.
    pub enum AuthRecordStoreError {
        /// The database could not be reached.
        Connection { message: String } => "auth store connection failed: {message}",
        /// The statement failed.
        Query { message: String } => "auth store query failed: {message}",
    }
}

/// Existence check and deletion against the auth users table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthRecordStore: Send + Sync {
    /// Return whether an auth row with this id exists.
    async fn exists(&self, user_id: &UserId) -> Result<bool, AuthRecordStoreError>;

    /// Delete the auth row, returning the number of rows removed.
    async fn delete(&self, user_id: &UserId) -> Result<u64, AuthRecordStoreError>;
}
