//! Port for the auth-record deletion stored procedures.

use async_trait::async_trait;

use crate::domain::{DeletionProcedure, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised while invoking a deletion procedure.
    pub enum AuthProcedureError {
        /// The database could not be reached.
        Connection { message: String } => "procedure call connection failed: {message}",
        /// The procedure raised or does not exist.
        Query { message: String } => "procedure call failed: {message}",
    }
}

/// Invokes a named stored procedure that deletes an auth record.
///
/// Procedures follow a boolean convention: `Ok(true)` means the record was
/// deleted, `Ok(false)` means the procedure ran but reported no deletion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProcedureGateway: Send + Sync {
    /// Run `procedure` for `user_id`.
    async fn invoke(
        &self,
        procedure: DeletionProcedure,
        user_id: &UserId,
    ) -> Result<bool, AuthProcedureError>;
}
