//! Port for removing the rows a user owns across dependent tables.

use async_trait::async_trait;

use crate::domain::{DependentTable, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised while deleting dependent rows.
    pub enum DependentRowsRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "dependent rows connection failed: {message}",
        /// The delete statement failed.
        Query { message: String } => "dependent rows delete failed: {message}",
    }
}

/// Delete access to the tables keyed by a user id.
///
/// No foreign-key cascade is assumed; each table is cleared explicitly.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DependentRowsRepository: Send + Sync {
    /// Delete every row of `table` owned by `user_id`, returning the number of
    /// rows removed. Removing nothing is not an error.
    async fn delete_owned_rows(
        &self,
        table: DependentTable,
        user_id: &UserId,
    ) -> Result<u64, DependentRowsRepositoryError>;
}
