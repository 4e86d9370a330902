//! Shared mapping of pool and Diesel failures into port error constructors.
//!
//! Every driven port splits failures into a connectivity variant and a clean
//! query variant. Only failures that mean the database could not be talked
//! to map to the connectivity side. The async Postgres driver reports a lost
//! socket or a dead connection task as `UnableToSendCommand`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Pool failures always mean the database was unreachable.
pub(crate) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    connection(error.into_message())
}

/// Classify a Diesel error, keeping the database message for diagnostics.
pub(crate) fn map_diesel_error<E>(
    error: DieselError,
    query: impl FnOnce(String) -> E,
    connection: impl FnOnce(String) -> E,
) -> E {
    match error {
        DieselError::DatabaseError(
            kind @ (DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand),
            info,
        ) => {
            debug!(?kind, message = info.message(), "database connection lost");
            connection(info.message().to_owned())
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "database statement failed");
            query(info.message().to_owned())
        }
        DieselError::NotFound => query("record not found".to_owned()),
        other => {
            debug!(error = %other, "diesel operation failed");
            query(other.to_string())
        }
    }
}
