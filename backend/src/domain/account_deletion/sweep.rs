//! Dependent-row sweep.

use tracing::{debug, warn};

use super::{DeletionError, DependentTable};
use crate::domain::UserId;
use crate::domain::ports::DependentRowsRepository;

/// Delete the user's rows from every dependent table.
///
/// Each table gets a single attempt. A failing table is recorded and the
/// sweep moves on, so the returned list holds one entry per failed table and
/// is empty when everything was cleared.
pub async fn sweep_dependent_rows(
    repo: &dyn DependentRowsRepository,
    user_id: &UserId,
) -> Vec<DeletionError> {
    let mut errors = Vec::new();
    for table in DependentTable::SWEEP_ORDER {
        match repo.delete_owned_rows(table, user_id).await {
            Ok(removed) => debug!(%user_id, %table, removed, "dependent rows deleted"),
            Err(err) => {
                warn!(%user_id, %table, error = %err, "dependent row deletion failed");
                errors.push(DeletionError::new(table.step_name(), err.to_string()));
            }
        }
    }
    errors
}
