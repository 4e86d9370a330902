//! Diesel-backed `DependentRowsRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{DependentRowsRepository, DependentRowsRepositoryError};
use crate::domain::{DependentTable, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::{
    group_invitations, notifications, profiles, resources, study_group_members, user_follows,
    user_settings,
};

/// Deletes a user's rows one table at a time.
#[derive(Clone)]
pub struct DieselDependentRowsRepository {
    pool: DbPool,
}

impl DieselDependentRowsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> DependentRowsRepositoryError {
    map_diesel_error(
        error,
        DependentRowsRepositoryError::query,
        DependentRowsRepositoryError::connection,
    )
}

#[async_trait]
impl DependentRowsRepository for DieselDependentRowsRepository {
    async fn delete_owned_rows(
        &self,
        table: DependentTable,
        user_id: &UserId,
    ) -> Result<u64, DependentRowsRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, DependentRowsRepositoryError::connection))?;
        let owner = *user_id.as_uuid();

        let removed = match table {
            DependentTable::Resources => {
                diesel::delete(resources::table.filter(resources::created_by.eq(owner)))
                    .execute(&mut conn)
                    .await
            }
            DependentTable::StudyGroupMembers => {
                diesel::delete(
                    study_group_members::table.filter(study_group_members::user_id.eq(owner)),
                )
                .execute(&mut conn)
                .await
            }
            // Both directions of the follow graph go.
            DependentTable::UserFollows => {
                diesel::delete(
                    user_follows::table.filter(
                        user_follows::follower_id
                            .eq(owner)
                            .or(user_follows::following_id.eq(owner)),
                    ),
                )
                .execute(&mut conn)
                .await
            }
            DependentTable::Notifications => {
                diesel::delete(notifications::table.filter(notifications::user_id.eq(owner)))
                    .execute(&mut conn)
                    .await
            }
            DependentTable::GroupInvitations => {
                diesel::delete(group_invitations::table.filter(group_invitations::sent_by.eq(owner)))
                    .execute(&mut conn)
                    .await
            }
            DependentTable::UserSettings => {
                diesel::delete(user_settings::table.filter(user_settings::user_id.eq(owner)))
                    .execute(&mut conn)
                    .await
            }
            DependentTable::Profiles => {
                diesel::delete(profiles::table.filter(profiles::id.eq(owner)))
                    .execute(&mut conn)
                    .await
            }
        }
        .map_err(map_error)?;

        debug!(%table, removed, "dependent rows deleted");
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }
}
