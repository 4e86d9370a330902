//! Diesel-backed `ProfileRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ProfileRepository, ProfileRepositoryError};
use crate::domain::{Profile, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::ProfileRow;
use super::pool::DbPool;
use super::schema::profiles;

#[derive(Clone)]
pub struct DieselProfileRepository {
    pool: DbPool,
}

impl DieselProfileRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile::new(UserId::from(row.id), row.display_name, row.avatar_url)
    }
}

#[async_trait]
impl ProfileRepository for DieselProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, ProfileRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ProfileRepositoryError::connection))?;

        let row = profiles::table
            .filter(profiles::id.eq(id.as_uuid()))
            .select(ProfileRow::as_select())
            .first::<ProfileRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| {
                map_diesel_error(
                    err,
                    ProfileRepositoryError::query,
                    ProfileRepositoryError::connection,
                )
            })?;

        Ok(row.map(Profile::from))
    }
}
