//! Diesel access to the auth users table and its deletion procedures.
//!
//! The `auth` schema belongs to the hosted auth service, so statements here
//! are raw SQL with bound parameters. Procedure names come from the closed
//! [`DeletionProcedure`] set and are never caller-supplied.

use async_trait::async_trait;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{
    AuthProcedureError, AuthProcedureGateway, AuthRecordStore, AuthRecordStoreError,
};
use crate::domain::{DeletionProcedure, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ExistsRow, ProcedureResultRow};
use super::pool::DbPool;

const EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM auth.users WHERE id::text = $1::text) AS present";
const DELETE_SQL: &str = "DELETE FROM auth.users WHERE id::text = $1::text";

/// Lowercase hyphenated form, as Postgres renders `uuid::text`.
fn canonical_id(user_id: &UserId) -> String {
    user_id.as_uuid().to_string()
}

fn procedure_sql(procedure: DeletionProcedure) -> String {
    format!("SELECT public.{}($1::uuid) AS deleted", procedure.name())
}

/// Runs deletion procedures and direct statements against `auth.users`.
#[derive(Clone)]
pub struct DieselAuthRecordRepository {
    pool: DbPool,
}

impl DieselAuthRecordRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthProcedureGateway for DieselAuthRecordRepository {
    async fn invoke(
        &self,
        procedure: DeletionProcedure,
        user_id: &UserId,
    ) -> Result<bool, AuthProcedureError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, AuthProcedureError::connection))?;

        let row = diesel::sql_query(procedure_sql(procedure))
            .bind::<Text, _>(canonical_id(user_id))
            .get_result::<ProcedureResultRow>(&mut conn)
            .await
            .map_err(|err| {
                map_diesel_error(err, AuthProcedureError::query, AuthProcedureError::connection)
            })?;

        debug!(procedure = procedure.name(), deleted = ?row.deleted, "procedure returned");
        // A NULL result reports no deletion.
        Ok(row.deleted.unwrap_or(false))
    }
}

fn map_store_error(error: diesel::result::Error) -> AuthRecordStoreError {
    map_diesel_error(
        error,
        AuthRecordStoreError::query,
        AuthRecordStoreError::connection,
    )
}

#[async_trait]
impl AuthRecordStore for DieselAuthRecordRepository {
    async fn exists(&self, user_id: &UserId) -> Result<bool, AuthRecordStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, AuthRecordStoreError::connection))?;

        let row = diesel::sql_query(EXISTS_SQL)
            .bind::<Text, _>(canonical_id(user_id))
            .get_result::<ExistsRow>(&mut conn)
            .await
            .map_err(map_store_error)?;
        Ok(row.present)
    }

    async fn delete(&self, user_id: &UserId) -> Result<u64, AuthRecordStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, AuthRecordStoreError::connection))?;

        let removed = diesel::sql_query(DELETE_SQL)
            .bind::<Text, _>(canonical_id(user_id))
            .execute(&mut conn)
            .await
            .map_err(map_store_error)?;
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }
}
