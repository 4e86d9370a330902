//! Diesel-backed `SessionRevoker` over `auth.sessions`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::UserId;
use crate::domain::ports::{SessionRevoker, SessionRevokerError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::sessions;

/// Signs a user out everywhere by deleting their refresh sessions.
#[derive(Clone)]
pub struct DieselSessionRevoker {
    pool: DbPool,
}

impl DieselSessionRevoker {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRevoker for DieselSessionRevoker {
    async fn revoke_sessions(&self, user_id: &UserId) -> Result<u64, SessionRevokerError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, SessionRevokerError::connection))?;

        let revoked = diesel::delete(sessions::table.filter(sessions::user_id.eq(user_id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(|err| {
                map_diesel_error(
                    err,
                    SessionRevokerError::query,
                    SessionRevokerError::connection,
                )
            })?;
        Ok(u64::try_from(revoked).unwrap_or(u64::MAX))
    }
}
