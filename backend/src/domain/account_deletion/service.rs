//! Account deletion service implementing the driving port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument};

use super::{
    AuthEradicationPorts, cleanup_avatar, eradicate_auth_record, sweep_dependent_rows,
    terminate_sessions,
};
use crate::domain::UserId;
use crate::domain::ports::{
    AccountDeletionCommand, AccountDeletionFailure, AccountDeletionOutcome, AuthAdminApi,
    AuthProcedureGateway, AuthRecordStore, AvatarStore, DependentRowsRepository,
    ProfileRepository, SessionRevoker,
};

/// Driven ports required by [`AccountDeletionService`].
#[derive(Clone)]
pub struct AccountDeletionAdapters {
    pub profiles: Arc<dyn ProfileRepository>,
    pub dependent_rows: Arc<dyn DependentRowsRepository>,
    pub avatars: Arc<dyn AvatarStore>,
    pub sessions: Arc<dyn SessionRevoker>,
    pub procedures: Arc<dyn AuthProcedureGateway>,
    pub auth_admin: Arc<dyn AuthAdminApi>,
    pub auth_store: Arc<dyn AuthRecordStore>,
}

/// Sequences the deletion steps for one user.
///
/// The order is fixed: read the profile, sweep dependent rows, remove the
/// avatar, revoke sessions, then eradicate the auth record. Nothing runs
/// concurrently and nothing is retried.
#[derive(Clone)]
pub struct AccountDeletionService {
    adapters: AccountDeletionAdapters,
}

impl AccountDeletionService {
    pub fn new(adapters: AccountDeletionAdapters) -> Self {
        Self { adapters }
    }

    fn eradication_ports(&self) -> AuthEradicationPorts<'_> {
        AuthEradicationPorts {
            procedures: self.adapters.procedures.as_ref(),
            admin: self.adapters.auth_admin.as_ref(),
            store: self.adapters.auth_store.as_ref(),
        }
    }
}

#[async_trait]
impl AccountDeletionCommand for AccountDeletionService {
    #[instrument(skip(self), fields(%user_id))]
    async fn delete_account(
        &self,
        user_id: &UserId,
    ) -> Result<AccountDeletionOutcome, AccountDeletionFailure> {
        let profile = self
            .adapters
            .profiles
            .find_by_id(user_id)
            .await
            .map_err(|err| {
                error!(error = %err, "profile lookup failed before deletion");
                AccountDeletionFailure::Unexpected {
                    message: err.to_string(),
                    previous_errors: Vec::new(),
                }
            })?;

        let mut errors = sweep_dependent_rows(self.adapters.dependent_rows.as_ref(), user_id).await;
        errors.extend(
            cleanup_avatar(self.adapters.avatars.as_ref(), profile.as_ref())
                .await
                .err(),
        );
        errors.extend(
            terminate_sessions(self.adapters.sessions.as_ref(), user_id)
                .await
                .err(),
        );

        let report = eradicate_auth_record(self.eradication_ports(), user_id).await;
        let method = report.method();
        errors.extend(report.errors);

        match method {
            Some(method) => {
                info!(%method, warnings = errors.len(), "account deleted");
                Ok(AccountDeletionOutcome::Deleted {
                    method,
                    warnings: errors,
                })
            }
            None => {
                error!(failures = errors.len(), "account deletion failed after every strategy");
                Ok(AccountDeletionOutcome::Failed { errors })
            }
        }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
