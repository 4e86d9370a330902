//! Auth record eradication.
//!
//! The auth record is removed by the first of four strategies that succeeds:
//!
//! 1. the `delete_user_by_id` stored procedure,
//! 2. the `force_delete_user` stored procedure,
//! 3. the admin API (lookup, then delete),
//! 4. direct SQL against `auth.users` (existence check, then delete).
//!
//! Every failed attempt is recorded and later strategies are skipped once one
//! succeeds. A missing auth record counts as success.
//!
//! Two ways of running out of strategies are kept apart. When all four fail
//! cleanly the chain is [`EradicationOutcome::Exhausted`] and the caller
//! reports failure. When the direct-SQL store is unreachable the chain is
//! [`EradicationOutcome::ExceptionExhausted`], which callers treat as success
//! under [`DeletionMethod::AllMethodsAttempted`].

use std::fmt;

use tracing::{debug, info, warn};

use super::DeletionError;
use crate::domain::UserId;
use crate::domain::ports::{
    AuthAdminApi, AuthProcedureGateway, AuthRecordStore, AuthRecordStoreError, AuthUserLookup,
};

/// Stored procedures that delete an auth record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionProcedure {
    DeleteUserById,
    ForceDeleteUser,
}

impl DeletionProcedure {
    /// Procedure name in the `public` schema.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DeleteUserById => "delete_user_by_id",
            Self::ForceDeleteUser => "force_delete_user",
        }
    }

    const fn method(self) -> DeletionMethod {
        match self {
            Self::DeleteUserById => DeletionMethod::RpcFunction,
            Self::ForceDeleteUser => DeletionMethod::ForceDeleteUser,
        }
    }

    /// Step name recorded when this procedure fails.
    pub fn step(self) -> String {
        format!("rpc_{}", self.name())
    }
}

impl fmt::Display for DeletionProcedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the auth record was (or was found to be already) removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionMethod {
    RpcFunction,
    ForceDeleteUser,
    NotFoundInAuth,
    AdminApi,
    NotFoundViaSql,
    DirectSql,
    AllMethodsAttempted,
}

impl DeletionMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RpcFunction => "RPC function",
            Self::ForceDeleteUser => "force_delete_user",
            Self::NotFoundInAuth => "user not found in auth",
            Self::AdminApi => "admin API",
            Self::NotFoundViaSql => "user not found via SQL",
            Self::DirectSql => "direct SQL",
            Self::AllMethodsAttempted => "all methods attempted",
        }
    }
}

impl fmt::Display for DeletionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal state of the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EradicationOutcome {
    /// A strategy removed the record or found it absent.
    Succeeded { method: DeletionMethod },
    /// Every strategy failed without a connectivity fault.
    Exhausted,
    /// The last-resort store was unreachable after every other strategy
    /// failed.
    ExceptionExhausted,
}

impl EradicationOutcome {
    /// Method reported to the caller, `None` when the chain failed.
    ///
    /// `ExceptionExhausted` reports [`DeletionMethod::AllMethodsAttempted`].
    pub const fn method(self) -> Option<DeletionMethod> {
        match self {
            Self::Succeeded { method } => Some(method),
            Self::ExceptionExhausted => Some(DeletionMethod::AllMethodsAttempted),
            Self::Exhausted => None,
        }
    }
}

/// Outcome of the chain plus every failure recorded on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct EradicationReport {
    pub outcome: EradicationOutcome,
    pub errors: Vec<DeletionError>,
}

impl EradicationReport {
    /// Whether the caller should treat the auth record as gone.
    pub const fn success(&self) -> bool {
        !matches!(self.outcome, EradicationOutcome::Exhausted)
    }

    pub const fn method(&self) -> Option<DeletionMethod> {
        self.outcome.method()
    }
}

/// Driven ports used by the chain.
#[derive(Clone, Copy)]
pub struct AuthEradicationPorts<'a> {
    pub procedures: &'a dyn AuthProcedureGateway,
    pub admin: &'a dyn AuthAdminApi,
    pub store: &'a dyn AuthRecordStore,
}

#[derive(Debug, Clone, Copy)]
enum Strategy {
    Procedure(DeletionProcedure),
    AdminApi,
    DirectSql,
}

enum Transition {
    Done(DeletionMethod),
    Next(Strategy),
}

/// Run the fallback chain for `user_id`.
pub async fn eradicate_auth_record(
    ports: AuthEradicationPorts<'_>,
    user_id: &UserId,
) -> EradicationReport {
    let mut errors = Vec::new();
    let mut strategy = Strategy::Procedure(DeletionProcedure::DeleteUserById);

    let outcome = loop {
        debug!(%user_id, ?strategy, "attempting auth record deletion");
        let transition = match strategy {
            Strategy::Procedure(procedure) => {
                try_procedure(ports.procedures, procedure, user_id, &mut errors).await
            }
            Strategy::AdminApi => try_admin_api(ports.admin, user_id, &mut errors).await,
            Strategy::DirectSql => break try_direct_sql(ports.store, user_id, &mut errors).await,
        };
        match transition {
            Transition::Done(method) => break EradicationOutcome::Succeeded { method },
            Transition::Next(next) => strategy = next,
        }
    };

    match outcome.method() {
        Some(method) => info!(%user_id, %method, failures = errors.len(), "auth record eradicated"),
        None => warn!(%user_id, failures = errors.len(), "auth record eradication exhausted"),
    }
    EradicationReport { outcome, errors }
}

async fn try_procedure(
    gateway: &dyn AuthProcedureGateway,
    procedure: DeletionProcedure,
    user_id: &UserId,
    errors: &mut Vec<DeletionError>,
) -> Transition {
    let next = match procedure {
        DeletionProcedure::DeleteUserById => {
            Strategy::Procedure(DeletionProcedure::ForceDeleteUser)
        }
        DeletionProcedure::ForceDeleteUser => Strategy::AdminApi,
    };

    let message = match gateway.invoke(procedure, user_id).await {
        Ok(true) => return Transition::Done(procedure.method()),
        Ok(false) => format!("{procedure} reported no deletion"),
        Err(err) => err.to_string(),
    };
    warn!(%user_id, %procedure, error = %message, "deletion procedure failed");
    errors.push(DeletionError::new(procedure.step(), message));
    Transition::Next(next)
}

async fn try_admin_api(
    admin: &dyn AuthAdminApi,
    user_id: &UserId,
    errors: &mut Vec<DeletionError>,
) -> Transition {
    match admin.find_user(user_id).await {
        Ok(AuthUserLookup::NotFound) => return Transition::Done(DeletionMethod::NotFoundInAuth),
        Ok(AuthUserLookup::Found) => {}
        Err(err) => {
            warn!(%user_id, error = %err, "admin user lookup failed");
            errors.push(DeletionError::new("admin_get_user", err.to_string()));
            return Transition::Next(Strategy::DirectSql);
        }
    }

    match admin.delete_user(user_id).await {
        Ok(()) => Transition::Done(DeletionMethod::AdminApi),
        Err(err) => {
            warn!(%user_id, error = %err, "admin user deletion failed");
            errors.push(DeletionError::new("admin_delete_user", err.to_string()));
            Transition::Next(Strategy::DirectSql)
        }
    }
}

async fn try_direct_sql(
    store: &dyn AuthRecordStore,
    user_id: &UserId,
    errors: &mut Vec<DeletionError>,
) -> EradicationOutcome {
    match store.exists(user_id).await {
        Ok(false) => {
            return EradicationOutcome::Succeeded {
                method: DeletionMethod::NotFoundViaSql,
            };
        }
        Ok(true) => {}
        Err(err @ AuthRecordStoreError::Query { .. }) => {
            // The row may still be there; attempt the delete regardless.
            warn!(%user_id, error = %err, "auth record existence check failed");
            errors.push(DeletionError::new("sql_check_user", err.to_string()));
        }
        Err(err @ AuthRecordStoreError::Connection { .. }) => {
            return exception_exhausted(user_id, err, errors);
        }
    }

    match store.delete(user_id).await {
        Ok(removed) => {
            debug!(%user_id, removed, "auth record deleted via SQL");
            EradicationOutcome::Succeeded {
                method: DeletionMethod::DirectSql,
            }
        }
        Err(err @ AuthRecordStoreError::Query { .. }) => {
            warn!(%user_id, error = %err, "direct auth record deletion failed");
            errors.push(DeletionError::new("sql_delete_user", err.to_string()));
            EradicationOutcome::Exhausted
        }
        Err(err @ AuthRecordStoreError::Connection { .. }) => {
            exception_exhausted(user_id, err, errors)
        }
    }
}

fn exception_exhausted(
    user_id: &UserId,
    err: AuthRecordStoreError,
    errors: &mut Vec<DeletionError>,
) -> EradicationOutcome {
    warn!(%user_id, error = %err, "direct SQL path unreachable; treating chain as attempted");
    errors.push(DeletionError::new("direct_sql", err.to_string()));
    EradicationOutcome::ExceptionExhausted
}

#[cfg(test)]
#[path = "eradication_tests.rs"]
mod tests;
