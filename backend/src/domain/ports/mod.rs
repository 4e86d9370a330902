//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`LoginService`, `ProfileQuery`, `AccountDeletionCommand`)
//! are called by inbound adapters. Driven ports are implemented by the
//! persistence and backend API adapters and split their errors into
//! connectivity and clean failure variants.

mod macros;
pub(crate) use macros::define_port_error;

mod account_deletion_command;
mod auth_admin;
mod auth_procedures;
mod auth_record_store;
mod avatar_store;
mod dependent_rows_repository;
mod login_service;
mod profile_query;
mod profile_repository;
mod session_revoker;

#[cfg(test)]
pub use account_deletion_command::MockAccountDeletionCommand;
pub use account_deletion_command::{
    AccountDeletionCommand, AccountDeletionFailure, AccountDeletionOutcome,
    UnconfiguredAccountDeletion,
};
#[cfg(test)]
pub use auth_admin::MockAuthAdminApi;
pub use auth_admin::{AuthAdminApi, AuthAdminError, AuthUserLookup};
#[cfg(test)]
pub use auth_procedures::MockAuthProcedureGateway;
pub use auth_procedures::{AuthProcedureError, AuthProcedureGateway};
#[cfg(test)]
pub use auth_record_store::MockAuthRecordStore;
pub use auth_record_store::{AuthRecordStore, AuthRecordStoreError};
#[cfg(test)]
pub use avatar_store::MockAvatarStore;
pub use avatar_store::{AvatarStore, AvatarStoreError};
#[cfg(test)]
pub use dependent_rows_repository::MockDependentRowsRepository;
pub use dependent_rows_repository::{DependentRowsRepository, DependentRowsRepositoryError};
pub use login_service::{
    FIXTURE_LOGIN_EMAIL, FIXTURE_LOGIN_PASSWORD, FIXTURE_LOGIN_USER_ID, FixtureLoginService,
    LoginService,
};
pub use profile_query::{FixtureProfileQuery, ProfileQuery};
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
pub use profile_repository::{
    FixtureProfileRepository, ProfileRepository, ProfileRepositoryError,
};
#[cfg(test)]
pub use session_revoker::MockSessionRevoker;
pub use session_revoker::{SessionRevoker, SessionRevokerError};
