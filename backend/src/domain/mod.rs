//! Domain primitives, ports and services.
//!
//! Purpose: keep the account model and the deletion flow free of transport
//! and persistence details. Inbound adapters talk to the driving ports in
//! [`ports`]; outbound adapters implement the driven ones.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifier.
//! - UserId / Profile: user identity and the public profile row.
//! - LoginCredentials: validated email and password.
//! - DeletionError, DependentTable, EradicationOutcome: account deletion types.
//! - TraceId: request-scoped correlation identifier.

pub mod account_deletion;
pub mod auth;
pub mod error;
pub mod ports;
pub mod profile_service;
pub mod trace_id;
pub mod user;

pub use self::account_deletion::{
    AccountDeletionAdapters, AccountDeletionService, DeletionError, DeletionMethod,
    DeletionProcedure, DependentTable, EradicationOutcome, EradicationReport,
};
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::profile_service::ProfileQueryService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Profile, UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use unishare::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
