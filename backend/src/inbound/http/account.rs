//! Account deletion endpoint.
//!
//! ```text
//! POST /api/v1/account/delete
//! ```
//!
//! Responses use their own flat JSON bodies rather than the shared [`Error`]
//! envelope; front-end clients read `error`, `message` and `details` directly.
//!
//! [`Error`]: crate::domain::Error

use actix_web::{HttpResponse, post, web};
use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::domain::DeletionError;
use crate::domain::ports::{AccountDeletionFailure, AccountDeletionOutcome};
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

pub(crate) const UNAUTHORIZED: &str = "Unauthorized";
pub(crate) const CONFIGURATION_ERROR: &str = "Server configuration error";
pub(crate) const EXHAUSTED_ERROR: &str = "Failed to delete user account after multiple attempts";
pub(crate) const UNEXPECTED_ERROR: &str = "Failed to delete user account";
pub(crate) const DELETED_MESSAGE: &str = "Account deleted successfully";

/// Error body carrying only a headline.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Unauthorized")]
    pub error: &'static str,
}

/// Body returned when every eradication strategy failed.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExhaustedBody {
    pub error: &'static str,
    pub details: Vec<DeletionError>,
}

/// Failures recorded before an unexpected error.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviousErrors {
    pub previous_errors: Vec<DeletionError>,
}

/// Body returned when the flow stopped on an unexpected error.
#[derive(Debug, Serialize, ToSchema)]
pub struct UnexpectedBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<PreviousErrors>,
}

/// Summary of non-fatal failures on a successful deletion.
#[derive(Debug, Serialize, ToSchema)]
pub struct WarningSummary {
    #[schema(example = "2 non-fatal errors occurred")]
    pub warnings: String,
}

/// Body returned once the account is gone.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedBody {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<WarningSummary>,
}

impl DeletedBody {
    fn with_warning_count(count: usize) -> Self {
        Self {
            success: true,
            message: DELETED_MESSAGE,
            details: (count > 0).then(|| WarningSummary {
                warnings: format!("{count} non-fatal errors occurred"),
            }),
        }
    }
}

fn server_error() -> actix_web::HttpResponseBuilder {
    let mut builder = HttpResponse::InternalServerError();
    builder.insert_header(no_store_header());
    builder
}

/// Delete the authenticated user's account.
///
/// Public rows, the avatar, auth sessions and the auth record are removed in
/// that order. Non-fatal failures are counted in `details.warnings`.
#[utoipa::path(
    post,
    path = "/api/v1/account/delete",
    responses(
        (status = 200, description = "Account deleted", body = DeletedBody),
        (status = 401, description = "No valid session", body = ErrorBody),
        (status = 500, description = "Deletion failed or is not configured", body = ExhaustedBody)
    ),
    tags = ["account"],
    operation_id = "deleteAccount"
)]
#[post("/account/delete")]
pub async fn delete_account(state: web::Data<HttpState>, session: SessionContext) -> HttpResponse {
    let user_id = match session.user_id() {
        Ok(Some(user_id)) => user_id,
        Ok(None) => {
            return HttpResponse::Unauthorized().json(ErrorBody {
                error: UNAUTHORIZED,
            });
        }
        Err(err) => {
            warn!(error = %err, "unreadable session on account deletion");
            return HttpResponse::Unauthorized().json(ErrorBody {
                error: UNAUTHORIZED,
            });
        }
    };

    match state.account_deletion.delete_account(&user_id).await {
        Ok(AccountDeletionOutcome::Deleted { method, warnings }) => {
            info!(%user_id, %method, warnings = warnings.len(), "account deletion completed");
            session.purge();
            HttpResponse::Ok()
                .insert_header(no_store_header())
                .json(DeletedBody::with_warning_count(warnings.len()))
        }
        Ok(AccountDeletionOutcome::Failed { errors }) => server_error().json(ExhaustedBody {
            error: EXHAUSTED_ERROR,
            details: errors,
        }),
        Err(AccountDeletionFailure::Configuration) => server_error().json(ErrorBody {
            error: CONFIGURATION_ERROR,
        }),
        Err(AccountDeletionFailure::Unexpected {
            message,
            previous_errors,
        }) => server_error().json(UnexpectedBody {
            error: UNEXPECTED_ERROR,
            message,
            details: (!previous_errors.is_empty()).then_some(PreviousErrors { previous_errors }),
        }),
    }
}
