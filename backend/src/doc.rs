//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the session, profile, account and health endpoints
//! together with the session cookie security scheme. Swagger UI serves it in
//! debug builds and `openapi-dump` exports it for tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{DeletionError, Error, ErrorCode, Profile};
use crate::inbound::http::account::{
    DeletedBody, ErrorBody, ExhaustedBody, PreviousErrors, UnexpectedBody, WarningSummary,
};
use crate::inbound::http::session_config::SESSION_COOKIE_NAME;
use crate::inbound::http::users::LoginRequest;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                SESSION_COOKIE_NAME,
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "UniShare backend API",
        description = "Session-authenticated account management and health checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_user,
        crate::inbound::http::account::delete_account,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Profile,
        LoginRequest,
        DeletionError,
        ErrorBody,
        ExhaustedBody,
        PreviousErrors,
        UnexpectedBody,
        WarningSummary,
        DeletedBody,
    )),
    tags(
        (name = "users", description = "Login, logout and the current profile"),
        (name = "account", description = "Account lifecycle"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
