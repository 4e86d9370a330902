//! Builders selecting real adapters or fixtures for each HTTP port.

use std::sync::Arc;

use tracing::warn;

use unishare::domain::ports::{
    AccountDeletionCommand, FixtureLoginService, FixtureProfileQuery, LoginService, ProfileQuery,
    UnconfiguredAccountDeletion,
};
use unishare::domain::{AccountDeletionAdapters, AccountDeletionService, ProfileQueryService};
use unishare::inbound::http::state::HttpState;
use unishare::outbound::backend_api::{
    BackendApiConfig, HttpAuthAdminApi, HttpAvatarStore, HttpLoginService,
};
use unishare::outbound::persistence::{
    DbPool, DieselAuthRecordRepository, DieselDependentRowsRepository, DieselProfileRepository,
    DieselSessionRevoker,
};

use super::ServerConfig;

fn client_error(err: reqwest::Error) -> std::io::Error {
    std::io::Error::other(format!("failed to build HTTP client: {err}"))
}

fn build_login(api: Option<&BackendApiConfig>) -> std::io::Result<Arc<dyn LoginService>> {
    match api {
        Some(api) => Ok(Arc::new(
            HttpLoginService::new(api.clone()).map_err(client_error)?,
        )),
        None => {
            warn!("backend API not configured; login accepts only the fixture account");
            Ok(Arc::new(FixtureLoginService))
        }
    }
}

fn build_profile(pool: Option<&DbPool>) -> Arc<dyn ProfileQuery> {
    match pool {
        Some(pool) => Arc::new(ProfileQueryService::new(Arc::new(
            DieselProfileRepository::new(pool.clone()),
        ))),
        None => Arc::new(FixtureProfileQuery),
    }
}

fn build_account_deletion(
    pool: Option<&DbPool>,
    api: Option<&BackendApiConfig>,
) -> std::io::Result<Arc<dyn AccountDeletionCommand>> {
    let (Some(pool), Some(api)) = (pool, api) else {
        warn!(
            database = pool.is_some(),
            backend_api = api.is_some(),
            "account deletion unavailable until database and backend API are configured"
        );
        return Ok(Arc::new(UnconfiguredAccountDeletion));
    };

    let auth_records = Arc::new(DieselAuthRecordRepository::new(pool.clone()));
    let adapters = AccountDeletionAdapters {
        profiles: Arc::new(DieselProfileRepository::new(pool.clone())),
        dependent_rows: Arc::new(DieselDependentRowsRepository::new(pool.clone())),
        avatars: Arc::new(HttpAvatarStore::new(api.clone()).map_err(client_error)?),
        sessions: Arc::new(DieselSessionRevoker::new(pool.clone())),
        procedures: auth_records.clone(),
        auth_admin: Arc::new(HttpAuthAdminApi::new(api.clone()).map_err(client_error)?),
        auth_store: auth_records,
    };
    Ok(Arc::new(AccountDeletionService::new(adapters)))
}

/// Assemble handler state from whatever the configuration provides.
///
/// # Errors
///
/// Returns an error when an HTTP client cannot be constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let pool = config.db_pool.as_ref();
    let api = config.backend_api.as_ref();
    Ok(HttpState::new(
        build_login(api)?,
        build_profile(pool),
        build_account_deletion(pool, api)?,
    ))
}
