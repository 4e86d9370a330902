//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use unishare::inbound::http::session_config::SessionSettings;
use unishare::outbound::backend_api::BackendApiConfig;
use unishare::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) backend_api: Option<BackendApiConfig>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self {
            session,
            bind_addr,
            db_pool: None,
            backend_api: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach settings for the hosted auth and storage APIs.
    #[must_use]
    pub fn with_backend_api(mut self, api: BackendApiConfig) -> Self {
        self.backend_api = Some(api);
        self
    }
}
