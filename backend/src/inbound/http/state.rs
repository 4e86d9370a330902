//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountDeletionCommand, FixtureLoginService, FixtureProfileQuery, LoginService, ProfileQuery,
    UnconfiguredAccountDeletion,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub profile: Arc<dyn ProfileQuery>,
    pub account_deletion: Arc<dyn AccountDeletionCommand>,
}

impl HttpState {
    /// Bundle the driving ports used by handlers.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use unishare::domain::ports::{
    ///     FixtureLoginService, FixtureProfileQuery, UnconfiguredAccountDeletion,
    /// };
    /// use unishare::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureLoginService),
    ///     Arc::new(FixtureProfileQuery),
    ///     Arc::new(UnconfiguredAccountDeletion),
    /// );
    /// let _login = state.login.clone();
    /// ```
    pub fn new(
        login: Arc<dyn LoginService>,
        profile: Arc<dyn ProfileQuery>,
        account_deletion: Arc<dyn AccountDeletionCommand>,
    ) -> Self {
        Self {
            login,
            profile,
            account_deletion,
        }
    }

    /// Replace the account deletion command, keeping the other ports.
    #[must_use]
    pub fn with_account_deletion(mut self, command: Arc<dyn AccountDeletionCommand>) -> Self {
        self.account_deletion = command;
        self
    }
}

impl Default for HttpState {
    /// Fixture login and profile ports with deletion left unconfigured.
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureLoginService),
            Arc::new(FixtureProfileQuery),
            Arc::new(UnconfiguredAccountDeletion),
        )
    }
}
