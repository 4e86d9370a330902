//! Driving port for the account deletion use-case.
//!
//! Inbound adapters call [`AccountDeletionCommand::delete_account`] once the
//! acting user has been resolved from the session. The outcome separates a
//! completed flow (with or without a surviving auth record) from failures that
//! prevented the flow from running to its end.

use async_trait::async_trait;

use crate::domain::{DeletionError, DeletionMethod, UserId};

/// Result of a deletion flow that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountDeletionOutcome {
    /// The auth record is gone (or was never there).
    Deleted {
        /// Strategy that satisfied the eradication chain.
        method: DeletionMethod,
        /// Non-fatal failures recorded anywhere in the flow.
        warnings: Vec<DeletionError>,
    },
    /// Every eradication strategy failed cleanly.
    Failed {
        /// All failures recorded during the flow.
        errors: Vec<DeletionError>,
    },
}

/// Failures that stop the deletion flow before it can produce an outcome.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccountDeletionFailure {
    /// The privileged backend clients are not configured.
    #[error("account deletion is not configured")]
    Configuration,
    /// A call outside the anticipated failure points went wrong.
    #[error("{message}")]
    Unexpected {
        message: String,
        /// Failures accumulated before the unexpected one.
        previous_errors: Vec<DeletionError>,
    },
}

/// Domain use-case port for deleting the acting user's account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountDeletionCommand: Send + Sync {
    /// Delete every trace of `user_id`.
    async fn delete_account(
        &self,
        user_id: &UserId,
    ) -> Result<AccountDeletionOutcome, AccountDeletionFailure>;
}

/// Command used when the privileged clients could not be built.
///
/// Every call answers [`AccountDeletionFailure::Configuration`] without side
/// effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredAccountDeletion;

#[async_trait]
impl AccountDeletionCommand for UnconfiguredAccountDeletion {
    async fn delete_account(
        &self,
        _user_id: &UserId,
    ) -> Result<AccountDeletionOutcome, AccountDeletionFailure> {
        Err(AccountDeletionFailure::Configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_command_reports_configuration_failure() {
        let result = UnconfiguredAccountDeletion
            .delete_account(&UserId::random())
            .await;
        assert_eq!(result, Err(AccountDeletionFailure::Configuration));
    }
}
