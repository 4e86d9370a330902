//! Account deletion.
//!
//! Removing an account touches three stores: the public tables keyed by the
//! user id, the avatar bucket, and the auth service's own records. The flow
//! is sequential and never aborts on a single failing call. Each failure is
//! recorded as a [`DeletionError`] and the list is handed back to the caller
//! as diagnostics.
//!
//! - [`sweep_dependent_rows`] clears the public tables, profile last.
//! - [`cleanup_avatar`] and [`terminate_sessions`] are best-effort.
//! - [`eradicate_auth_record`] runs the ordered fallback chain that removes
//!   the auth record itself.
//! - [`AccountDeletionService`] sequences the above behind the
//!   [`AccountDeletionCommand`](crate::domain::ports::AccountDeletionCommand)
//!   driving port.

mod best_effort;
mod eradication;
mod service;
mod sweep;

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

pub use best_effort::{AVATAR_CLEANUP_STEP, SIGN_OUT_STEP, cleanup_avatar, terminate_sessions};
pub use eradication::{
    AuthEradicationPorts, DeletionMethod, DeletionProcedure, EradicationOutcome,
    EradicationReport, eradicate_auth_record,
};
pub use service::{AccountDeletionAdapters, AccountDeletionService};
pub use sweep::sweep_dependent_rows;

/// Diagnostic record for one failed sub-operation.
///
/// Created fresh per deletion request and never persisted.
///
/// # Examples
/// ```
/// use unishare::domain::DeletionError;
///
/// let error = DeletionError::new("delete_resources", "permission denied");
/// assert_eq!(error.to_string(), "delete_resources: permission denied");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DeletionError {
    step: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    details: Option<Value>,
}

impl DeletionError {
    /// Record a failure of `step`.
    pub fn new(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Attach structured context.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn step(&self) -> &str {
        &self.step
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl fmt::Display for DeletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.step, self.message)
    }
}

/// Public table holding rows owned by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependentTable {
    Resources,
    StudyGroupMembers,
    UserFollows,
    Notifications,
    GroupInvitations,
    UserSettings,
    Profiles,
}

impl DependentTable {
    /// Order in which the sweep visits tables.
    ///
    /// `Profiles` stays last: its `avatar_url` must be readable until the
    /// other tables are gone.
    pub const SWEEP_ORDER: [Self; 7] = [
        Self::Resources,
        Self::StudyGroupMembers,
        Self::UserFollows,
        Self::Notifications,
        Self::GroupInvitations,
        Self::UserSettings,
        Self::Profiles,
    ];

    /// SQL name of the table in the `public` schema.
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Resources => "resources",
            Self::StudyGroupMembers => "study_group_members",
            Self::UserFollows => "user_follows",
            Self::Notifications => "notifications",
            Self::GroupInvitations => "group_invitations",
            Self::UserSettings => "user_settings",
            Self::Profiles => "profiles",
        }
    }

    /// Columns that reference the owning user. A row matching any of them
    /// is deleted.
    pub const fn owner_columns(self) -> &'static [&'static str] {
        match self {
            Self::Resources => &["created_by"],
            Self::StudyGroupMembers => &["user_id"],
            Self::UserFollows => &["follower_id", "following_id"],
            Self::Notifications => &["user_id"],
            Self::GroupInvitations => &["sent_by"],
            Self::UserSettings => &["user_id"],
            Self::Profiles => &["id"],
        }
    }

    /// Step name recorded when deleting from this table fails.
    pub fn step_name(self) -> String {
        format!("delete_{}", self.table_name())
    }
}

impl fmt::Display for DependentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn profiles_are_swept_last() {
        assert_eq!(
            DependentTable::SWEEP_ORDER.last(),
            Some(&DependentTable::Profiles)
        );
    }

    #[test]
    fn follows_are_matched_in_both_directions() {
        assert_eq!(
            DependentTable::UserFollows.owner_columns(),
            ["follower_id", "following_id"]
        );
    }

    #[rstest]
    #[case(DependentTable::Resources, "delete_resources")]
    #[case(DependentTable::StudyGroupMembers, "delete_study_group_members")]
    #[case(DependentTable::GroupInvitations, "delete_group_invitations")]
    fn step_names_follow_table_names(#[case] table: DependentTable, #[case] expected: &str) {
        assert_eq!(table.step_name(), expected);
    }

    #[test]
    fn deletion_error_omits_absent_details() {
        let value = serde_json::to_value(DeletionError::new("sign_out", "boom")).expect("json");
        assert_eq!(value, json!({ "step": "sign_out", "message": "boom" }));
    }

    #[test]
    fn deletion_error_serialises_details() {
        let error =
            DeletionError::new("avatar_cleanup", "gone").with_details(json!({ "key": "a.png" }));
        let value = serde_json::to_value(error).expect("json");
        assert_eq!(value["details"]["key"], "a.png");
    }
}
