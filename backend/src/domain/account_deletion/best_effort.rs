//! Best-effort steps: avatar removal and session revocation.
//!
//! Both return `Result<(), DeletionError>`; the caller folds any error into
//! its accumulator and carries on.

use serde_json::json;
use tracing::{debug, info, warn};

use super::DeletionError;
use crate::domain::ports::{AvatarStore, SessionRevoker};
use crate::domain::{Profile, UserId};

/// Step recorded when the avatar blob could not be removed.
pub const AVATAR_CLEANUP_STEP: &str = "avatar_cleanup";
/// Step recorded when the user's auth sessions could not be revoked.
pub const SIGN_OUT_STEP: &str = "sign_out";

/// Remove the avatar blob referenced by `profile`, if any.
///
/// Nothing is called when there is no profile, no avatar URL, or the URL
/// yields no object key.
pub async fn cleanup_avatar(
    store: &dyn AvatarStore,
    profile: Option<&Profile>,
) -> Result<(), DeletionError> {
    let Some(key) = profile.and_then(Profile::avatar_object_key) else {
        debug!("no avatar to remove");
        return Ok(());
    };

    store.remove(&key).await.map_err(|err| {
        warn!(key = %key, error = %err, "avatar cleanup failed");
        DeletionError::new(AVATAR_CLEANUP_STEP, err.to_string()).with_details(json!({ "key": key }))
    })?;
    debug!(key = %key, "avatar removed");
    Ok(())
}

/// Revoke every auth session of `user_id`.
pub async fn terminate_sessions(
    revoker: &dyn SessionRevoker,
    user_id: &UserId,
) -> Result<(), DeletionError> {
    match revoker.revoke_sessions(user_id).await {
        Ok(revoked) => {
            info!(%user_id, revoked, "auth sessions revoked");
            Ok(())
        }
        Err(err) => {
            warn!(%user_id, error = %err, "session revocation failed");
            Err(DeletionError::new(SIGN_OUT_STEP, err.to_string()))
        }
    }
}
