//! Port for the blob store holding profile avatars.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by avatar storage adapters.
    pub enum AvatarStoreError {
        /// The storage API could not be reached.
        Transport { message: String } => "avatar storage unreachable: {message}",
        /// The storage API answered with a failure status.
        Rejected { status: u16, message: String } =>
            "avatar storage rejected removal ({status}): {message}",
    }
}

/// Removal access to the avatar bucket.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvatarStore: Send + Sync {
    /// Remove the object stored under `key`.
    async fn remove(&self, key: &str) -> Result<(), AvatarStoreError>;
}
