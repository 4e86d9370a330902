//! User identity and profile model.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned when constructing user values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier was not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
}

/// Stable user identifier shared by the auth record and the profile row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self::from(Uuid::new_v4())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value, value.to_string())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Public profile row for a user.
///
/// ## Invariants
/// - `id` references at most one auth record.
/// - `avatar_url`, when present, points at an object in the avatar bucket;
///   its last path segment is the storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Ada Lovelace")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "https://project.example/storage/v1/object/public/avatars/abc.png")]
    avatar_url: Option<String>,
}

impl Profile {
    /// Build a profile from its stored columns.
    pub fn new(id: UserId, display_name: Option<String>, avatar_url: Option<String>) -> Self {
        Self {
            id,
            display_name,
            avatar_url,
        }
    }

    /// Owning user.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Optional display name.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Optional public avatar URL.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Storage key of the avatar blob, taken from the last path segment of
    /// `avatar_url`.
    ///
    /// Query strings and fragments are ignored. Returns `None` when there is
    /// no URL or its last segment is empty.
    ///
    /// # Examples
    /// ```
    /// use unishare::domain::{Profile, UserId};
    ///
    /// let profile = Profile::new(
    ///     UserId::random(),
    ///     None,
    ///     Some("https://host/avatars/abc.png".to_owned()),
    /// );
    /// assert_eq!(profile.avatar_object_key().as_deref(), Some("abc.png"));
    /// ```
    pub fn avatar_object_key(&self) -> Option<String> {
        let raw = self.avatar_url.as_deref()?.trim();
        let segment = match Url::parse(raw) {
            Ok(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .map(str::to_owned),
            Err(_) => raw
                .split(['?', '#'])
                .next()
                .and_then(|path| path.rsplit('/').next())
                .map(str::to_owned),
        }?;
        (!segment.is_empty()).then_some(segment)
    }
}
