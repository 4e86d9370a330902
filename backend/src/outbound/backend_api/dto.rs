//! Wire types for the hosted auth and storage APIs.

use serde::{Deserialize, Serialize};

/// Password grant request body.
#[derive(Debug, Serialize)]
pub(super) struct PasswordGrantDto<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Subset of the token response the login adapter reads.
#[derive(Debug, Deserialize)]
pub(super) struct TokenResponseDto {
    pub user: TokenUserDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct TokenUserDto {
    pub id: String,
}

/// Bulk object removal request for a storage bucket.
#[derive(Debug, Serialize)]
pub(super) struct RemoveObjectsDto<'a> {
    pub prefixes: [&'a str; 1],
}
