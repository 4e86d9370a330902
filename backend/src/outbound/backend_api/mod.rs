//! Reqwest adapters for the hosted backend's HTTP APIs.
//!
//! The admin and storage adapters authenticate with the service-role key;
//! the login adapter uses the public anon key. Only transport concerns live
//! here: building requests, mapping statuses and decoding bodies.

mod config;
mod dto;
mod http_auth_admin;
mod http_avatar_store;
mod http_errors;
mod http_login_service;

pub use config::{BackendApiConfig, BackendApiConfigError};
pub use http_auth_admin::HttpAuthAdminApi;
pub use http_avatar_store::HttpAvatarStore;
pub use http_login_service::HttpLoginService;
