//! Driven adapters: Postgres persistence and the hosted backend's HTTP APIs.

pub mod backend_api;
pub mod persistence;
