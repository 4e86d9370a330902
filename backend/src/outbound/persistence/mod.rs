//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Adapters are thin: they translate between Diesel rows and domain values
//! and map database failures onto each port's connection/query split. Row
//! structs and table definitions stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use unishare::outbound::persistence::{DbPool, DieselProfileRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/unishare")).await?;
//! let profiles = DieselProfileRepository::new(pool);
//! ```

mod diesel_auth_record_repository;
mod diesel_dependent_rows_repository;
mod diesel_profile_repository;
mod diesel_session_revoker;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use diesel_auth_record_repository::DieselAuthRecordRepository;
pub use diesel_dependent_rows_repository::DieselDependentRowsRepository;
pub use diesel_profile_repository::DieselProfileRepository;
pub use diesel_session_revoker::DieselSessionRevoker;
pub use pool::{DbPool, PoolConfig, PoolError};
