//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories only translate between Diesel rows and domain types. Row
//! structs (`models.rs`) and table definitions (`schema.rs`) stay private to
//! this module; connections come from a `bb8` pool via `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use admin_backend::outbound::persistence::{
//!     DbPool, DieselAdministratorRepository, PoolConfig,
//! };
//!
//! # async fn wire() -> Result<(), admin_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/admins")).await?;
//! let repository = DieselAdministratorRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_administrator_repository;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_administrator_repository::DieselAdministratorRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
