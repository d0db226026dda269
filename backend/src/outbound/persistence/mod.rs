//! Persistence adapters for tennis strings and sessions.
//!
//! Two adapter families implement the repository ports:
//!
//! - **Diesel**: PostgreSQL via `diesel-async` with `bb8` pooling. Row structs
//!   (`models.rs`) and table definitions (`schema.rs`) stay private to this
//!   module; rows are revalidated through the domain constructors on read.
//! - **In-memory**: map-backed repositories for running without a database
//!   and for integration tests.
//!
//! # Example
//!
//! ```ignore
//! use stringlog::outbound::persistence::{
//!     DbPool, DieselTennisStringRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("postgres://localhost/stringlog")?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/stringlog")).await?;
//! let strings = DieselTennisStringRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_tennis_session_repository;
mod diesel_tennis_string_repository;
mod in_memory_tennis_session_repository;
mod in_memory_tennis_string_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_tennis_session_repository::DieselTennisSessionRepository;
pub use diesel_tennis_string_repository::DieselTennisStringRepository;
pub use in_memory_tennis_session_repository::InMemoryTennisSessionRepository;
pub use in_memory_tennis_string_repository::InMemoryTennisStringRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
