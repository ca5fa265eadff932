//! # tradehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `tradehub-app::ports`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows — the one place legacy
//!   snake_case columns become the canonical domain representation
//!
//! ## Dependency rule
//! Depends on `tradehub-app` (for port traits) and `tradehub-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod account_repo;
pub mod error;
pub mod event_store;
pub mod pool;

pub use account_repo::SqliteAccountRepository;
pub use error::StorageError;
pub use event_store::SqliteEventStore;
pub use pool::{Config, Database};
