//! # tradehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AccountRepository` — CRUD for professional accounts
//!   - `EventStore` — append & query account events
//!   - `EventPublisher` — fan out account events in-process
//!   - `CategoryCatalog` — read-only service-taxonomy lookup
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AccountService` — register, add/remove service categories, fee
//!     overrides, fee recompute
//!   - `CatalogService` — browse the taxonomy
//! - Provide **in-process infrastructure** that doesn't need IO (event bus,
//!   per-account mutation locks)
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `tradehub-domain` only (plus `tokio::sync` for channels and
//! locks). Never imports adapter crates. Adapters depend on *this* crate, not
//! the reverse.

pub mod account_locks;
pub mod event_bus;
pub mod ports;
pub mod services;
