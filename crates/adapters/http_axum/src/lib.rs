//! # tradehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST JSON API** for programmatic access
//!   (`/api/accounts`, `/api/catalog`, `/api/events`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//! - Accept the legacy camelCase field names on request bodies and translate
//!   them into the canonical snake_case representation at this boundary
//!
//! ## Dependency rule
//! Depends on `tradehub-app` (for port traits and services) and
//! `tradehub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
