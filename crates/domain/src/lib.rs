//! # tradehub-domain
//!
//! Pure domain model for the tradehub home-services professionals directory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps,
//!   fixed-point currency amounts
//! - Define **ProfessionalAccount** (the subscriber: primary service category,
//!   additional categories, billed fee snapshot)
//! - Define **ServiceCategorySet** (membership rules: one permanent primary
//!   category, zero or more additional categories, no duplicates)
//! - Define the **fee schedule** (base fee plus per-additional-service
//!   surcharge, pure integer-cent arithmetic)
//! - Define **AccountEvents** (audit records for registrations and
//!   fee-relevant mutations)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod money;
pub mod time;

pub mod account;
pub mod category;
pub mod event;
pub mod fee;
pub mod section;
