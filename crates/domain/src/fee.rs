//! Monthly subscription fee schedule.
//!
//! This is a **pure function module**: no state, no persistence, no side
//! effects. Callers are responsible for storing the result. All amounts are
//! integer cents ([`Money`]), so recomputing the same input yields a
//! bit-exact identical fee every time.

use crate::category::ServiceCategorySet;
use crate::error::{TradeHubError, ValidationError};
use crate::money::Money;

/// Flat monthly base fee covering the primary service category: `$29.77`.
pub const BASE_FEE: Money = Money::from_cents(2977);

/// Monthly surcharge per additional service category: `$5.00`.
pub const ADDITIONAL_SERVICE_FEE: Money = Money::from_cents(500);

/// Compute the scheduled monthly fee for a category set.
///
/// `fee = BASE_FEE + ADDITIONAL_SERVICE_FEE × |additional|`, exactly to the
/// cent. Integer arithmetic only; nothing here ever rounds.
///
/// # Errors
///
/// Returns [`ValidationError::MissingPrimaryCategory`] when the set's primary
/// category is empty (a professional account in that state is invalid, but
/// legacy rows can still decode to it).
pub fn monthly_fee(categories: &ServiceCategorySet) -> Result<Money, TradeHubError> {
    if categories.primary().trim().is_empty() {
        return Err(ValidationError::MissingPrimaryCategory.into());
    }
    let additional = i64::try_from(categories.additional().len()).unwrap_or(i64::MAX);
    Ok(BASE_FEE.saturating_add(ADDITIONAL_SERVICE_FEE.saturating_mul(additional)))
}

/// The fee actually billed to an account.
///
/// An explicit per-account override replaces the schedule entirely. This is
/// the only place an override is applied; presentation code must never map
/// accounts to special amounts on its own.
///
/// # Errors
///
/// Same as [`monthly_fee`] — the schedule is evaluated (and its invariants
/// checked) even when an override ends up replacing it.
pub fn billed_monthly_fee(
    categories: &ServiceCategorySet,
    fee_override: Option<Money>,
) -> Result<Money, TradeHubError> {
    let scheduled = monthly_fee(categories)?;
    Ok(fee_override.unwrap_or(scheduled))
}
