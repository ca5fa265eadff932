//! ProfessionalAccount — a subscribed home-services professional.

use serde::{Deserialize, Serialize};

use crate::category::ServiceCategorySet;
use crate::error::{TradeHubError, ValidationError};
use crate::fee;
use crate::id::AccountId;
use crate::money::Money;
use crate::time::Timestamp;

/// A professional's directory account and its billing state.
///
/// `monthly_fee` is the persisted snapshot of the billed fee and is the
/// authoritative value for reads. Every category or override mutation must
/// recompute it (see [`ProfessionalAccount::recompute_fee`]) and persist both
/// in the same write, so a reader never sees a category set paired with a
/// stale fee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalAccount {
    pub id: AccountId,
    pub email: String,
    pub display_name: String,
    pub categories: ServiceCategorySet,
    /// Explicit special pricing; replaces the schedule when set.
    pub fee_override: Option<Money>,
    /// Persisted billed-fee snapshot, authoritative for reads.
    pub monthly_fee: Money,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProfessionalAccount {
    /// Create a builder for constructing a [`ProfessionalAccount`].
    #[must_use]
    pub fn builder() -> ProfessionalAccountBuilder {
        ProfessionalAccountBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TradeHubError::Validation`] when `email` or `display_name`
    /// is empty, and propagates [`ServiceCategorySet::validate`] failures.
    pub fn validate(&self) -> Result<(), TradeHubError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail.into());
        }
        if self.display_name.trim().is_empty() {
            return Err(ValidationError::EmptyDisplayName.into());
        }
        self.categories.validate()
    }

    /// Re-derive the fee snapshot from the current categories and override,
    /// stamping `updated_at`.
    ///
    /// # Errors
    ///
    /// Propagates [`fee::billed_monthly_fee`] failures; the account is left
    /// untouched on error.
    pub fn recompute_fee(&mut self, ts: Timestamp) -> Result<(), TradeHubError> {
        self.monthly_fee = fee::billed_monthly_fee(&self.categories, self.fee_override)?;
        self.updated_at = ts;
        Ok(())
    }
}

/// Step-by-step builder for [`ProfessionalAccount`].
#[derive(Debug, Default)]
pub struct ProfessionalAccountBuilder {
    id: Option<AccountId>,
    email: Option<String>,
    display_name: Option<String>,
    primary_category: Option<String>,
    additional_categories: Vec<String>,
    fee_override: Option<Money>,
    created_at: Option<Timestamp>,
}

impl ProfessionalAccountBuilder {
    #[must_use]
    pub fn id(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn primary_category(mut self, primary: impl Into<String>) -> Self {
        self.primary_category = Some(primary.into());
        self
    }

    #[must_use]
    pub fn additional_category(mut self, name: impl Into<String>) -> Self {
        self.additional_categories.push(name.into());
        self
    }

    #[must_use]
    pub fn fee_override(mut self, amount: Money) -> Self {
        self.fee_override = Some(amount);
        self
    }

    #[must_use]
    pub fn created_at(mut self, ts: Timestamp) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`ProfessionalAccount`]
    /// with its fee snapshot already computed.
    ///
    /// # Errors
    ///
    /// Returns [`TradeHubError::Validation`] for missing/empty fields and
    /// [`TradeHubError::Category`] for duplicate initial categories.
    pub fn build(self) -> Result<ProfessionalAccount, TradeHubError> {
        let mut categories = ServiceCategorySet::new(self.primary_category.unwrap_or_default())?;
        for name in self.additional_categories {
            // Signup-time warnings are dropped; the interactive add-service
            // flow is where similarity gets surfaced.
            categories.add(name)?;
        }

        let created_at = self.created_at.unwrap_or_else(crate::time::now);
        let monthly_fee = fee::billed_monthly_fee(&categories, self.fee_override)?;

        let account = ProfessionalAccount {
            id: self.id.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            display_name: self.display_name.unwrap_or_default(),
            categories,
            fee_override: self.fee_override,
            monthly_fee,
            created_at,
            updated_at: created_at,
        };
        account.validate()?;
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CategoryError;

    fn valid_builder() -> ProfessionalAccountBuilder {
        ProfessionalAccount::builder()
            .email("pat@example.com")
            .display_name("Pat's Electrical")
            .primary_category("Electricians")
    }

    #[test]
    fn should_build_account_with_computed_fee_snapshot() {
        let account = valid_builder().build().unwrap();
        assert_eq!(account.categories.primary(), "Electricians");
        assert_eq!(account.monthly_fee, Money::from_cents(2977));
        assert_eq!(account.created_at, account.updated_at);
    }

    #[test]
    fn should_include_initial_additional_categories_in_snapshot() {
        let account = valid_builder()
            .additional_category("Plumbers")
            .additional_category("Roofers")
            .build()
            .unwrap();
        assert_eq!(account.categories.total(), 3);
        assert_eq!(account.monthly_fee, Money::from_cents(3977));
    }

    #[test]
    fn should_reject_missing_primary_category() {
        let result = ProfessionalAccount::builder()
            .email("pat@example.com")
            .display_name("Pat")
            .build();
        assert!(matches!(
            result,
            Err(TradeHubError::Validation(
                ValidationError::MissingPrimaryCategory
            ))
        ));
    }

    #[test]
    fn should_reject_duplicate_initial_categories() {
        let result = valid_builder()
            .additional_category("Plumbers")
            .additional_category("Plumbers")
            .build();
        assert!(matches!(
            result,
            Err(TradeHubError::Category(CategoryError::Duplicate { .. }))
        ));
    }

    #[test]
    fn should_reject_empty_email() {
        let result = ProfessionalAccount::builder()
            .display_name("Pat")
            .primary_category("Electricians")
            .build();
        assert!(matches!(
            result,
            Err(TradeHubError::Validation(ValidationError::EmptyEmail))
        ));
    }

    #[test]
    fn should_apply_fee_override_at_build_time() {
        let account = valid_builder()
            .fee_override(Money::from_cents(1999))
            .build()
            .unwrap();
        assert_eq!(account.monthly_fee, Money::from_cents(1999));
    }

    #[test]
    fn should_recompute_snapshot_after_category_mutation() {
        let mut account = valid_builder().build().unwrap();
        account.categories.add("Plumbers").unwrap();

        let ts = crate::time::now();
        account.recompute_fee(ts).unwrap();
        assert_eq!(account.monthly_fee, Money::from_cents(3477));
        assert_eq!(account.updated_at, ts);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let account = valid_builder()
            .additional_category("Plumbers")
            .build()
            .unwrap();
        let json = serde_json::to_string(&account).unwrap();
        let parsed: ProfessionalAccount = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, account.id);
        assert_eq!(parsed.categories, account.categories);
        assert_eq!(parsed.monthly_fee, account.monthly_fee);
    }
}
