//! Account service — use-cases for professional accounts and their
//! service-category subscriptions.
//!
//! Every mutation recomputes the billed-fee snapshot and hands the repository
//! the categories and fee together in a single `update`, under the account's
//! mutation lock. Either the whole (categories, fee) pair commits or neither
//! does.

use tradehub_domain::account::ProfessionalAccount;
use tradehub_domain::category::SimilarCategory;
use tradehub_domain::error::{ConflictError, NotFoundError, TradeHubError, ValidationError};
use tradehub_domain::event::{AccountEvent, AccountEventType};
use tradehub_domain::fee;
use tradehub_domain::id::AccountId;
use tradehub_domain::money::Money;
use tradehub_domain::time::now;

use crate::account_locks::AccountLocks;
use crate::ports::{AccountRepository, EventPublisher};

/// Signup input for a new professional account.
#[derive(Debug, Clone)]
pub struct NewProfessional {
    pub email: String,
    pub display_name: String,
    pub primary_category: String,
    pub additional_categories: Vec<String>,
}

/// Outcome of adding a service category: the updated account plus an optional
/// near-duplicate warning. The warning never blocks the add.
#[derive(Debug, Clone)]
pub struct ServiceAddition {
    pub account: ProfessionalAccount,
    pub warning: Option<SimilarCategory>,
}

/// Application service for professional accounts and subscription fees.
pub struct AccountService<R, P> {
    repo: R,
    events: P,
    locks: AccountLocks,
}

impl<R: AccountRepository, P: EventPublisher> AccountService<R, P> {
    /// Create a new service backed by the given repository and publisher.
    pub fn new(repo: R, events: P) -> Self {
        Self {
            repo,
            events,
            locks: AccountLocks::new(),
        }
    }

    /// Register a new professional account.
    ///
    /// The fee snapshot is computed from the signup categories before the
    /// account is persisted, so the stored record is consistent from the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns [`TradeHubError::Conflict`] when the email is already
    /// registered, [`TradeHubError::Validation`] / [`TradeHubError::Category`]
    /// if invariants fail, or a storage error from the repository.
    #[tracing::instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register_professional(
        &self,
        input: NewProfessional,
    ) -> Result<ProfessionalAccount, TradeHubError> {
        if self.repo.get_by_email(&input.email).await?.is_some() {
            return Err(ConflictError {
                entity: "Account",
                field: "email",
                value: input.email,
            }
            .into());
        }

        let mut builder = ProfessionalAccount::builder()
            .email(input.email)
            .display_name(input.display_name)
            .primary_category(input.primary_category);
        for name in input.additional_categories {
            builder = builder.additional_category(name);
        }
        let account = builder.build()?;

        let account = self.repo.create(account).await?;
        self.publish(
            AccountEventType::AccountRegistered,
            &account,
            serde_json::json!({
                "primary_category": account.categories.primary(),
                "monthly_fee_cents": account.monthly_fee.cents(),
            }),
        )
        .await?;
        Ok(account)
    }

    /// Look up an account by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TradeHubError::NotFound`] when no account with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_account(&self, id: AccountId) -> Result<ProfessionalAccount, TradeHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Account",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all accounts.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_accounts(&self) -> Result<Vec<ProfessionalAccount>, TradeHubError> {
        self.repo.get_all().await
    }

    /// Add an additional service category and re-derive the fee.
    ///
    /// # Errors
    ///
    /// Returns [`TradeHubError::Category`] for duplicates,
    /// [`TradeHubError::Validation`] for empty names,
    /// [`TradeHubError::NotFound`] for unknown accounts, or a storage error.
    /// On error the stored account is untouched.
    #[tracing::instrument(skip(self))]
    pub async fn add_service(
        &self,
        id: AccountId,
        category: String,
    ) -> Result<ServiceAddition, TradeHubError> {
        let _guard = self.locks.acquire(id).await;

        let mut account = self.get_account(id).await?;
        let warning = account.categories.add(category.clone())?;
        account.recompute_fee(now())?;
        let account = self.repo.update(account).await?;

        self.publish(
            AccountEventType::CategoryAdded,
            &account,
            serde_json::json!({
                "category": category,
                "monthly_fee_cents": account.monthly_fee.cents(),
            }),
        )
        .await?;

        if let Some(warning) = &warning {
            tracing::info!(account_id = %id, %warning, "similar category listed");
        }
        Ok(ServiceAddition { account, warning })
    }

    /// Remove an additional service category and re-derive the fee.
    ///
    /// # Errors
    ///
    /// Returns [`TradeHubError::Category`] when `category` is the primary or
    /// not listed, [`TradeHubError::NotFound`] for unknown accounts, or a
    /// storage error. On error the stored account is untouched.
    #[tracing::instrument(skip(self))]
    pub async fn remove_service(
        &self,
        id: AccountId,
        category: &str,
    ) -> Result<ProfessionalAccount, TradeHubError> {
        let _guard = self.locks.acquire(id).await;

        let mut account = self.get_account(id).await?;
        account.categories.remove(category)?;
        account.recompute_fee(now())?;
        let account = self.repo.update(account).await?;

        self.publish(
            AccountEventType::CategoryRemoved,
            &account,
            serde_json::json!({
                "category": category,
                "monthly_fee_cents": account.monthly_fee.cents(),
            }),
        )
        .await?;
        Ok(account)
    }

    /// Set or clear the explicit per-account fee override.
    ///
    /// # Errors
    ///
    /// Returns [`TradeHubError::Validation`] for negative amounts,
    /// [`TradeHubError::NotFound`] for unknown accounts, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn set_fee_override(
        &self,
        id: AccountId,
        amount: Option<Money>,
    ) -> Result<ProfessionalAccount, TradeHubError> {
        if let Some(amount) = amount {
            if amount.is_negative() {
                return Err(ValidationError::InvalidAmount(amount.to_string()).into());
            }
        }

        let _guard = self.locks.acquire(id).await;

        let mut account = self.get_account(id).await?;
        account.fee_override = amount;
        account.recompute_fee(now())?;
        let account = self.repo.update(account).await?;

        let event_type = if amount.is_some() {
            AccountEventType::FeeOverrideSet
        } else {
            AccountEventType::FeeOverrideCleared
        };
        self.publish(
            event_type,
            &account,
            serde_json::json!({
                "monthly_fee_cents": account.monthly_fee.cents(),
            }),
        )
        .await?;
        Ok(account)
    }

    /// Re-derive the fee snapshot from the stored categories and persist it
    /// if it drifted.
    ///
    /// Legacy rows were written by code that updated categories without
    /// touching the fee; this repairs them. Accounts whose snapshot already
    /// matches the schedule are returned unchanged without a write.
    ///
    /// # Errors
    ///
    /// Returns [`TradeHubError::NotFound`] for unknown accounts,
    /// [`TradeHubError::Validation`] when the stored row is invalid, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn recompute_fee(&self, id: AccountId) -> Result<ProfessionalAccount, TradeHubError> {
        let _guard = self.locks.acquire(id).await;

        let mut account = self.get_account(id).await?;
        let target = fee::billed_monthly_fee(&account.categories, account.fee_override)?;
        if target == account.monthly_fee {
            return Ok(account);
        }

        let previous = account.monthly_fee;
        account.monthly_fee = target;
        account.updated_at = now();
        let account = self.repo.update(account).await?;

        self.publish(
            AccountEventType::FeeRecomputed,
            &account,
            serde_json::json!({
                "previous_fee_cents": previous.cents(),
                "monthly_fee_cents": account.monthly_fee.cents(),
            }),
        )
        .await?;
        Ok(account)
    }

    /// Delete an account by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_account(&self, id: AccountId) -> Result<(), TradeHubError> {
        let _guard = self.locks.acquire(id).await;
        self.repo.delete(id).await
    }

    async fn publish(
        &self,
        event_type: AccountEventType,
        account: &ProfessionalAccount,
        payload: serde_json::Value,
    ) -> Result<(), TradeHubError> {
        self.events
            .publish(AccountEvent::new(event_type, account.id, payload))
            .await
    }
}
