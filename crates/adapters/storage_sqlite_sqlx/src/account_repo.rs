//! `SQLite` implementation of [`AccountRepository`].
//!
//! The row mapping here is the single place legacy snake_case columns become
//! the canonical domain representation; nothing above this layer ever sees a
//! raw column name.

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use tradehub_app::ports::AccountRepository;
use tradehub_domain::account::ProfessionalAccount;
use tradehub_domain::category::ServiceCategorySet;
use tradehub_domain::error::TradeHubError;
use tradehub_domain::id::AccountId;
use tradehub_domain::money::Money;
use tradehub_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`ProfessionalAccount`].
struct Wrapper(ProfessionalAccount);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<ProfessionalAccount> {
        value.map(|w| w.0)
    }
}

fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let email: String = row.try_get("email")?;
        let display_name: String = row.try_get("display_name")?;
        let primary_category: String = row.try_get("primary_category")?;
        let additional_categories: String = row.try_get("additional_categories")?;
        let fee_override_cents: Option<i64> = row.try_get("fee_override_cents")?;
        let monthly_fee_cents: i64 = row.try_get("monthly_fee_cents")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = AccountId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let additional: Vec<String> = serde_json::from_str(&additional_categories)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(ProfessionalAccount {
            id,
            email,
            display_name,
            categories: ServiceCategorySet::from_parts(primary_category, additional),
            fee_override: fee_override_cents.map(Money::from_cents),
            monthly_fee: Money::from_cents(monthly_fee_cents),
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO accounts (id, email, display_name, primary_category, additional_categories, fee_override_cents, monthly_fee_cents, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM accounts WHERE id = ?";
const SELECT_BY_EMAIL: &str = "SELECT * FROM accounts WHERE email = ?";
const SELECT_ALL: &str = "SELECT * FROM accounts ORDER BY created_at";
// Categories and the fee snapshot travel in one statement so a reader can
// never observe one without the other.
const UPDATE: &str = "UPDATE accounts SET email = ?, display_name = ?, primary_category = ?, additional_categories = ?, fee_override_cents = ?, monthly_fee_cents = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM accounts WHERE id = ?";

/// `SQLite`-backed account repository.
pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn encode_additional(account: &ProfessionalAccount) -> Result<String, StorageError> {
    Ok(serde_json::to_string(account.categories.additional())?)
}

impl AccountRepository for SqliteAccountRepository {
    fn create(
        &self,
        account: ProfessionalAccount,
    ) -> impl Future<Output = Result<ProfessionalAccount, TradeHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let additional = encode_additional(&account)?;
            sqlx::query(INSERT)
                .bind(account.id.to_string())
                .bind(&account.email)
                .bind(&account.display_name)
                .bind(account.categories.primary())
                .bind(additional)
                .bind(account.fee_override.map(Money::cents))
                .bind(account.monthly_fee.cents())
                .bind(account.created_at.to_rfc3339())
                .bind(account.updated_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(account)
        }
    }

    fn get_by_id(
        &self,
        id: AccountId,
    ) -> impl Future<Output = Result<Option<ProfessionalAccount>, TradeHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<ProfessionalAccount>, TradeHubError>> + Send {
        let pool = self.pool.clone();
        let email = email.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
                .bind(email)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<ProfessionalAccount>, TradeHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        account: ProfessionalAccount,
    ) -> impl Future<Output = Result<ProfessionalAccount, TradeHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let additional = encode_additional(&account)?;
            sqlx::query(UPDATE)
                .bind(&account.email)
                .bind(&account.display_name)
                .bind(account.categories.primary())
                .bind(additional)
                .bind(account.fee_override.map(Money::cents))
                .bind(account.monthly_fee.cents())
                .bind(account.updated_at.to_rfc3339())
                .bind(account.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(account)
        }
    }

    fn delete(&self, id: AccountId) -> impl Future<Output = Result<(), TradeHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
