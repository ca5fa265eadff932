//! `SQLite` implementation of [`EventStore`].

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use tradehub_app::ports::EventStore;
use tradehub_domain::error::TradeHubError;
use tradehub_domain::event::{AccountEvent, AccountEventType};
use tradehub_domain::id::{AccountId, EventId};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`AccountEvent`].
struct Wrapper(AccountEvent);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let account_id: String = row.try_get("account_id")?;
        let event_type: String = row.try_get("event_type")?;
        let payload: String = row.try_get("payload")?;
        let occurred_at: String = row.try_get("occurred_at")?;

        let id = EventId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let account_id =
            AccountId::from_str(&account_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let event_type = AccountEventType::from_str(&event_type)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let payload: serde_json::Value =
            serde_json::from_str(&payload).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let occurred_at = DateTime::parse_from_rfc3339(&occurred_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(AccountEvent {
            id,
            account_id,
            event_type,
            payload,
            occurred_at,
        }))
    }
}

const INSERT: &str = "INSERT INTO account_events (id, account_id, event_type, payload, occurred_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_RECENT: &str = "SELECT * FROM account_events ORDER BY occurred_at DESC LIMIT ?";
const SELECT_BY_ACCOUNT: &str =
    "SELECT * FROM account_events WHERE account_id = ? ORDER BY occurred_at DESC LIMIT ?";

/// `SQLite`-backed account event store.
pub struct SqliteEventStore {
    pool: SqlitePool,
}

impl SqliteEventStore {
    /// Create a new event store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EventStore for SqliteEventStore {
    fn store(
        &self,
        event: AccountEvent,
    ) -> impl Future<Output = Result<AccountEvent, TradeHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let payload = serde_json::to_string(&event.payload).map_err(StorageError::from)?;
            sqlx::query(INSERT)
                .bind(event.id.to_string())
                .bind(event.account_id.to_string())
                .bind(event.event_type.as_str())
                .bind(payload)
                .bind(event.occurred_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(event)
        }
    }

    fn get_recent(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<AccountEvent>, TradeHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let limit = i64::try_from(limit).unwrap_or(i64::MAX);
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_RECENT)
                .bind(limit)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_account(
        &self,
        account_id: AccountId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<AccountEvent>, TradeHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let limit = i64::try_from(limit).unwrap_or(i64::MAX);
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_ACCOUNT)
                .bind(account_id.to_string())
                .bind(limit)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
