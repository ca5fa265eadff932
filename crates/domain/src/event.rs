//! Account events — audit records for fee-relevant mutations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::id::{AccountId, EventId};
use crate::time::{Timestamp, now};

/// What happened to the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountEventType {
    AccountRegistered,
    CategoryAdded,
    CategoryRemoved,
    FeeOverrideSet,
    FeeOverrideCleared,
    FeeRecomputed,
}

impl AccountEventType {
    /// Stable string form used for persistence.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AccountEventType::AccountRegistered => "account_registered",
            AccountEventType::CategoryAdded => "category_added",
            AccountEventType::CategoryRemoved => "category_removed",
            AccountEventType::FeeOverrideSet => "fee_override_set",
            AccountEventType::FeeOverrideCleared => "fee_override_cleared",
            AccountEventType::FeeRecomputed => "fee_recomputed",
        }
    }
}

impl fmt::Display for AccountEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountEventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "account_registered" => Ok(AccountEventType::AccountRegistered),
            "category_added" => Ok(AccountEventType::CategoryAdded),
            "category_removed" => Ok(AccountEventType::CategoryRemoved),
            "fee_override_set" => Ok(AccountEventType::FeeOverrideSet),
            "fee_override_cleared" => Ok(AccountEventType::FeeOverrideCleared),
            "fee_recomputed" => Ok(AccountEventType::FeeRecomputed),
            _ => Err(UnknownEventType(s.to_string())),
        }
    }
}

/// Error for unrecognized persisted event types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown account event type: {0:?}")]
pub struct UnknownEventType(pub String);

/// One audit record: something fee-relevant happened to an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountEvent {
    pub id: EventId,
    pub account_id: AccountId,
    pub event_type: AccountEventType,
    /// Event-specific details, e.g. the category name and resulting fee.
    pub payload: serde_json::Value,
    pub occurred_at: Timestamp,
}

impl AccountEvent {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(
        event_type: AccountEventType,
        account_id: AccountId,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            id: EventId::new(),
            account_id,
            event_type,
            payload,
            occurred_at: now(),
        }
    }
}
