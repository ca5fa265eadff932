//! Event store port — append-only audit log of account events.

use std::future::Future;

use tradehub_domain::error::TradeHubError;
use tradehub_domain::event::AccountEvent;
use tradehub_domain::id::AccountId;

/// Append and query persisted account events.
pub trait EventStore {
    fn store(
        &self,
        event: AccountEvent,
    ) -> impl Future<Output = Result<AccountEvent, TradeHubError>> + Send;

    fn get_recent(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<AccountEvent>, TradeHubError>> + Send;

    fn find_by_account(
        &self,
        account_id: AccountId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<AccountEvent>, TradeHubError>> + Send;
}
