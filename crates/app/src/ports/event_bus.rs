//! Event publishing port.

use std::future::Future;

use tradehub_domain::error::TradeHubError;
use tradehub_domain::event::AccountEvent;

/// Outbound port for publishing account events to interested subscribers.
pub trait EventPublisher {
    fn publish(&self, event: AccountEvent)
    -> impl Future<Output = Result<(), TradeHubError>> + Send;
}
