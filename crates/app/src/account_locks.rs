//! Per-account mutation locks.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use tradehub_domain::id::AccountId;

/// Serializes mutations per account.
///
/// Concurrent add/remove/override calls for the same account apply in a
/// well-defined order, and each write leaves a mutually consistent
/// (categories, fee) pair. Mutations on different accounts never contend.
#[derive(Debug, Default)]
pub struct AccountLocks {
    // Entries are a few bytes each and never removed; the map tracks the set
    // of accounts mutated over the process lifetime.
    inner: Mutex<HashMap<AccountId, Arc<Mutex<()>>>>,
}

impl AccountLocks {
    /// Create an empty lock map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the mutation lock for `id`, waiting while another mutation for
    /// the same account is in flight.
    pub async fn acquire(&self, id: AccountId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().await;
            Arc::clone(map.entry(id).or_default())
        };
        lock.lock_owned().await
    }
}
