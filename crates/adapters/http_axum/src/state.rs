//! Shared application state for axum handlers.

use std::sync::Arc;

use tradehub_app::ports::{AccountRepository, CategoryCatalog, EventPublisher, EventStore};
use tradehub_app::services::account_service::AccountService;
use tradehub_app::services::catalog_service::CatalogService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository, event publisher, event store, and catalog
/// types to avoid dynamic dispatch. `Clone` is implemented manually so the
/// underlying types themselves do not need to be `Clone` — only the `Arc`
/// wrappers are cloned.
pub struct AppState<AR, EP, ES, CC> {
    /// Account and subscription-fee service.
    pub account_service: Arc<AccountService<AR, EP>>,
    /// Taxonomy browse service.
    pub catalog_service: Arc<CatalogService<CC>>,
    /// Event store for querying the persisted audit log.
    pub event_store: Arc<ES>,
}

impl<AR, EP, ES, CC> Clone for AppState<AR, EP, ES, CC> {
    fn clone(&self) -> Self {
        Self {
            account_service: Arc::clone(&self.account_service),
            catalog_service: Arc::clone(&self.catalog_service),
            event_store: Arc::clone(&self.event_store),
        }
    }
}

impl<AR, EP, ES, CC> AppState<AR, EP, ES, CC>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        account_service: AccountService<AR, EP>,
        catalog_service: CatalogService<CC>,
        event_store: ES,
    ) -> Self {
        Self {
            account_service: Arc::new(account_service),
            catalog_service: Arc::new(catalog_service),
            event_store: Arc::new(event_store),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when services need to be shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_arcs(
        account_service: Arc<AccountService<AR, EP>>,
        catalog_service: Arc<CatalogService<CC>>,
        event_store: Arc<ES>,
    ) -> Self {
        Self {
            account_service,
            catalog_service,
            event_store,
        }
    }
}
