//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod accounts;
#[allow(clippy::missing_errors_doc)]
pub mod catalog;
#[allow(clippy::missing_errors_doc)]
pub mod events;

use axum::Router;
use axum::routing::{delete, get, post, put};

use tradehub_app::ports::{AccountRepository, CategoryCatalog, EventPublisher, EventStore};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<AR, EP, ES, CC>() -> Router<AppState<AR, EP, ES, CC>>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    Router::new()
        // Accounts
        .route(
            "/accounts",
            get(accounts::list::<AR, EP, ES, CC>).post(accounts::register::<AR, EP, ES, CC>),
        )
        .route(
            "/accounts/{id}",
            get(accounts::get::<AR, EP, ES, CC>).delete(accounts::delete::<AR, EP, ES, CC>),
        )
        .route(
            "/accounts/{id}/services",
            post(accounts::add_service::<AR, EP, ES, CC>),
        )
        .route(
            "/accounts/{id}/services/{category}",
            delete(accounts::remove_service::<AR, EP, ES, CC>),
        )
        .route(
            "/accounts/{id}/fee-override",
            put(accounts::set_fee_override::<AR, EP, ES, CC>),
        )
        .route(
            "/accounts/{id}/fee/recompute",
            post(accounts::recompute_fee::<AR, EP, ES, CC>),
        )
        .route(
            "/accounts/{id}/events",
            get(events::by_account::<AR, EP, ES, CC>),
        )
        // Catalog
        .route(
            "/catalog/sections",
            get(catalog::sections::<AR, EP, ES, CC>),
        )
        .route(
            "/catalog/{section}/categories",
            get(catalog::categories::<AR, EP, ES, CC>),
        )
        .route(
            "/catalog/{section}/{category}/subcategories",
            get(catalog::subcategories::<AR, EP, ES, CC>),
        )
        // Events
        .route("/events", get(events::recent::<AR, EP, ES, CC>))
}
