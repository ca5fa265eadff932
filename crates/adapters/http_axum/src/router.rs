//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use tradehub_app::ports::{AccountRepository, CategoryCatalog, EventPublisher, EventStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the JSON API under `/api` and a plain-text health check at
/// `/health`. Includes a [`TraceLayer`] that logs each HTTP request/response
/// at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<AR, EP, ES, CC>(state: AppState<AR, EP, ES, CC>) -> Router
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use tradehub_app::services::account_service::AccountService;
    use tradehub_app::services::catalog_service::CatalogService;
    use tradehub_domain::account::ProfessionalAccount;
    use tradehub_domain::error::TradeHubError;
    use tradehub_domain::event::AccountEvent;
    use tradehub_domain::id::AccountId;
    use tradehub_domain::section::MainSection;

    struct StubAccountRepo;
    struct StubPublisher;
    struct StubEventStore;
    struct StubCatalog;

    impl tradehub_app::ports::AccountRepository for StubAccountRepo {
        async fn create(
            &self,
            account: ProfessionalAccount,
        ) -> Result<ProfessionalAccount, TradeHubError> {
            Ok(account)
        }
        async fn get_by_id(
            &self,
            _id: AccountId,
        ) -> Result<Option<ProfessionalAccount>, TradeHubError> {
            Ok(None)
        }
        async fn get_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<ProfessionalAccount>, TradeHubError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<ProfessionalAccount>, TradeHubError> {
            Ok(vec![])
        }
        async fn update(
            &self,
            account: ProfessionalAccount,
        ) -> Result<ProfessionalAccount, TradeHubError> {
            Ok(account)
        }
        async fn delete(&self, _id: AccountId) -> Result<(), TradeHubError> {
            Ok(())
        }
    }

    impl tradehub_app::ports::EventPublisher for StubPublisher {
        async fn publish(&self, _event: AccountEvent) -> Result<(), TradeHubError> {
            Ok(())
        }
    }

    impl tradehub_app::ports::EventStore for StubEventStore {
        async fn store(&self, event: AccountEvent) -> Result<AccountEvent, TradeHubError> {
            Ok(event)
        }
        async fn get_recent(&self, _limit: usize) -> Result<Vec<AccountEvent>, TradeHubError> {
            Ok(vec![])
        }
        async fn find_by_account(
            &self,
            _account_id: AccountId,
            _limit: usize,
        ) -> Result<Vec<AccountEvent>, TradeHubError> {
            Ok(vec![])
        }
    }

    impl tradehub_app::ports::CategoryCatalog for StubCatalog {
        fn sections(&self) -> Vec<MainSection> {
            MainSection::ALL.to_vec()
        }
        fn categories(&self, _section: MainSection) -> Vec<String> {
            vec![]
        }
        fn subcategories(&self, _section: MainSection, _category: &str) -> Option<Vec<String>> {
            None
        }
    }

    fn test_state() -> AppState<StubAccountRepo, StubPublisher, StubEventStore, StubCatalog> {
        AppState::new(
            AccountService::new(StubAccountRepo, StubPublisher),
            CatalogService::new(StubCatalog),
            StubEventStore,
        )
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_account() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/accounts/{}", AccountId::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_bad_request_for_malformed_account_id() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/accounts/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_list_catalog_sections() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/catalog/sections")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
