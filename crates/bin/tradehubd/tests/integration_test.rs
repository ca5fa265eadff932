//! End-to-end smoke tests for the full tradehubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! repos, real services, real axum router, audit task) and exercises the HTTP
//! layer via `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tower::ServiceExt;

use tradehub_adapter_catalog::StaticCatalog;
use tradehub_adapter_http_axum::router;
use tradehub_adapter_http_axum::state::AppState;
use tradehub_adapter_storage_sqlite_sqlx::{
    Config, SqliteAccountRepository, SqliteEventStore,
};
use tradehub_app::event_bus::InProcessEventBus;
use tradehub_app::ports::EventStore;
use tradehub_app::services::account_service::AccountService;
use tradehub_app::services::catalog_service::CatalogService;

/// Build a fully-wired router backed by an in-memory `SQLite` database,
/// including the audit task that persists published account events.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let account_repo = SqliteAccountRepository::new(pool.clone());
    let event_store = Arc::new(SqliteEventStore::new(pool));

    let event_bus = InProcessEventBus::new(256);
    let audit_rx = event_bus.subscribe();
    let audit_store = Arc::clone(&event_store);
    tokio::spawn(async move {
        let mut stream = BroadcastStream::new(audit_rx);
        while let Some(Ok(event)) = stream.next().await {
            audit_store.store(event).await.expect("audit store");
        }
    });

    let state = AppState::from_arcs(
        Arc::new(AccountService::new(account_repo, event_bus)),
        Arc::new(CatalogService::new(StaticCatalog::new())),
        event_store,
    );

    router::build(state)
}

fn get(uri: impl Into<String>) -> Request<Body> {
    Request::builder()
        .uri(uri.into())
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: impl Into<String>, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri.into())
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: impl Into<String>, body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri.into())
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri.into())
        .body(Body::empty())
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

/// Register an electrician and return the new account's id.
async fn register_electrician(app: &axum::Router) -> String {
    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/accounts",
            r#"{"email":"pat@example.com","display_name":"Pat's Electrical","primary_category":"Electrician"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    body["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Account lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_account_crud_cycle() {
    let app = app().await;

    // Register
    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/accounts",
            r#"{"email":"pat@example.com","display_name":"Pat's Electrical","primary_category":"Electrician"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    let account_id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["monthly_fee"], 2977);
    assert_eq!(body["categories"]["primary"], "Electrician");

    // List
    let resp = app.clone().oneshot(get("/api/accounts")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Get
    let resp = app
        .clone()
        .oneshot(get(format!("/api/accounts/{account_id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Delete
    let resp = app
        .clone()
        .oneshot(delete(format!("/api/accounts/{account_id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Verify gone
    let resp = app
        .oneshot(get(format!("/api/accounts/{account_id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_second_registration_with_same_email() {
    let app = app().await;
    register_electrician(&app).await;

    let resp = app
        .oneshot(post_json(
            "/api/accounts",
            r#"{"email":"pat@example.com","display_name":"Other Pat","primary_category":"Plumber"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn should_accept_legacy_camel_case_field_names() {
    let app = app().await;

    let resp = app
        .oneshot(post_json(
            "/api/accounts",
            r#"{"email":"sam@example.com","displayName":"Sam Designs","serviceCategory":"Interior Designers","additionalServiceCategories":["Home Stagers"]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["categories"]["primary"], "Interior Designers");
    assert_eq!(body["monthly_fee"], 3477);
}

// ---------------------------------------------------------------------------
// Fee schedule over add/remove service
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_walk_the_fee_schedule_through_add_and_remove() {
    let app = app().await;
    let account_id = register_electrician(&app).await;

    // Add "Plumber" → 34.77
    let resp = app
        .clone()
        .oneshot(post_json(
            format!("/api/accounts/{account_id}/services"),
            r#"{"category":"Plumber"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["account"]["monthly_fee"], 3477);
    assert!(body.get("warning").is_none());

    // Add "HVAC Technician" → 39.77
    let resp = app
        .clone()
        .oneshot(post_json(
            format!("/api/accounts/{account_id}/services"),
            r#"{"category":"HVAC Technician"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["account"]["monthly_fee"], 3977);

    // Remove "Plumber" → 34.77, HVAC remains
    let resp = app
        .clone()
        .oneshot(delete(format!(
            "/api/accounts/{account_id}/services/Plumber"
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["monthly_fee"], 3477);
    assert_eq!(
        body["categories"]["additional"],
        serde_json::json!(["HVAC Technician"])
    );

    // The persisted snapshot agrees on a fresh read.
    let resp = app
        .oneshot(get(format!("/api/accounts/{account_id}")))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["monthly_fee"], 3477);
}

#[tokio::test]
async fn should_reject_duplicate_service_category() {
    let app = app().await;
    let account_id = register_electrician(&app).await;

    app.clone()
        .oneshot(post_json(
            format!("/api/accounts/{account_id}/services"),
            r#"{"category":"Plumber"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .oneshot(post_json(
            format!("/api/accounts/{account_id}/services"),
            r#"{"category":"Plumber"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn should_refuse_to_remove_the_primary_category() {
    let app = app().await;
    let account_id = register_electrician(&app).await;

    let resp = app
        .clone()
        .oneshot(delete(format!(
            "/api/accounts/{account_id}/services/Electrician"
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // The fee is untouched.
    let resp = app
        .oneshot(get(format!("/api/accounts/{account_id}")))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["monthly_fee"], 2977);
}

#[tokio::test]
async fn should_reject_removal_of_unlisted_category() {
    let app = app().await;
    let account_id = register_electrician(&app).await;

    let resp = app
        .oneshot(delete(format!(
            "/api/accounts/{account_id}/services/Roofer"
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn should_surface_similar_category_warning() {
    let app = app().await;
    let account_id = register_electrician(&app).await;

    app.clone()
        .oneshot(post_json(
            format!("/api/accounts/{account_id}/services"),
            r#"{"category":"Plumber"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .oneshot(post_json(
            format!("/api/accounts/{account_id}/services"),
            r#"{"category":"Plumbers"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    // The add went through, with the warning riding along.
    assert_eq!(body["account"]["monthly_fee"], 3977);
    assert_eq!(body["warning"]["proposed"], "Plumbers");
    assert_eq!(body["warning"]["existing"], "Plumber");
}

// ---------------------------------------------------------------------------
// Fee override & recompute
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_apply_and_clear_fee_override() {
    let app = app().await;
    let account_id = register_electrician(&app).await;

    let resp = app
        .clone()
        .oneshot(put_json(
            format!("/api/accounts/{account_id}/fee-override"),
            r#"{"amount":"19.99"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["monthly_fee"], 1999);

    let resp = app
        .oneshot(put_json(
            format!("/api/accounts/{account_id}/fee-override"),
            r#"{"amount":null}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["monthly_fee"], 2977);
}

#[tokio::test]
async fn should_reject_malformed_override_amount() {
    let app = app().await;
    let account_id = register_electrician(&app).await;

    let resp = app
        .oneshot(put_json(
            format!("/api/accounts/{account_id}/fee-override"),
            r#"{"amount":"$19.99"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_answer_recompute_with_consistent_snapshot() {
    let app = app().await;
    let account_id = register_electrician(&app).await;

    let resp = app
        .oneshot(post_json(
            format!("/api/accounts/{account_id}/fee/recompute"),
            "{}",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["monthly_fee"], 2977);
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_browse_the_service_taxonomy() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(get("/api/catalog/sections"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body, serde_json::json!(["build", "design", "finance"]));

    let resp = app
        .clone()
        .oneshot(get("/api/catalog/build/categories"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(
        body.as_array()
            .unwrap()
            .iter()
            .any(|c| c == "Electricians")
    );

    let resp = app
        .clone()
        .oneshot(get("/api/catalog/build/Plumbers/subcategories"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(get("/api/catalog/plumbing/categories"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Audit trail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_record_account_events_in_the_audit_log() {
    let app = app().await;
    let account_id = register_electrician(&app).await;

    app.clone()
        .oneshot(post_json(
            format!("/api/accounts/{account_id}/services"),
            r#"{"category":"Plumber"}"#,
        ))
        .await
        .unwrap();

    // The audit task persists asynchronously; poll briefly.
    let mut recorded = Vec::new();
    for _ in 0..50 {
        let resp = app
            .clone()
            .oneshot(get(format!("/api/accounts/{account_id}/events")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        recorded = body.as_array().unwrap().clone();
        if recorded.len() >= 2 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    let types: Vec<&str> = recorded
        .iter()
        .map(|e| e["event_type"].as_str().unwrap())
        .collect();
    assert!(types.contains(&"account_registered"), "missing registration event: {types:?}");
    assert!(types.contains(&"category_added"), "missing category event: {types:?}");
}
