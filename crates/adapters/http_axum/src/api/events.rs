//! JSON REST handlers for the account event log.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use tradehub_app::ports::{AccountRepository, CategoryCatalog, EventPublisher, EventStore};
use tradehub_domain::error::{TradeHubError, ValidationError};
use tradehub_domain::event::AccountEvent;
use tradehub_domain::id::AccountId;

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 50;

/// Query string for event listings.
#[derive(Deserialize)]
pub struct EventsQuery {
    pub limit: Option<usize>,
}

/// Possible responses from the event listing endpoints.
pub enum EventsResponse {
    Ok(Json<Vec<AccountEvent>>),
}

impl IntoResponse for EventsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/events`
pub async fn recent<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
    Query(query): Query<EventsQuery>,
) -> Result<EventsResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let events = state.event_store.get_recent(limit).await?;
    Ok(EventsResponse::Ok(Json(events)))
}

/// `GET /api/accounts/{id}/events`
pub async fn by_account<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
    Path(id): Path<String>,
    Query(query): Query<EventsQuery>,
) -> Result<EventsResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    let account_id = AccountId::from_str(&id)
        .map_err(|_| TradeHubError::from(ValidationError::InvalidId(id.clone())))?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let events = state.event_store.find_by_account(account_id, limit).await?;
    Ok(EventsResponse::Ok(Json(events)))
}
