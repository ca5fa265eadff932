//! JSON REST handlers for the service taxonomy.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use tradehub_app::ports::{AccountRepository, CategoryCatalog, EventPublisher, EventStore};
use tradehub_domain::error::TradeHubError;
use tradehub_domain::section::MainSection;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the sections endpoint.
pub enum SectionsResponse {
    Ok(Json<Vec<MainSection>>),
}

impl IntoResponse for SectionsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the name-listing endpoints.
pub enum NamesResponse {
    Ok(Json<Vec<String>>),
}

impl IntoResponse for NamesResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_section(section: &str) -> Result<MainSection, ApiError> {
    MainSection::from_str(section).map_err(|err| ApiError::from(TradeHubError::from(err)))
}

/// `GET /api/catalog/sections`
pub async fn sections<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
) -> Result<SectionsResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    Ok(SectionsResponse::Ok(Json(state.catalog_service.sections())))
}

/// `GET /api/catalog/{section}/categories`
pub async fn categories<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
    Path(section): Path<String>,
) -> Result<NamesResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    let section = parse_section(&section)?;
    Ok(NamesResponse::Ok(Json(
        state.catalog_service.categories(section),
    )))
}

/// `GET /api/catalog/{section}/{category}/subcategories`
pub async fn subcategories<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
    Path((section, category)): Path<(String, String)>,
) -> Result<NamesResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    let section = parse_section(&section)?;
    let subcategories = state.catalog_service.subcategories(section, &category)?;
    Ok(NamesResponse::Ok(Json(subcategories)))
}
