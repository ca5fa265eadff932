//! JSON REST handlers for professional accounts.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use tradehub_app::ports::{AccountRepository, CategoryCatalog, EventPublisher, EventStore};
use tradehub_app::services::account_service::NewProfessional;
use tradehub_domain::account::ProfessionalAccount;
use tradehub_domain::category::SimilarCategory;
use tradehub_domain::error::{TradeHubError, ValidationError};
use tradehub_domain::id::AccountId;
use tradehub_domain::money::Money;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a professional account.
///
/// The aliases accept the legacy camelCase field names still sent by older
/// clients; everything past this struct is canonical snake_case.
#[derive(Deserialize)]
pub struct RegisterAccountRequest {
    pub email: String,
    #[serde(alias = "displayName")]
    pub display_name: String,
    #[serde(alias = "serviceCategory", alias = "primaryServiceCategory")]
    pub primary_category: String,
    #[serde(default, alias = "additionalServiceCategories")]
    pub additional_categories: Vec<String>,
}

/// Request body for adding a service category.
#[derive(Deserialize)]
pub struct AddServiceRequest {
    #[serde(alias = "serviceCategory")]
    pub category: String,
}

/// Request body for setting or clearing the fee override.
///
/// `amount` is a decimal string such as `"19.99"`; `null` (or omitting the
/// field) clears the override.
#[derive(Deserialize)]
pub struct FeeOverrideRequest {
    #[serde(default, alias = "overrideAmount")]
    pub amount: Option<String>,
}

/// Response body for a service addition: the updated account plus the
/// optional near-duplicate warning.
#[derive(Serialize)]
pub struct ServiceAdditionBody {
    pub account: ProfessionalAccount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<SimilarCategory>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<ProfessionalAccount>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<ProfessionalAccount>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the register endpoint.
pub enum RegisterResponse {
    Created(Json<ProfessionalAccount>),
}

impl IntoResponse for RegisterResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the add-service endpoint.
pub enum AddServiceResponse {
    Ok(Json<ServiceAdditionBody>),
}

impl IntoResponse for AddServiceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from endpoints returning the updated account.
pub enum UpdatedResponse {
    Ok(Json<ProfessionalAccount>),
}

impl IntoResponse for UpdatedResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_account_id(id: &str) -> Result<AccountId, ApiError> {
    AccountId::from_str(id)
        .map_err(|_| ApiError::from(TradeHubError::from(ValidationError::InvalidId(id.to_string()))))
}

/// `GET /api/accounts`
pub async fn list<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
) -> Result<ListResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    let accounts = state.account_service.list_accounts().await?;
    Ok(ListResponse::Ok(Json(accounts)))
}

/// `GET /api/accounts/{id}`
pub async fn get<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    let account_id = parse_account_id(&id)?;
    let account = state.account_service.get_account(account_id).await?;
    Ok(GetResponse::Ok(Json(account)))
}

/// `POST /api/accounts`
pub async fn register<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
    Json(req): Json<RegisterAccountRequest>,
) -> Result<RegisterResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    let account = state
        .account_service
        .register_professional(NewProfessional {
            email: req.email,
            display_name: req.display_name,
            primary_category: req.primary_category,
            additional_categories: req.additional_categories,
        })
        .await?;
    Ok(RegisterResponse::Created(Json(account)))
}

/// `DELETE /api/accounts/{id}`
pub async fn delete<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    let account_id = parse_account_id(&id)?;
    state.account_service.delete_account(account_id).await?;
    Ok(DeleteResponse::NoContent)
}

/// `POST /api/accounts/{id}/services`
pub async fn add_service<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
    Path(id): Path<String>,
    Json(req): Json<AddServiceRequest>,
) -> Result<AddServiceResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    let account_id = parse_account_id(&id)?;
    let addition = state
        .account_service
        .add_service(account_id, req.category)
        .await?;
    Ok(AddServiceResponse::Ok(Json(ServiceAdditionBody {
        account: addition.account,
        warning: addition.warning,
    })))
}

/// `DELETE /api/accounts/{id}/services/{category}`
pub async fn remove_service<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
    Path((id, category)): Path<(String, String)>,
) -> Result<UpdatedResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    let account_id = parse_account_id(&id)?;
    let account = state
        .account_service
        .remove_service(account_id, &category)
        .await?;
    Ok(UpdatedResponse::Ok(Json(account)))
}

/// `PUT /api/accounts/{id}/fee-override`
pub async fn set_fee_override<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
    Path(id): Path<String>,
    Json(req): Json<FeeOverrideRequest>,
) -> Result<UpdatedResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    let account_id = parse_account_id(&id)?;
    let amount = req
        .amount
        .as_deref()
        .map(Money::from_str)
        .transpose()
        .map_err(TradeHubError::from)?;
    let account = state
        .account_service
        .set_fee_override(account_id, amount)
        .await?;
    Ok(UpdatedResponse::Ok(Json(account)))
}

/// `POST /api/accounts/{id}/fee/recompute`
pub async fn recompute_fee<AR, EP, ES, CC>(
    State(state): State<AppState<AR, EP, ES, CC>>,
    Path(id): Path<String>,
) -> Result<UpdatedResponse, ApiError>
where
    AR: AccountRepository + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
    ES: EventStore + Send + Sync + 'static,
    CC: CategoryCatalog + Send + Sync + 'static,
{
    let account_id = parse_account_id(&id)?;
    let account = state.account_service.recompute_fee(account_id).await?;
    Ok(UpdatedResponse::Ok(Json(account)))
}
