//! JSON handlers for sweets.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use sweetshop_app::ports::{SweetRepository, VendorRepository, VendorSweetRepository};
use sweetshop_domain::error::{SweetShopError, ValidationError};
use sweetshop_domain::id::SweetId;
use sweetshop_domain::sweet::{NewSweet, Sweet};

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

const ENTITY: &str = "Sweet";

/// Request body for creating a sweet.
#[derive(Deserialize)]
pub struct CreateSweetRequest {
    pub name: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Sweet>>),
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
    Ok(Json<Sweet>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Sweet>),
}

impl IntoResponse for CreateResponse {
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

/// `GET /sweets`
pub async fn list<SR, VR, OR>(
    State(state): State<AppState<SR, VR, OR>>,
) -> Result<ListResponse, ApiError>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    let sweets = state.sweet_service.list_sweets().await?;
    Ok(ListResponse::Ok(Json(sweets)))
}

/// `GET /sweets/{id}`
pub async fn get<SR, VR, OR>(
    State(state): State<AppState<SR, VR, OR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    let sweet_id: SweetId = parse_id(&id, ENTITY)?;
    let sweet = state.sweet_service.get_sweet(sweet_id).await?;
    Ok(GetResponse::Ok(Json(sweet)))
}

/// `POST /sweets`
pub async fn create<SR, VR, OR>(
    State(state): State<AppState<SR, VR, OR>>,
    payload: Result<Json<CreateSweetRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let name = req
        .name
        .ok_or(SweetShopError::Validation(ValidationError::MissingField("name")))?;

    let created = state.sweet_service.create_sweet(NewSweet::new(name)?).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /sweets/{id}`
pub async fn delete<SR, VR, OR>(
    State(state): State<AppState<SR, VR, OR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    let sweet_id: SweetId = parse_id(&id, ENTITY)?;
    state.sweet_service.delete_sweet(sweet_id).await?;
    Ok(DeleteResponse::NoContent)
}
