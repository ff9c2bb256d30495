//! JSON handlers for vendor/sweet associations.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use sweetshop_app::ports::{SweetRepository, VendorRepository, VendorSweetRepository};
use sweetshop_domain::error::SweetShopError;
use sweetshop_domain::id::{SweetId, VendorId, VendorSweetId};
use sweetshop_domain::sweet::Sweet;
use sweetshop_domain::vendor::Vendor;
use sweetshop_domain::vendor_sweet::{NewVendorSweet, Price, VendorSweet, VendorSweetDetail};

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

const ENTITY: &str = "VendorSweet";

/// Request body for creating an association.
///
/// Every field is optional at the parsing stage so that an absent field is
/// reported as a validation failure rather than a body rejection.
#[derive(Deserialize)]
pub struct CreateVendorSweetRequest {
    pub price: Option<i64>,
    pub vendor_id: Option<i64>,
    pub sweet_id: Option<i64>,
}

/// Body returned after a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedBody {
    pub id: VendorSweetId,
    pub price: Price,
    pub sweet: Sweet,
    pub sweet_id: SweetId,
    pub vendor: Vendor,
    pub vendor_id: VendorId,
}

impl From<VendorSweetDetail> for CreatedBody {
    fn from(detail: VendorSweetDetail) -> Self {
        let VendorSweetDetail {
            vendor_sweet,
            vendor,
            sweet,
        } = detail;
        Self {
            id: vendor_sweet.id,
            price: vendor_sweet.price,
            sweet,
            sweet_id: vendor_sweet.sweet_id,
            vendor,
            vendor_id: vendor_sweet.vendor_id,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<VendorSweet>>),
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
    Ok(Json<VendorSweet>),
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
    Created(Json<CreatedBody>),
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

/// `GET /vendor_sweets`
pub async fn list<SR, VR, OR>(
    State(state): State<AppState<SR, VR, OR>>,
) -> Result<ListResponse, ApiError>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    let vendor_sweets = state.vendor_sweet_service.list_vendor_sweets().await?;
    Ok(ListResponse::Ok(Json(vendor_sweets)))
}

/// `GET /vendor_sweets/{id}`
pub async fn get<SR, VR, OR>(
    State(state): State<AppState<SR, VR, OR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    let vendor_sweet_id: VendorSweetId = parse_id(&id, ENTITY)?;
    let vendor_sweet = state
        .vendor_sweet_service
        .get_vendor_sweet(vendor_sweet_id)
        .await?;
    Ok(GetResponse::Ok(Json(vendor_sweet)))
}

/// `POST /vendor_sweets`
///
/// Field presence and price are validated first (400), then both parents are
/// resolved (404), and only then is the row written.
pub async fn create<SR, VR, OR>(
    State(state): State<AppState<SR, VR, OR>>,
    payload: Result<Json<CreateVendorSweetRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let draft = NewVendorSweet::from_raw(req.price, req.vendor_id, req.sweet_id)
        .map_err(SweetShopError::from)?;

    let detail = state.vendor_sweet_service.create_vendor_sweet(draft).await?;
    Ok(CreateResponse::Created(Json(detail.into())))
}

/// `DELETE /vendor_sweets/{id}`
pub async fn delete<SR, VR, OR>(
    State(state): State<AppState<SR, VR, OR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    let vendor_sweet_id: VendorSweetId = parse_id(&id, ENTITY)?;
    state
        .vendor_sweet_service
        .delete_vendor_sweet(vendor_sweet_id)
        .await?;
    Ok(DeleteResponse::NoContent)
}
