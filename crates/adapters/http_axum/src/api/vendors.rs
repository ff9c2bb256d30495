//! JSON handlers for vendors.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use sweetshop_app::ports::{SweetRepository, VendorRepository, VendorSweetRepository};
use sweetshop_domain::error::{SweetShopError, ValidationError};
use sweetshop_domain::id::{SweetId, VendorId, VendorSweetId};
use sweetshop_domain::sweet::Sweet;
use sweetshop_domain::vendor::{NewVendor, Vendor, VendorDetail};
use sweetshop_domain::vendor_sweet::{Price, SweetOffering};

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

const ENTITY: &str = "Vendor";

/// Request body for creating a vendor.
#[derive(Deserialize)]
pub struct CreateVendorRequest {
    pub name: Option<String>,
}

/// One entry of `vendor_sweets` in the vendor detail body.
#[derive(Debug, Serialize)]
pub struct OfferingBody {
    pub id: VendorSweetId,
    pub price: Price,
    pub sweet: Sweet,
    pub sweet_id: SweetId,
    pub vendor_id: VendorId,
}

impl From<SweetOffering> for OfferingBody {
    fn from(offering: SweetOffering) -> Self {
        let SweetOffering { vendor_sweet, sweet } = offering;
        Self {
            id: vendor_sweet.id,
            price: vendor_sweet.price,
            sweet,
            sweet_id: vendor_sweet.sweet_id,
            vendor_id: vendor_sweet.vendor_id,
        }
    }
}

/// Vendor together with the sweets it sells.
#[derive(Debug, Serialize)]
pub struct VendorDetailBody {
    pub id: VendorId,
    pub name: String,
    pub vendor_sweets: Vec<OfferingBody>,
}

impl From<VendorDetail> for VendorDetailBody {
    fn from(detail: VendorDetail) -> Self {
        Self {
            id: detail.vendor.id,
            name: detail.vendor.name,
            vendor_sweets: detail.offerings.into_iter().map(OfferingBody::from).collect(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Vendor>>),
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
    Ok(Json<VendorDetailBody>),
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
    Created(Json<Vendor>),
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

/// `GET /vendors`
pub async fn list<SR, VR, OR>(
    State(state): State<AppState<SR, VR, OR>>,
) -> Result<ListResponse, ApiError>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    let vendors = state.vendor_service.list_vendors().await?;
    Ok(ListResponse::Ok(Json(vendors)))
}

/// `GET /vendors/{id}`
pub async fn get<SR, VR, OR>(
    State(state): State<AppState<SR, VR, OR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    let vendor_id: VendorId = parse_id(&id, ENTITY)?;
    let detail = state.vendor_service.get_vendor_detail(vendor_id).await?;
    Ok(GetResponse::Ok(Json(detail.into())))
}

/// `POST /vendors`
pub async fn create<SR, VR, OR>(
    State(state): State<AppState<SR, VR, OR>>,
    payload: Result<Json<CreateVendorRequest>, JsonRejection>,
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

    let created = state
        .vendor_service
        .create_vendor(NewVendor::new(name)?)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /vendors/{id}`
pub async fn delete<SR, VR, OR>(
    State(state): State<AppState<SR, VR, OR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: SweetRepository + Send + Sync + 'static,
    VR: VendorRepository + Send + Sync + 'static,
    OR: VendorSweetRepository + Send + Sync + 'static,
{
    let vendor_id: VendorId = parse_id(&id, ENTITY)?;
    state.vendor_service.delete_vendor(vendor_id).await?;
    Ok(DeleteResponse::NoContent)
}
