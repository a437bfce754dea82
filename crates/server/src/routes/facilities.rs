use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use ukef_core::domain::facility::{CreateFacilityRequest, FacilityFields, UpdateFacilityQuery};
use ukef_core::domain::guarantee::CreateFacilityGuaranteeRequest;
use ukef_core::domain::investor::CreateFacilityInvestorRequest;

use super::FacilityPath;
use crate::error::ApiError;
use crate::extract::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/facilities", post(create_facility))
        .route("/facilities/{facilityIdentifier}", get(get_facility).put(update_facility))
        .route(
            "/facilities/{facilityIdentifier}/guarantees",
            get(get_facility_guarantees).post(create_facility_guarantee),
        )
        .route(
            "/facilities/{facilityIdentifier}/investors",
            get(get_facility_investors).post(create_facility_investor),
        )
}

async fn get_facility(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.facilities.get_facility(&path.facility_identifier).await?))
}

async fn create_facility(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateFacilityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok((StatusCode::CREATED, Json(state.facilities.create_facility(&request).await?)))
}

async fn update_facility(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
    ValidatedQuery(query): ValidatedQuery<UpdateFacilityQuery>,
    ValidatedJson(fields): ValidatedJson<FacilityFields>,
) -> Result<impl IntoResponse, ApiError> {
    let updated =
        state.facilities.update_facility(&path.facility_identifier, query.op, &fields).await?;
    Ok(Json(updated))
}

async fn get_facility_guarantees(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.guarantees.get_guarantees_for_facility(&path.facility_identifier).await?))
}

async fn create_facility_guarantee(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
    ValidatedJson(request): ValidatedJson<CreateFacilityGuaranteeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created =
        state.guarantees.create_guarantee_for_facility(&path.facility_identifier, &request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_facility_investors(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.investors.get_investors_for_facility(&path.facility_identifier).await?))
}

async fn create_facility_investor(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
    ValidatedJson(request): ValidatedJson<CreateFacilityInvestorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created =
        state.investors.create_investor_for_facility(&path.facility_identifier, &request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
