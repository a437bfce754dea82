use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use ukef_core::domain::fee::{CreateFixedFeeRequest, FixedFeeAmountAmendment};

use super::FacilityPath;
use crate::error::ApiError;
use crate::extract::{ValidatedJson, ValidatedJsonList, ValidatedPath};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/facilities/{facilityIdentifier}/fixed-fees",
            get(get_fixed_fees).post(create_fixed_fee),
        )
        .route(
            "/facilities/{facilityIdentifier}/fixed-fees/amendments/amount",
            post(amend_fixed_fee_amounts),
        )
}

async fn get_fixed_fees(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.fixed_fees.get_fixed_fees_for_facility(&path.facility_identifier).await?))
}

async fn create_fixed_fee(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
    ValidatedJson(request): ValidatedJson<CreateFixedFeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created =
        state.fixed_fees.create_fixed_fee_for_facility(&path.facility_identifier, &request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn amend_fixed_fee_amounts(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
    ValidatedJsonList(amendments): ValidatedJsonList<FixedFeeAmountAmendment>,
) -> Result<impl IntoResponse, ApiError> {
    let created =
        state.fixed_fees.amend_fixed_fee_amounts(&path.facility_identifier, &amendments).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
