use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use ukef_core::domain::transaction::CreateFacilityActivationRequest;

use super::{FacilityBundlePath, FacilityPath};
use crate::error::ApiError;
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/facilities/{facilityIdentifier}/activation-transactions",
            post(create_facility_activation),
        )
        .route(
            "/facilities/{facilityIdentifier}/activation-transactions/{bundleIdentifier}",
            get(get_facility_activation),
        )
        .route(
            "/facilities/{facilityIdentifier}/loan-transactions/{bundleIdentifier}",
            get(get_loan_transaction),
        )
}

async fn create_facility_activation(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
    ValidatedJson(request): ValidatedJson<CreateFacilityActivationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created =
        state.transactions.create_facility_activation(&path.facility_identifier, &request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_facility_activation(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityBundlePath>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction = state
        .transactions
        .get_facility_activation(&path.facility_identifier, &path.bundle_identifier)
        .await?;
    Ok(Json(transaction))
}

async fn get_loan_transaction(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityBundlePath>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction = state
        .transactions
        .get_loan_transaction(&path.facility_identifier, &path.bundle_identifier)
        .await?;
    Ok(Json(transaction))
}
