use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use ukef_core::domain::covenant::{CreateCovenantRequest, UpdateCovenantsRequest};

use super::FacilityPath;
use crate::error::ApiError;
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/facilities/{facilityIdentifier}/covenants",
        get(get_covenants).post(create_covenant).patch(update_covenants),
    )
}

async fn get_covenants(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.covenants.get_covenants_for_facility(&path.facility_identifier).await?))
}

async fn create_covenant(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
    ValidatedJson(request): ValidatedJson<CreateCovenantRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created =
        state.covenants.create_covenant_for_facility(&path.facility_identifier, &request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_covenants(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
    ValidatedJson(request): ValidatedJson<UpdateCovenantsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.covenants.update_covenants_for_facility(&path.facility_identifier, &request).await?))
}
