use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Serialize;
use ukef_acbs::AcbsHttpClient;

use crate::state::AppState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub acbs: HealthCheck,
    pub checked_at: String,
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let acbs = acbs_check(&state.acbs_client).await;
    let ready = acbs.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "ukef-server runtime initialized".to_string(),
        },
        acbs,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

async fn acbs_check(client: &AcbsHttpClient) -> HealthCheck {
    match client.probe().await {
        Ok(status) => HealthCheck {
            status: "ready",
            detail: format!("ACBS answered with HTTP {status}"),
        },
        Err(error) => HealthCheck { status: "degraded", detail: error.to_string() },
    }
}
