//! The HTTP boundary's error mapping.
//!
//! | error | status |
//! |---|---|
//! | `AcbsError::ResourceNotFound` | 404 |
//! | `AcbsError::BadRequest` | 400 |
//! | `AcbsError::UnexpectedUpstream` | 500 |
//! | request validation | 400 |
//! | missing or wrong API key | 401 |
//! | id token acquisition | 500 |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use ukef_acbs::AuthError;
use ukef_core::errors::AcbsError;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Upstream(#[from] AcbsError),
    #[error("{0}")]
    Validation(String),
    #[error("missing or invalid api key")]
    Unauthorized,
    #[error("{0}")]
    Token(#[from] AuthError),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(AcbsError::ResourceNotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Upstream(AcbsError::BadRequest { .. }) | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Upstream(AcbsError::UnexpectedUpstream { .. }) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(describe_validation_errors(&errors))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let reason = status.canonical_reason().unwrap_or("Error").to_string();

        let body = match &self {
            Self::Upstream(upstream @ AcbsError::BadRequest { .. }) => ErrorBody {
                status_code: status.as_u16(),
                message: upstream.message().to_string(),
                error: upstream.error_body().map_or(reason, ToString::to_string),
            },
            Self::Upstream(AcbsError::UnexpectedUpstream { .. }) | Self::Token(_) => {
                error!(
                    event_name = "api.request.failed",
                    error = %self,
                    "request failed with an internal error"
                );
                ErrorBody {
                    status_code: status.as_u16(),
                    message: "Internal server error".to_string(),
                    error: reason,
                }
            }
            Self::Unauthorized => {
                warn!(event_name = "api.request.unauthorized", "rejected request without a valid api key");
                ErrorBody { status_code: status.as_u16(), message: reason.clone(), error: reason }
            }
            Self::Upstream(_) | Self::Validation(_) => ErrorBody {
                status_code: status.as_u16(),
                message: self.to_string(),
                error: reason,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Flattens field errors into `field: message` pairs, sorted for stable output.
fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: failed `{}` check", error.code),
            })
        })
        .collect();

    for (field, kind) in errors.errors() {
        if let validator::ValidationErrorsKind::Struct(nested) = kind {
            parts.push(format!("{field}: {}", describe_validation_errors(nested)));
        }
        if let validator::ValidationErrorsKind::List(items) = kind {
            for (index, nested) in items {
                parts.push(format!("{field}[{index}]: {}", describe_validation_errors(nested)));
            }
        }
    }

    parts.sort();
    if parts.is_empty() {
        return "request validation failed".to_string();
    }
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::{json, Value};
    use ukef_acbs::AuthError;
    use ukef_core::errors::{AcbsError, UpstreamBody, UpstreamFailure};

    use super::ApiError;

    async fn render(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn not_found_maps_to_404_and_keeps_the_cause() {
        let upstream = AcbsError::not_found("Facility with identifier 0030000321 was not found by ACBS.");
        let error = ApiError::from(upstream);
        assert!(error.source().is_some());

        let (status, body) = render(error).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({
                "statusCode": 404,
                "message": "Facility with identifier 0030000321 was not found by ACBS.",
                "error": "Not Found"
            })
        );
    }

    #[tokio::test]
    async fn bad_request_surfaces_the_upstream_error_body() {
        let error = ApiError::from(AcbsError::BadRequest {
            message: "Failed to create a deal with identifier 0020900035.".to_string(),
            error_body: "Currency is invalid".to_string(),
            inner: Some(UpstreamFailure::Status {
                status: 400,
                body: UpstreamBody::Text("Currency is invalid".to_string()),
            }),
        });

        let (status, body) = render(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Currency is invalid");
        assert_eq!(body["message"], "Failed to create a deal with identifier 0020900035.");
    }

    #[tokio::test]
    async fn unexpected_upstream_and_token_failures_are_internal_errors() {
        let (status, body) = render(ApiError::from(AcbsError::unexpected("boom", None))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");

        let (status, _) = render(ApiError::from(AuthError::MissingToken)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unauthorized_is_401() {
        let (status, body) = render(ApiError::Unauthorized).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["statusCode"], 401);
    }
}
