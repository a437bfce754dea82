//! Public REST surface, mounted under `/api/v1`.

use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;
use ukef_core::domain::{party_identifier, ukef_identifier};
use validator::Validate;

use crate::health::health;
use crate::middleware::{correlation_id, request_span, require_api_key};
use crate::state::AppState;

mod covenants;
mod deals;
mod facilities;
mod fees;
mod loans;
mod parties;
mod transactions;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(deals::router())
        .merge(facilities::router())
        .merge(covenants::router())
        .merge(fees::router())
        .merge(loans::router())
        .merge(transactions::router())
        .merge(parties::router())
        .route_layer(from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(from_fn(correlation_id))
        .with_state(state)
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DealPath {
    #[validate(custom(function = "ukef_identifier"))]
    pub deal_identifier: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FacilityPath {
    #[validate(custom(function = "ukef_identifier"))]
    pub facility_identifier: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FacilityLoanPath {
    #[validate(custom(function = "ukef_identifier"))]
    pub facility_identifier: String,
    #[validate(custom(function = "ukef_identifier"))]
    pub loan_identifier: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FacilityBundlePath {
    #[validate(custom(function = "ukef_identifier"))]
    pub facility_identifier: String,
    #[validate(custom(function = "ukef_identifier"))]
    pub bundle_identifier: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PartyPath {
    #[validate(custom(function = "party_identifier"))]
    pub party_identifier: String,
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, HeaderMap, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;
    use wiremock::MockServer;

    use super::router;
    use crate::state::test_support::state_for;

    pub struct TestResponse {
        pub status: StatusCode,
        pub headers: HeaderMap,
        pub body: Value,
    }

    pub fn app(server: &MockServer) -> Router {
        router(state_for(server))
    }

    pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.oneshot(request.body(body).expect("request")).await.expect("response");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let body =
            if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).expect("json") };
        TestResponse { status, headers, body }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use secrecy::SecretString;
    use serde_json::json;
    use tower::ServiceExt;
    use ukef_acbs::{AcbsGateway, AcbsHttpClient, StaticIdTokenProvider};
    use ukef_core::defaults::DefaultValues;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::router;
    use super::test_support::{app, send};
    use crate::state::AppState;

    fn state_with_api_key(server: &MockServer, api_key: &str) -> AppState {
        let client =
            AcbsHttpClient::with_base_url(&server.uri(), Duration::from_secs(5)).expect("client");
        let defaults = Arc::new(DefaultValues::default());
        AppState::new(
            AcbsGateway::new(client.clone(), "DCIS"),
            client,
            Arc::new(StaticIdTokenProvider::new(SecretString::from("id-token".to_string()))),
            defaults,
            Some(SecretString::from(api_key.to_string())),
        )
    }

    #[tokio::test]
    async fn api_routes_require_the_configured_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        let app = router(state_with_api_key(&server, "secret-key"));

        let missing = send(app.clone(), Method::GET, "/api/v1/facilities/0030000321/loans", None).await;
        assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

        let request = Request::builder()
            .uri("/api/v1/facilities/0030000321/loans")
            .header("x-api-key", "secret-key")
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_is_open_even_with_an_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

        let response =
            send(router(state_with_api_key(&server, "secret-key")), Method::GET, "/health", None).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["acbs"]["status"], "ready");
    }

    #[tokio::test]
    async fn correlation_id_is_echoed_or_generated() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

        let request = Request::builder()
            .uri("/health")
            .header("x-correlation-id", "corr-123")
            .body(Body::empty())
            .expect("request");
        let response = app(&server).oneshot(request).await.expect("response");
        assert_eq!(response.headers()["x-correlation-id"], "corr-123");

        let generated = send(app(&server), Method::GET, "/health", None).await;
        let value = generated.headers["x-correlation-id"].to_str().expect("ascii");
        assert_eq!(value.len(), 36);
    }

    #[tokio::test]
    async fn malformed_identifiers_are_rejected_before_calling_acbs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let response = send(app(&server), Method::GET, "/api/v1/facilities/123", None).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["statusCode"], 400);
    }
}
