use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use ukef_core::domain::deal::CreateDealRequest;
use ukef_core::domain::guarantee::CreateDealGuaranteeRequest;
use ukef_core::domain::investor::CreateDealInvestorRequest;

use super::DealPath;
use crate::error::ApiError;
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/deals", post(create_deal))
        .route("/deals/{dealIdentifier}", get(get_deal))
        .route("/deals/{dealIdentifier}/guarantees", get(get_deal_guarantees).post(create_deal_guarantee))
        .route("/deals/{dealIdentifier}/investors", get(get_deal_investors).post(create_deal_investor))
}

async fn get_deal(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<DealPath>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.deals.get_deal(&path.deal_identifier).await?))
}

async fn create_deal(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateDealRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok((StatusCode::CREATED, Json(state.deals.create_deal(&request).await?)))
}

async fn get_deal_guarantees(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<DealPath>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.guarantees.get_guarantees_for_deal(&path.deal_identifier).await?))
}

async fn create_deal_guarantee(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<DealPath>,
    ValidatedJson(request): ValidatedJson<CreateDealGuaranteeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.guarantees.create_guarantee_for_deal(&path.deal_identifier, &request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_deal_investors(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<DealPath>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.investors.get_investors_for_deal(&path.deal_identifier).await?))
}

async fn create_deal_investor(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<DealPath>,
    ValidatedJson(request): ValidatedJson<CreateDealInvestorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.investors.create_investor_for_deal(&path.deal_identifier, &request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::routes::test_support::{app, send};

    fn create_deal_body() -> serde_json::Value {
        json!({
            "dealIdentifier": "0020900035",
            "currency": "GBP",
            "dealValue": 1500000,
            "guaranteeCommencementDate": "2023-04-19",
            "obligorPartyIdentifier": "00291013",
            "obligorName": "ACME TRADING LIMITED",
            "obligorIndustryClassification": "0116"
        })
    }

    #[tokio::test]
    async fn get_deal_maps_the_acbs_deal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Portfolio/E1/Deal/0020900035"))
            .and(header("authorization", "Bearer test-id-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "PortfolioIdentifier": "E1",
                "DealIdentifier": "0020900035",
                "Currency": { "CurrencyCode": "GBP" },
                "OriginalEffectiveDate": "2023-04-19T00:00:00Z",
                "LimitAmount": 1500000,
                "IndustryClassification": { "IndustryClassificationCode": "0116" },
                "BorrowerParty": { "PartyIdentifier": "00291013", "PartyName1": "ACME TRADING LIMITED" }
            })))
            .mount(&server)
            .await;

        let response = send(app(&server), Method::GET, "/api/v1/deals/0020900035", None).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["dealIdentifier"], "0020900035");
        assert_eq!(response.body["guaranteeCommencementDate"], "2023-04-19");
        assert_eq!(response.body["obligorPartyIdentifier"], "00291013");
    }

    #[tokio::test]
    async fn missing_deal_is_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_string("The deal not found or the user does not have access to it."))
            .mount(&server)
            .await;

        let response = send(app(&server), Method::GET, "/api/v1/deals/0020900035", None).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(
            response.body["message"],
            "Deal with identifier 0020900035 was not found by ACBS."
        );
    }

    #[tokio::test]
    async fn create_deal_posts_the_wire_request_and_returns_201() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/Portfolio/E1/Deal"))
            .and(body_partial_json(json!({
                "DealIdentifier": "0020900035",
                "Currency": { "CurrencyCode": "GBP" }
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let response =
            send(app(&server), Method::POST, "/api/v1/deals", Some(create_deal_body())).await;

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body, json!({ "dealIdentifier": "0020900035" }));
    }

    #[tokio::test]
    async fn invalid_deal_body_is_400_without_calling_acbs() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(201)).expect(0).mount(&server).await;
        let mut body = create_deal_body();
        body["guaranteeCommencementDate"] = json!("2023-4-19");

        let response = send(app(&server), Method::POST, "/api/v1/deals", Some(body)).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn null_deal_guarantees_are_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Portfolio/E1/Deal/0020900035/DealGuarantee"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let response =
            send(app(&server), Method::GET, "/api/v1/deals/0020900035/guarantees", None).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn upstream_rejection_of_a_deal_investor_is_400_with_the_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/Portfolio/E1/Deal/0020900035/DealParty"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "Lender type invalid" })))
            .mount(&server)
            .await;

        let response = send(
            app(&server),
            Method::POST,
            "/api/v1/deals/0020900035/investors",
            Some(json!({ "effectiveDate": "2023-04-19", "currency": "GBP" })),
        )
        .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], r#"{"error":"Lender type invalid"}"#);
    }
}
