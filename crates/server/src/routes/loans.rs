use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use ukef_core::domain::loan::{
    CreateLoanRequest, UpdateLoanAmountRequest, UpdateLoanExpiryDateRequest,
};

use super::{FacilityLoanPath, FacilityPath};
use crate::error::ApiError;
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/facilities/{facilityIdentifier}/loans", get(get_loans).post(create_loan))
        .route(
            "/facilities/{facilityIdentifier}/loans/{loanIdentifier}",
            patch(amend_loan_expiry_date),
        )
        .route(
            "/facilities/{facilityIdentifier}/loans/{loanIdentifier}/amendments/amount",
            post(amend_loan_amount),
        )
}

async fn get_loans(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.loans.get_loans_for_facility(&path.facility_identifier).await?))
}

async fn create_loan(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityPath>,
    ValidatedJson(request): ValidatedJson<CreateLoanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.loans.create_loan(&path.facility_identifier, &request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn amend_loan_expiry_date(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityLoanPath>,
    ValidatedJson(request): ValidatedJson<UpdateLoanExpiryDateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let amended = state
        .loans
        .amend_loan_expiry_date(&path.facility_identifier, &path.loan_identifier, &request)
        .await?;
    Ok(Json(amended))
}

async fn amend_loan_amount(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<FacilityLoanPath>,
    ValidatedJson(request): ValidatedJson<UpdateLoanAmountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state
        .loans
        .amend_loan_amount(&path.facility_identifier, &path.loan_identifier, &request)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::routes::test_support::{app, send};

    fn create_loan_body() -> Value {
        json!({
            "borrowerPartyIdentifier": "00291013",
            "productTypeId": "250",
            "currency": "GBP",
            "amount": 250000,
            "issueDate": "2023-04-19",
            "expiryDate": "2024-04-19",
            "spreadRate": 1.5,
            "loanBillingFrequencyType": "Q"
        })
    }

    #[tokio::test]
    async fn loans_are_listed_with_their_balances() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Portfolio/E1/Facility/0030000321/Loan"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "PortfolioIdentifier": "E1",
                "LoanIdentifier": "0000000001",
                "ParentFacilityIdentifier": "0030000321",
                "PrimaryParty": { "PartyIdentifier": "00291013" },
                "Currency": { "CurrencyCode": "GBP" },
                "EffectiveDate": "2023-04-19T00:00:00Z",
                "MaturityDate": "2024-04-19T00:00:00Z",
                "PrincipalBalance": 250000,
                "ProductType": { "ProductTypeCode": "250" },
                "ProductGroup": { "ProductGroupCode": "BS" }
            }])))
            .mount(&server)
            .await;

        let response =
            send(app(&server), Method::GET, "/api/v1/facilities/0030000321/loans", None).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body[0]["loanIdentifier"], "0000000001");
        assert_eq!(response.body[0]["facilityIdentifier"], "0030000321");
        assert_eq!(response.body[0]["expiryDate"], "2024-04-19");
        assert_eq!(response.body[0]["principalBalance"], 250000.0);
        assert_eq!(response.body[0]["interestBalance"], 0.0);
    }

    #[tokio::test]
    async fn creating_a_loan_posts_a_new_loan_bundle() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/BundleInformation"))
            .and(body_partial_json(json!({
                "BundleMessageList": [{
                    "$type": "NewLoanRequest",
                    "FacilityIdentifier": "0030000321",
                    "BorrowerPartyIdentifier": "00291013"
                }]
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("bundleidentifier", "0000000042")
                    .insert_header("processing-warning", "Loan created in draft"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = send(
            app(&server),
            Method::POST,
            "/api/v1/facilities/0030000321/loans",
            Some(create_loan_body()),
        )
        .await;

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(
            response.body,
            json!({ "bundleIdentifier": "0000000042", "warningErrors": "Loan created in draft" })
        );
    }

    #[tokio::test]
    async fn expiry_amendment_replaces_the_maturity_date_on_the_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Portfolio/E1/Loan/0000000001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "LoanIdentifier": "0000000001",
                "MaturityDate": "2024-04-19T00:00:00Z",
                "RateSchedule": { "Kept": true }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/Portfolio/E1/Loan/0000000001"))
            .and(body_partial_json(json!({
                "MaturityDate": "2025-01-31T00:00:00Z",
                "RateSchedule": { "Kept": true }
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let response = send(
            app(&server),
            Method::PATCH,
            "/api/v1/facilities/0030000321/loans/0000000001",
            Some(json!({ "expiryDate": "2025-01-31" })),
        )
        .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({ "loanIdentifier": "0000000001" }));
    }

    #[tokio::test]
    async fn amount_amendment_of_a_missing_loan_is_404() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/BundleInformation"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Loan does not exist"))
            .mount(&server)
            .await;

        let response = send(
            app(&server),
            Method::POST,
            "/api/v1/facilities/0030000321/loans/0000000001/amendments/amount",
            Some(json!({ "effectiveDate": "2023-04-19", "amountAmendment": 1500 })),
        )
        .await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(
            response.body["message"],
            "Loan with identifier 0000000001 was not found by ACBS."
        );
    }

    #[tokio::test]
    async fn loans_expiring_before_issue_are_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(201)).expect(0).mount(&server).await;
        let mut body = create_loan_body();
        body["expiryDate"] = json!("2023-01-01");

        let response =
            send(app(&server), Method::POST, "/api/v1/facilities/0030000321/loans", Some(body)).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
}
