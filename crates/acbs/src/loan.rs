use ukef_core::acbs::loan::AcbsGetLoanResponse;
use ukef_core::builders::Snapshot;
use ukef_core::errors::AcbsError;

use crate::client::{AcbsHttpClient, FailureContext};
use crate::known::{facility_not_found, loan_not_found};

#[derive(Clone, Debug)]
pub struct AcbsLoanService {
    client: AcbsHttpClient,
}

impl AcbsLoanService {
    pub fn new(client: AcbsHttpClient) -> Self {
        Self { client }
    }

    pub async fn get_loans_for_facility(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        id_token: &str,
    ) -> Result<Vec<AcbsGetLoanResponse>, AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to get the loans for the facility with identifier {facility_identifier}."
        ))
        .with_known(facility_not_found(facility_identifier));
        let path = format!("/Portfolio/{portfolio_identifier}/Facility/{facility_identifier}/Loan");
        self.client.get(&path, id_token, &failure).await
    }

    /// The loan exactly as ACBS holds it, for update flows.
    pub async fn get_loan_snapshot(
        &self,
        portfolio_identifier: &str,
        loan_identifier: &str,
        id_token: &str,
    ) -> Result<Snapshot, AcbsError> {
        let failure =
            FailureContext::new(format!("Failed to get the loan with identifier {loan_identifier}."))
                .with_known(loan_not_found(loan_identifier));
        let path = format!("/Portfolio/{portfolio_identifier}/Loan/{loan_identifier}");
        self.client.get(&path, id_token, &failure).await
    }

    pub async fn replace_loan(
        &self,
        portfolio_identifier: &str,
        loan_identifier: &str,
        loan: &Snapshot,
        id_token: &str,
    ) -> Result<(), AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to update the loan with identifier {loan_identifier}."
        ))
        .with_known(loan_not_found(loan_identifier));
        let path = format!("/Portfolio/{portfolio_identifier}/Loan/{loan_identifier}");
        self.client.put(&path, loan, id_token, &failure).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use ukef_core::errors::AcbsError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::AcbsLoanService;
    use crate::test_support::client;

    #[tokio::test]
    async fn missing_loan_snapshot_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Portfolio/E1/Loan/0000000001"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Loan does not exist"))
            .mount(&server)
            .await;

        let error = AcbsLoanService::new(client(&server))
            .get_loan_snapshot("E1", "0000000001", "id-token")
            .await
            .expect_err("not found");

        assert!(matches!(error, AcbsError::ResourceNotFound { .. }));
        assert_eq!(error.message(), "Loan with identifier 0000000001 was not found by ACBS.");
    }

    #[tokio::test]
    async fn loans_of_a_facility_are_decoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Portfolio/E1/Facility/0030000321/Loan"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "PortfolioIdentifier": "E1",
                "LoanIdentifier": "0000000001",
                "ParentFacilityIdentifier": "0030000321",
                "PrimaryParty": { "PartyIdentifier": "00291013" },
                "Currency": { "CurrencyCode": "GBP" },
                "ProductType": { "ProductTypeCode": "250" },
                "ProductGroup": { "ProductGroupCode": "BS" }
            }])))
            .mount(&server)
            .await;

        let loans = AcbsLoanService::new(client(&server))
            .get_loans_for_facility("E1", "0030000321", "id-token")
            .await
            .expect("loans");

        assert_eq!(loans[0].loan_identifier, "0000000001");
        assert_eq!(loans[0].principal_balance, None);
    }
}
