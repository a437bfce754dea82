use reqwest::header::HeaderMap;
use ukef_core::acbs::bundle::{
    AcbsCreateBundleRequest, AcbsGetBundleResponse, BundleMessage, CreatedBundle,
};
use ukef_core::errors::AcbsError;

use crate::client::{AcbsHttpClient, FailureContext};
use crate::known::{bundle_not_found, facility_not_found, loan_not_found};

pub const BUNDLE_IDENTIFIER_HEADER: &str = "bundleidentifier";
pub const PROCESSING_WARNING_HEADER: &str = "processing-warning";

#[derive(Clone, Debug)]
pub struct AcbsBundleInformationService {
    client: AcbsHttpClient,
    servicing_queue_identifier: String,
}

impl AcbsBundleInformationService {
    pub fn new(client: AcbsHttpClient, servicing_queue_identifier: impl Into<String>) -> Self {
        Self { client, servicing_queue_identifier: servicing_queue_identifier.into() }
    }

    /// ACBS returns the new bundle's identifier in a response header.
    pub async fn create_bundle_information(
        &self,
        bundle: &AcbsCreateBundleRequest,
        id_token: &str,
    ) -> Result<CreatedBundle, AcbsError> {
        let failure = create_failure(bundle);
        let path = format!(
            "/BundleInformation?servicingQueueIdentifier={}",
            self.servicing_queue_identifier
        );
        let headers = self.client.post(&path, bundle, id_token, &failure).await?;

        let bundle_identifier = header_value(&headers, BUNDLE_IDENTIFIER_HEADER).ok_or_else(|| {
            AcbsError::unexpected(
                format!(
                    "{} ACBS did not return the {BUNDLE_IDENTIFIER_HEADER} header.",
                    failure.unknown_message()
                ),
                None,
            )
        })?;
        Ok(CreatedBundle {
            bundle_identifier,
            warning_errors: header_value(&headers, PROCESSING_WARNING_HEADER),
        })
    }

    pub async fn get_bundle_information_by_identifier(
        &self,
        bundle_identifier: &str,
        id_token: &str,
    ) -> Result<AcbsGetBundleResponse, AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to get the bundle information with identifier {bundle_identifier}."
        ))
        .with_known(bundle_not_found(bundle_identifier));
        let path = format!("/BundleInformation/{bundle_identifier}?returnItems=true");
        self.client.get(&path, id_token, &failure).await
    }
}

fn create_failure(bundle: &AcbsCreateBundleRequest) -> FailureContext {
    let first = bundle.bundle_message_list.first();
    let kind = first.map_or("empty", BundleMessage::type_name);
    let failure = FailureContext::new(format!("Failed to create a {kind} bundle in ACBS."));

    match first {
        Some(BundleMessage::FacilityCodeValueTransaction(message)) => {
            failure.with_known(facility_not_found(&message.facility_identifier))
        }
        Some(BundleMessage::NewLoanRequest(message)) => {
            failure.with_known(facility_not_found(&message.facility_identifier))
        }
        Some(BundleMessage::FacilityFeeAmountTransaction(message)) => {
            failure.with_known(facility_not_found(&message.facility_identifier))
        }
        Some(BundleMessage::LoanAdvanceTransaction(message)) => {
            failure.with_known(loan_not_found(&message.loan_identifier))
        }
        Some(BundleMessage::Unknown) | None => failure,
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use ukef_core::acbs::bundle::{AcbsCreateBundleRequest, BundleMessage};
    use ukef_core::builders::bundle::{build_bundle, loan_advance_message};
    use ukef_core::defaults::DefaultValues;
    use ukef_core::domain::loan::UpdateLoanAmountRequest;
    use ukef_core::errors::AcbsError;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::AcbsBundleInformationService;
    use crate::test_support::client;

    fn loan_advance_bundle() -> AcbsCreateBundleRequest {
        let defaults = DefaultValues::default();
        let request: UpdateLoanAmountRequest =
            serde_json::from_value(json!({ "effectiveDate": "2023-04-19", "amountAmendment": 1500 }))
                .expect("amendment");
        build_bundle(vec![loan_advance_message("0000000001", &request, &defaults)], None, &defaults)
    }

    fn service(server: &MockServer) -> AcbsBundleInformationService {
        AcbsBundleInformationService::new(client(server), "DCIS")
    }

    #[tokio::test]
    async fn created_bundle_reads_identifier_and_warning_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/BundleInformation"))
            .and(query_param("servicingQueueIdentifier", "DCIS"))
            .and(body_partial_json(json!({
                "BundleMessageList": [{ "$type": "LoanAdvanceTransaction" }]
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("bundleidentifier", "0000002244")
                    .insert_header("processing-warning", "Loan is past maturity"),
            )
            .mount(&server)
            .await;

        let created = service(&server)
            .create_bundle_information(&loan_advance_bundle(), "id-token")
            .await
            .expect("created");

        assert_eq!(created.bundle_identifier, "0000002244");
        assert_eq!(created.warning_errors.as_deref(), Some("Loan is past maturity"));
    }

    #[tokio::test]
    async fn missing_identifier_header_is_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let error = service(&server)
            .create_bundle_information(&loan_advance_bundle(), "id-token")
            .await
            .expect_err("no header");

        assert!(matches!(error, AcbsError::UnexpectedUpstream { .. }));
    }

    #[tokio::test]
    async fn missing_loan_is_recognised_for_loan_advances() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Loan does not exist"))
            .mount(&server)
            .await;

        let error = service(&server)
            .create_bundle_information(&loan_advance_bundle(), "id-token")
            .await
            .expect_err("not found");

        assert_eq!(error.message(), "Loan with identifier 0000000001 was not found by ACBS.");
    }

    #[tokio::test]
    async fn bundle_is_read_with_its_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/BundleInformation/0000002244"))
            .and(query_param("returnItems", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "PortfolioIdentifier": "E1",
                "BundleStatus": { "BundleStatusCode": "A" },
                "PostingDate": "2023-04-19T00:00:00Z",
                "BundleMessageList": [{ "$type": "AccrualScheduleAmountTransaction" }]
            })))
            .mount(&server)
            .await;

        let bundle = service(&server)
            .get_bundle_information_by_identifier("0000002244", "id-token")
            .await
            .expect("bundle");

        assert_eq!(bundle.bundle_message_list, vec![BundleMessage::Unknown]);
        assert_eq!(bundle.posting_date.as_deref(), Some("2023-04-19T00:00:00Z"));
    }
}
