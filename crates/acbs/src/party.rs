use reqwest::header::LOCATION;
use reqwest::Url;
use ukef_core::acbs::party::{AcbsCreatePartyRequest, AcbsGetPartyResponse, AcbsPartyExternalRating};
use ukef_core::errors::AcbsError;

use crate::client::{AcbsHttpClient, FailureContext};
use crate::known::party_not_found;

#[derive(Clone, Debug)]
pub struct AcbsPartyService {
    client: AcbsHttpClient,
}

impl AcbsPartyService {
    pub fn new(client: AcbsHttpClient) -> Self {
        Self { client }
    }

    pub async fn get_party_by_identifier(
        &self,
        party_identifier: &str,
        id_token: &str,
    ) -> Result<AcbsGetPartyResponse, AcbsError> {
        let failure =
            FailureContext::new(format!("Failed to get the party with identifier {party_identifier}."))
                .with_known(party_not_found(party_identifier));
        self.client.get(&format!("/Party/{party_identifier}"), id_token, &failure).await
    }

    /// ACBS answers a search without matches with `null`.
    pub async fn search_parties(
        &self,
        search_text: &str,
        id_token: &str,
    ) -> Result<Vec<AcbsGetPartyResponse>, AcbsError> {
        let failure = FailureContext::new("Failed to get parties from ACBS.");
        let path = format!("/Party/Search/{}", encode_path_segment(search_text));
        let parties = self.client.get_nullable(&path, id_token, &failure).await?;
        Ok(parties.unwrap_or_default())
    }

    /// Returns the identifier ACBS assigned, read from the `location` header.
    pub async fn create_party(
        &self,
        party: &AcbsCreatePartyRequest,
        id_token: &str,
    ) -> Result<String, AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to create a party with alternate identifier {}.",
            party.party_alternate_identifier
        ));
        let headers = self.client.post("/Party", party, id_token, &failure).await?;

        headers
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(party_identifier_from_location)
            .ok_or_else(|| {
                AcbsError::unexpected(
                    format!(
                        "{} ACBS did not return a location for the new party.",
                        failure.unknown_message()
                    ),
                    None,
                )
            })
    }

    pub async fn get_external_ratings_for_party(
        &self,
        party_identifier: &str,
        id_token: &str,
    ) -> Result<Vec<AcbsPartyExternalRating>, AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to get the external ratings for the party with identifier {party_identifier}."
        ))
        .with_known(party_not_found(party_identifier));
        let path = format!("/Party/{party_identifier}/PartyExternalRating");

        // A null body may also mean the party exists without ratings.
        self.client.get_nullable(&path, id_token, &failure).await?.ok_or_else(|| {
            AcbsError::not_found(format!(
                "Party with identifier {party_identifier} was not found by ACBS."
            ))
        })
    }

    pub async fn create_external_rating_for_party(
        &self,
        party_identifier: &str,
        rating: &AcbsPartyExternalRating,
        id_token: &str,
    ) -> Result<(), AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to create an external rating for party {party_identifier} in ACBS."
        ))
        .with_known(party_not_found(party_identifier));
        let path = format!("/Party/{party_identifier}/PartyExternalRating");
        self.client.post(&path, rating, id_token, &failure).await?;
        Ok(())
    }
}

/// Last non-empty path segment of a `location` header, absolute or relative.
fn party_identifier_from_location(location: &str) -> Option<String> {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/')
        .map(str::trim)
        .find(|segment| !segment.is_empty())
        .map(ToString::to_string)
}

fn encode_path_segment(segment: &str) -> String {
    let Ok(mut url) = Url::parse("http://acbs.invalid/") else {
        return segment.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(segment);
    }
    url.path().trim_start_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use ukef_core::errors::AcbsError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{encode_path_segment, party_identifier_from_location, AcbsPartyService};
    use crate::test_support::client;

    #[test]
    fn party_identifier_is_read_from_location() {
        assert_eq!(party_identifier_from_location("/Party/00291013").as_deref(), Some("00291013"));
        assert_eq!(
            party_identifier_from_location("https://acbs.example/Party/00291013/").as_deref(),
            Some("00291013")
        );
        assert_eq!(party_identifier_from_location("/"), None);
    }

    #[test]
    fn search_text_is_percent_encoded() {
        assert_eq!(encode_path_segment("ACME TRADING"), "ACME%20TRADING");
        assert_eq!(encode_path_segment("A/B"), "A%2FB");
    }

    #[tokio::test]
    async fn null_search_result_is_an_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Party/Search/ACME"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let parties = AcbsPartyService::new(client(&server))
            .search_parties("ACME", "id-token")
            .await
            .expect("search");

        assert!(parties.is_empty());
    }

    #[tokio::test]
    async fn null_external_ratings_are_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Party/00291013/PartyExternalRating"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let error = AcbsPartyService::new(client(&server))
            .get_external_ratings_for_party("00291013", "id-token")
            .await
            .expect_err("null body");

        assert!(matches!(error, AcbsError::ResourceNotFound { .. }));
        assert_eq!(error.message(), "Party with identifier 00291013 was not found by ACBS.");
    }

    #[tokio::test]
    async fn created_party_identifier_comes_from_location() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/Party"))
            .respond_with(ResponseTemplate::new(201).insert_header("location", "/Party/00309999"))
            .mount(&server)
            .await;
        let party = serde_json::from_value(json!({
            "PartyAlternateIdentifier": "00309999",
            "IndustryClassification": { "IndustryClassificationCode": "0116" },
            "PartyName1": "ACME TRADING LIMITED",
            "PartyName2": "",
            "PartyName3": "",
            "PartyShortName": "ACME TRADING LI",
            "PartySortName": "ACME TRADING LIMITED",
            "PartyType": { "PartyTypeCode": "100" },
            "PartyStatus": { "PartyStatusCode": "A" },
            "MinorityClass": { "MinorityClassCode": "1" },
            "CitizenshipClass": { "CitizenshipClassCode": "2" },
            "OfficerRiskRatingType": { "OfficerRiskRatingTypeCode": "02" },
            "OfficerRiskDate": "2023-04-19T00:00:00Z",
            "PrimaryAddress": {
                "AddressIdentifier": "01",
                "AddressType": { "AddressTypeCode": "01" },
                "Country": { "CountryCode": "GBR" }
            },
            "ServicingUser": { "UserAcbsIdentifier": "OPERATIONS", "UserName": "OPERATIONS" },
            "AdministrativeUser": { "UserAcbsIdentifier": "OPERATIONS", "UserName": "OPERATIONS" },
            "ServicingUnit": { "ServicingUnitIdentifier": "ACBSUNIT" },
            "ServicingUnitSection": { "ServicingUnitSectionIdentifier": "ACBSUNITSECTION" }
        }))
        .expect("party");

        let identifier = AcbsPartyService::new(client(&server))
            .create_party(&party, "id-token")
            .await
            .expect("created");

        assert_eq!(identifier, "00309999");
    }
}
