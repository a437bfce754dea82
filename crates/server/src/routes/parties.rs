use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use ukef_core::domain::party::{
    CreatePartyExternalRatingRequest, CreatePartyRequest, PartySearchQuery,
};

use super::PartyPath;
use crate::error::ApiError;
use crate::extract::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::services::CreatedParty;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parties", get(search_parties).post(create_party))
        .route("/parties/{partyIdentifier}", get(get_party))
        .route(
            "/parties/{partyIdentifier}/external-ratings",
            get(get_external_ratings).post(create_external_rating),
        )
}

async fn search_parties(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PartySearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.parties.search_parties(&query.search_text).await?))
}

async fn get_party(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<PartyPath>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.parties.get_party(&path.party_identifier).await?))
}

/// 201 for a new party, 200 when one with the alternate identifier exists.
async fn create_party(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePartyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(match state.parties.create_party(&request).await? {
        CreatedParty::Created(created) => (StatusCode::CREATED, Json(created)),
        CreatedParty::Existing(existing) => (StatusCode::OK, Json(existing)),
    })
}

async fn get_external_ratings(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<PartyPath>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.parties.get_external_ratings(&path.party_identifier).await?))
}

async fn create_external_rating(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<PartyPath>,
    ValidatedJson(request): ValidatedJson<CreatePartyExternalRatingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.parties.create_external_rating(&path.party_identifier, &request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::routes::test_support::{app, send};

    fn create_party_body() -> Value {
        json!({
            "alternateIdentifier": "00309999",
            "industryClassification": "0116",
            "name1": "ACME TRADING LIMITED",
            "smeType": "1",
            "citizenshipClass": "1",
            "officerRiskDate": "2023-04-19",
            "countryCode": "GBR"
        })
    }

    #[tokio::test]
    async fn search_maps_parties_and_treats_null_as_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Party/Search/ACME"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "PartyIdentifier": "00291013",
                "PartyAlternateIdentifier": "00309999",
                "PartyName1": "ACME TRADING LIMITED"
            }])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/Party/Search/NOBODY"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let found = send(app(&server), Method::GET, "/api/v1/parties?searchText=ACME", None).await;
        assert_eq!(found.status, StatusCode::OK);
        assert_eq!(found.body[0]["partyIdentifier"], "00291013");
        assert_eq!(found.body[0]["alternateIdentifier"], "00309999");
        assert_eq!(found.body[0]["name1"], "ACME TRADING LIMITED");

        let none = send(app(&server), Method::GET, "/api/v1/parties?searchText=NOBODY", None).await;
        assert_eq!(none.status, StatusCode::OK);
        assert_eq!(none.body, json!([]));
    }

    #[tokio::test]
    async fn short_search_text_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

        let response = send(app(&server), Method::GET, "/api/v1/parties?searchText=AC", None).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn new_party_is_created_with_the_identifier_from_location() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Party/Search/00309999"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/Party"))
            .and(body_partial_json(json!({
                "PartyAlternateIdentifier": "00309999",
                "PartyName1": "ACME TRADING LIMITED"
            })))
            .respond_with(ResponseTemplate::new(201).insert_header("location", "/Party/00291013"))
            .expect(1)
            .mount(&server)
            .await;

        let response = send(app(&server), Method::POST, "/api/v1/parties", Some(create_party_body())).await;

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body, json!({ "partyIdentifier": "00291013" }));
    }

    #[tokio::test]
    async fn existing_party_is_returned_with_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Party/Search/00309999"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "PartyIdentifier": "00111111", "PartyAlternateIdentifier": "00309999X" },
                { "PartyIdentifier": "00291013", "PartyAlternateIdentifier": "00309999" }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("POST")).respond_with(ResponseTemplate::new(201)).expect(0).mount(&server).await;

        let response = send(app(&server), Method::POST, "/api/v1/parties", Some(create_party_body())).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({ "partyIdentifier": "00291013" }));
    }

    #[tokio::test]
    async fn missing_party_is_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Party/00291013"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Party not found"))
            .mount(&server)
            .await;

        let response = send(app(&server), Method::GET, "/api/v1/parties/00291013", None).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body["message"], "Party with identifier 00291013 was not found by ACBS.");
    }

    #[tokio::test]
    async fn external_ratings_are_listed_and_created() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Party/00291013/PartyExternalRating"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "PartyIdentifier": "00291013",
                "RatingEntity": { "RatingEntityCode": "1" },
                "AssignedRating": { "AssignedRatingCode": "01" },
                "RatedDate": "2023-04-19T00:00:00Z",
                "ProbabilityofDefault": 0.14,
                "LossGivenDefault": 50,
                "RiskWeighting": 100,
                "ExternalRatingNote1": "",
                "ExternalRatingNote2": "",
                "ExternalRatingUserCode1": { "UserCode1": "" },
                "ExternalRatingUserCode2": { "UserCode2": "" }
            }])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/Party/00291013/PartyExternalRating"))
            .and(body_partial_json(json!({
                "PartyIdentifier": "00291013",
                "AssignedRating": { "AssignedRatingCode": "02" },
                "RatedDate": "2023-05-01T00:00:00Z"
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let listed =
            send(app(&server), Method::GET, "/api/v1/parties/00291013/external-ratings", None).await;
        assert_eq!(listed.status, StatusCode::OK);
        assert_eq!(listed.body[0]["assignedRatingCode"], "01");
        assert_eq!(listed.body[0]["ratedDate"], "2023-04-19");

        let created = send(
            app(&server),
            Method::POST,
            "/api/v1/parties/00291013/external-ratings",
            Some(json!({ "assignedRatingCode": "02", "ratedDate": "2023-05-01" })),
        )
        .await;
        assert_eq!(created.status, StatusCode::CREATED);
        assert_eq!(created.body, json!({ "partyIdentifier": "00291013" }));
    }

    #[tokio::test]
    async fn null_external_ratings_are_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Party/00291013/PartyExternalRating"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let response =
            send(app(&server), Method::GET, "/api/v1/parties/00291013/external-ratings", None).await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
}
