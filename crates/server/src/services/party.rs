use tracing::info;
use ukef_acbs::AcbsPartyService;
use ukef_core::builders::party::{
    build_create_external_rating, build_create_party, external_rating_from_acbs, party_from_acbs,
};
use ukef_core::domain::party::{
    CreatePartyExternalRatingRequest, CreatePartyRequest, Party, PartyExternalRating,
    PartyIdentifierResponse,
};

use super::ServiceContext;
use crate::error::ApiError;

/// Result of an idempotent party creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreatedParty {
    Created(PartyIdentifierResponse),
    Existing(PartyIdentifierResponse),
}

#[derive(Clone)]
pub struct PartyService {
    parties: AcbsPartyService,
    context: ServiceContext,
}

impl PartyService {
    pub fn new(parties: AcbsPartyService, context: ServiceContext) -> Self {
        Self { parties, context }
    }

    pub async fn search_parties(&self, search_text: &str) -> Result<Vec<Party>, ApiError> {
        let id_token = self.context.id_token().await?;
        let parties = self.parties.search_parties(search_text, &id_token).await?;
        Ok(parties.into_iter().map(party_from_acbs).collect())
    }

    pub async fn get_party(&self, party_identifier: &str) -> Result<Party, ApiError> {
        let id_token = self.context.id_token().await?;
        let party = self.parties.get_party_by_identifier(party_identifier, &id_token).await?;
        Ok(party_from_acbs(party))
    }

    /// A party already holding the alternate identifier is returned instead of
    /// creating a duplicate.
    pub async fn create_party(&self, request: &CreatePartyRequest) -> Result<CreatedParty, ApiError> {
        let id_token = self.context.id_token().await?;
        let alternate_identifier = request.alternate_identifier.as_str();

        let matches = self.parties.search_parties(alternate_identifier, &id_token).await?;
        if let Some(existing) = matches
            .into_iter()
            .find(|party| party.party_alternate_identifier.as_deref() == Some(alternate_identifier))
        {
            info!(
                event_name = "party.create.existing",
                party_identifier = %existing.party_identifier,
                alternate_identifier = %alternate_identifier,
                "party already exists in ACBS"
            );
            return Ok(CreatedParty::Existing(PartyIdentifierResponse {
                party_identifier: existing.party_identifier,
            }));
        }

        let party = build_create_party(request, self.context.defaults());
        let party_identifier = self.parties.create_party(&party, &id_token).await?;

        info!(
            event_name = "party.created",
            party_identifier = %party_identifier,
            alternate_identifier = %alternate_identifier,
            "party created in ACBS"
        );
        Ok(CreatedParty::Created(PartyIdentifierResponse { party_identifier }))
    }

    pub async fn get_external_ratings(
        &self,
        party_identifier: &str,
    ) -> Result<Vec<PartyExternalRating>, ApiError> {
        let id_token = self.context.id_token().await?;
        let ratings = self.parties.get_external_ratings_for_party(party_identifier, &id_token).await?;
        Ok(ratings.into_iter().map(external_rating_from_acbs).collect())
    }

    pub async fn create_external_rating(
        &self,
        party_identifier: &str,
        request: &CreatePartyExternalRatingRequest,
    ) -> Result<PartyIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let rating = build_create_external_rating(party_identifier, request, self.context.defaults());
        self.parties.create_external_rating_for_party(party_identifier, &rating, &id_token).await?;

        info!(
            event_name = "party.external_rating.created",
            party_identifier = %party_identifier,
            "party external rating created in ACBS"
        );
        Ok(PartyIdentifierResponse { party_identifier: party_identifier.to_string() })
    }
}
