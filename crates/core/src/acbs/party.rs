use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{
    AcbsUser, AddressType, AssignedRating, CitizenshipClass, Country, ExternalRatingUserCode1,
    ExternalRatingUserCode2, IndustryClassification, MinorityClass, OfficerRiskRatingType,
    PartyStatus, PartyType, RatingEntity, ServicingUnit, ServicingUnitSection,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartyAddress {
    pub address_identifier: String,
    pub address_type: AddressType,
    pub country: Country,
}

/// Body of `POST /Party`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsCreatePartyRequest {
    pub party_alternate_identifier: String,
    pub industry_classification: IndustryClassification,
    pub party_name1: String,
    pub party_name2: String,
    pub party_name3: String,
    pub party_short_name: String,
    pub party_sort_name: String,
    pub party_type: PartyType,
    pub party_status: PartyStatus,
    pub minority_class: MinorityClass,
    pub citizenship_class: CitizenshipClass,
    pub officer_risk_rating_type: OfficerRiskRatingType,
    pub officer_risk_date: String,
    pub primary_address: PartyAddress,
    pub servicing_user: AcbsUser,
    pub administrative_user: AcbsUser,
    pub servicing_unit: ServicingUnit,
    pub servicing_unit_section: ServicingUnitSection,
}

/// A party as returned by `GET /Party/{party}` and `GET /Party/Search/{text}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsGetPartyResponse {
    pub party_identifier: String,
    #[serde(default)]
    pub party_alternate_identifier: Option<String>,
    #[serde(default)]
    pub industry_classification: Option<IndustryClassification>,
    #[serde(default)]
    pub party_name1: Option<String>,
    #[serde(default)]
    pub party_name2: Option<String>,
    #[serde(default)]
    pub party_name3: Option<String>,
    #[serde(default)]
    pub minority_class: Option<MinorityClass>,
    #[serde(default)]
    pub citizenship_class: Option<CitizenshipClass>,
    #[serde(default)]
    pub officer_risk_date: Option<String>,
    #[serde(default)]
    pub primary_address: Option<PartyAddress>,
}

/// Sent and received on `/Party/{party}/PartyExternalRating`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsPartyExternalRating {
    pub party_identifier: String,
    pub rating_entity: RatingEntity,
    pub assigned_rating: AssignedRating,
    pub rated_date: String,
    #[serde(rename = "ProbabilityofDefault")]
    pub probability_of_default: Decimal,
    pub loss_given_default: Decimal,
    pub risk_weighting: Decimal,
    pub external_rating_note1: String,
    pub external_rating_note2: String,
    pub external_rating_user_code1: ExternalRatingUserCode1,
    pub external_rating_user_code2: ExternalRatingUserCode2,
}
