use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{iso_code, party_identifier};
use crate::dates::DateOnly;

fn citizenship_class(value: &str) -> Result<(), ValidationError> {
    if matches!(value, "1" | "2") {
        return Ok(());
    }
    Err(ValidationError::new("citizenship_class")
        .with_message("citizenshipClass must be 1 or 2".into()))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartySearchQuery {
    #[validate(length(min = 3))]
    pub search_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartyRequest {
    #[validate(custom(function = "party_identifier"))]
    pub alternate_identifier: String,
    #[validate(length(min = 1, max = 10))]
    pub industry_classification: String,
    #[validate(length(min = 1, max = 35))]
    pub name1: String,
    #[validate(length(max = 35))]
    pub name2: Option<String>,
    #[validate(length(max = 35))]
    pub name3: Option<String>,
    #[validate(length(min = 1, max = 2))]
    pub sme_type: String,
    #[validate(custom(function = "citizenship_class"))]
    pub citizenship_class: String,
    pub officer_risk_date: DateOnly,
    #[validate(custom(function = "iso_code"))]
    pub country_code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub party_identifier: String,
    pub alternate_identifier: Option<String>,
    pub industry_classification: Option<String>,
    pub name1: Option<String>,
    pub name2: Option<String>,
    pub name3: Option<String>,
    pub sme_type: Option<String>,
    pub citizenship_class: Option<String>,
    pub officer_risk_date: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyIdentifierResponse {
    pub party_identifier: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartyExternalRatingRequest {
    #[validate(length(min = 1, max = 2))]
    pub assigned_rating_code: String,
    pub rated_date: DateOnly,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyExternalRating {
    pub party_identifier: String,
    pub rating_entity_code: String,
    pub assigned_rating_code: String,
    pub rated_date: Option<String>,
    pub probability_of_default: Decimal,
    pub loss_given_default: Decimal,
    pub risk_weighting: Decimal,
    pub external_rating_note1: String,
    pub external_rating_note2: String,
    pub external_rating_user_code1: String,
    pub external_rating_user_code2: String,
}
