use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{iso_code, non_negative_amount, party_identifier, ukef_identifier};
use crate::dates::DateOnly;

pub const COVENANT_TYPES: [&str; 3] = ["43", "46", "47"];

fn covenant_type(value: &str) -> Result<(), ValidationError> {
    if COVENANT_TYPES.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::new("covenant_type")
        .with_message("covenantType must be one of 43, 46 or 47".into()))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCovenantRequest {
    #[validate(custom(function = "ukef_identifier"))]
    pub covenant_identifier: String,
    #[validate(custom(function = "covenant_type"))]
    pub covenant_type: String,
    pub effective_date: DateOnly,
    pub expiration_date: DateOnly,
    #[validate(custom(function = "iso_code"))]
    pub currency: String,
    #[validate(custom(function = "non_negative_amount"))]
    pub maximum_liability: Decimal,
    #[validate(custom(function = "party_identifier"))]
    pub obligor_party_identifier: String,
}

/// Applied to every covenant of a facility.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "at_least_one_change"))]
pub struct UpdateCovenantsRequest {
    pub expiration_date: Option<DateOnly>,
    #[validate(custom(function = "non_negative_amount"))]
    pub target_amount: Option<Decimal>,
}

fn at_least_one_change(request: &UpdateCovenantsRequest) -> Result<(), ValidationError> {
    if request.expiration_date.is_none() && request.target_amount.is_none() {
        return Err(ValidationError::new("empty_update")
            .with_message("expirationDate or targetAmount must be provided".into()));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Covenant {
    pub covenant_identifier: String,
    pub portfolio_identifier: String,
    pub facility_identifier: String,
    pub covenant_type: String,
    pub maximum_liability: Decimal,
    pub currency: String,
    pub expiration_date: Option<String>,
    pub effective_date: Option<String>,
    pub obligor_party_identifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use validator::Validate;

    use super::{CreateCovenantRequest, UpdateCovenantsRequest};

    #[test]
    fn empty_update_is_rejected() {
        let request: UpdateCovenantsRequest = serde_json::from_value(json!({})).expect("shape");
        assert!(request.validate().is_err());

        let request: UpdateCovenantsRequest =
            serde_json::from_value(json!({ "targetAmount": 10 })).expect("shape");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn unknown_covenant_type_is_rejected() {
        let request: CreateCovenantRequest = serde_json::from_value(json!({
            "covenantIdentifier": "0000000001",
            "covenantType": "44",
            "effectiveDate": "2023-04-19",
            "expirationDate": "2024-04-19",
            "currency": "GBP",
            "maximumLiability": 100,
            "obligorPartyIdentifier": "00291013"
        }))
        .expect("shape");

        let errors = request.validate().expect_err("bad type");
        assert!(errors.field_errors().contains_key("covenant_type"));
    }
}
