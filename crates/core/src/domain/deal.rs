use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{iso_code, non_negative_amount, party_identifier, ukef_identifier};
use crate::dates::DateOnly;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealRequest {
    #[validate(custom(function = "ukef_identifier"))]
    pub deal_identifier: String,
    #[validate(custom(function = "iso_code"))]
    pub currency: String,
    #[validate(custom(function = "non_negative_amount"))]
    pub deal_value: Decimal,
    pub guarantee_commencement_date: DateOnly,
    #[validate(custom(function = "party_identifier"))]
    pub obligor_party_identifier: String,
    #[validate(length(min = 1, max = 35))]
    pub obligor_name: String,
    #[validate(length(min = 1, max = 10))]
    pub obligor_industry_classification: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub deal_identifier: String,
    pub portfolio_identifier: String,
    pub currency: String,
    pub deal_value: Decimal,
    pub guarantee_commencement_date: Option<String>,
    pub obligor_party_identifier: String,
    pub obligor_name: Option<String>,
    pub obligor_industry_classification: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealIdentifierResponse {
    pub deal_identifier: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use validator::Validate;

    use super::CreateDealRequest;

    fn request() -> serde_json::Value {
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

    #[test]
    fn accepts_a_complete_request() {
        let request: CreateDealRequest = serde_json::from_value(request()).expect("valid body");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn rejects_short_identifiers_and_lower_case_currency() {
        let mut body = request();
        body["dealIdentifier"] = json!("123");
        body["currency"] = json!("gbp");
        let request: CreateDealRequest = serde_json::from_value(body).expect("shape is valid");

        let errors = request.validate().expect_err("should be invalid");
        let fields = errors.field_errors();
        assert!(fields.contains_key("deal_identifier"));
        assert!(fields.contains_key("currency"));
    }

    #[test]
    fn rejects_loose_dates_while_deserializing() {
        let mut body = request();
        body["guaranteeCommencementDate"] = json!("2023-4-19");
        assert!(serde_json::from_value::<CreateDealRequest>(body).is_err());
    }
}
