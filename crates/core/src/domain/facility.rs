use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{iso_code, non_negative_amount, party_identifier, ukef_identifier};
use crate::dates::DateOnly;

/// Facility fields shared by creation and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FacilityFields {
    #[validate(length(min = 1, max = 3))]
    pub product_type_id: String,
    #[validate(length(min = 1, max = 45))]
    pub product_type_name: String,
    #[validate(length(min = 1, max = 12))]
    pub exposure_period: String,
    #[validate(custom(function = "ukef_identifier"))]
    pub deal_identifier: String,
    #[validate(custom(function = "party_identifier"))]
    pub deal_borrower_identifier: String,
    #[validate(custom(function = "iso_code"))]
    pub currency: String,
    #[validate(custom(function = "non_negative_amount"))]
    pub maximum_liability: Decimal,
    pub guarantee_expiry_date: DateOnly,
    pub effective_date: DateOnly,
    pub next_quarter_end_date: DateOnly,
    pub issue_date: Option<DateOnly>,
    #[validate(length(equal = 2))]
    pub facility_stage_code: String,
    #[validate(length(equal = 1))]
    pub delegation_type: String,
    #[validate(custom(function = "non_negative_amount"))]
    pub interest_or_fee_rate: Decimal,
    #[validate(custom(function = "non_negative_amount"))]
    pub forecast_percentage: Decimal,
    #[validate(custom(function = "party_identifier"))]
    pub agent_bank_identifier: String,
    #[validate(custom(function = "party_identifier"))]
    pub obligor_party_identifier: String,
    #[validate(length(min = 1, max = 10))]
    pub obligor_industry_classification: String,
    #[validate(custom(function = "iso_code"))]
    pub risk_country_code: Option<String>,
    #[validate(length(equal = 1))]
    pub premium_frequency_code: String,
    #[validate(length(min = 1, max = 2))]
    pub risk_status_code: Option<String>,
    #[validate(length(min = 1, max = 2))]
    pub credit_rating_code: Option<String>,
    #[validate(custom(function = "non_negative_amount"))]
    pub probability_of_default: Decimal,
    #[validate(length(min = 1, max = 2))]
    pub capital_conversion_factor_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacilityRequest {
    #[validate(custom(function = "ukef_identifier"))]
    pub facility_identifier: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub fields: FacilityFields,
}

/// Which change an update applies. Both merge the full field set over the
/// facility ACBS holds; issuing additionally moves it to the issued stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacilityUpdateOperation {
    Issue,
    AmendExpiryDate,
}

impl FacilityUpdateOperation {
    /// Checks the fields an operation needs beyond the shared validation.
    pub fn check(self, fields: &FacilityFields) -> Result<(), ValidationError> {
        match self {
            Self::Issue if fields.issue_date.is_none() => Err(ValidationError::new("issue_date")
                .with_message("issueDate is required to issue a facility".into())),
            Self::Issue | Self::AmendExpiryDate => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UpdateFacilityQuery {
    pub op: FacilityUpdateOperation,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub facility_identifier: String,
    pub portfolio_identifier: String,
    pub deal_identifier: Option<String>,
    pub deal_borrower_identifier: Option<String>,
    pub currency: String,
    pub maximum_liability: Decimal,
    pub product_type_id: String,
    pub product_type_name: Option<String>,
    pub exposure_period: Option<String>,
    pub capital_conversion_factor_code: Option<String>,
    pub guarantee_expiry_date: Option<String>,
    pub effective_date: Option<String>,
    pub issue_date: Option<String>,
    pub next_quarter_end_date: Option<String>,
    pub facility_stage_code: Option<String>,
    pub delegation_type: Option<String>,
    pub interest_or_fee_rate: Decimal,
    pub forecast_percentage: Decimal,
    pub agent_bank_identifier: Option<String>,
    pub obligor_party_identifier: String,
    pub obligor_name: Option<String>,
    pub obligor_industry_classification: Option<String>,
    pub risk_country_code: Option<String>,
    pub premium_frequency_code: Option<String>,
    pub risk_status_code: Option<String>,
    pub credit_rating_code: Option<String>,
    pub probability_of_default: Decimal,
    pub facility_overall_status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityIdentifierResponse {
    pub facility_identifier: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    pub fn create_facility_body() -> Value {
        json!({
            "facilityIdentifier": "0030000321",
            "productTypeId": "250",
            "productTypeName": "Bond Support Scheme",
            "exposurePeriod": "12",
            "dealIdentifier": "0020900035",
            "dealBorrowerIdentifier": "00291013",
            "currency": "GBP",
            "maximumLiability": 1000000,
            "guaranteeExpiryDate": "2024-04-19",
            "effectiveDate": "2023-04-19",
            "nextQuarterEndDate": "2023-06-30",
            "issueDate": "2023-04-19",
            "facilityStageCode": "07",
            "delegationType": "A",
            "interestOrFeeRate": 1.5,
            "forecastPercentage": 20,
            "agentBankIdentifier": "00000000",
            "obligorPartyIdentifier": "00291013",
            "obligorIndustryClassification": "0116",
            "riskCountryCode": "GBR",
            "premiumFrequencyCode": "1",
            "riskStatusCode": "03",
            "creditRatingCode": "14",
            "probabilityOfDefault": 0.14,
            "capitalConversionFactorCode": null
        })
    }
}
