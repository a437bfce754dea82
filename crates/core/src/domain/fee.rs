use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{iso_code, non_zero_amount, party_identifier, positive_amount};
use crate::dates::DateOnly;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFixedFeeRequest {
    #[validate(custom(function = "positive_amount"))]
    pub amount: Decimal,
    pub effective_date: DateOnly,
    pub expiration_date: DateOnly,
    pub next_due_date: DateOnly,
    pub next_accrue_to_date: DateOnly,
    #[validate(length(equal = 2))]
    pub period: String,
    #[validate(custom(function = "iso_code"))]
    pub currency: String,
    #[validate(length(equal = 3))]
    pub lender_type_code: String,
    #[validate(length(equal = 3))]
    pub income_class_code: Option<String>,
    pub spread_to_investors_indicator: Option<bool>,
    #[validate(custom(function = "party_identifier"))]
    pub party_identifier: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedFee {
    pub facility_identifier: String,
    pub portfolio_identifier: String,
    pub amount: Decimal,
    pub effective_date: Option<String>,
    pub expiration_date: Option<String>,
    pub next_due_date: Option<String>,
    pub next_accrue_to_date: Option<String>,
    pub period: String,
    pub description: Option<String>,
    pub currency: String,
    pub lender_type_code: String,
    pub income_class_code: Option<String>,
    pub party_identifier: Option<String>,
    pub spread_to_investors_indicator: Option<bool>,
}

/// One fee amount change; a negative amendment decreases the fee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FixedFeeAmountAmendment {
    #[validate(custom(function = "party_identifier"))]
    pub party_identifier: String,
    #[validate(length(equal = 2))]
    pub period: String,
    #[validate(length(equal = 3))]
    pub lender_type_code: String,
    pub effective_date: DateOnly,
    #[validate(custom(function = "non_zero_amount"))]
    pub amount_amendment: Decimal,
}
