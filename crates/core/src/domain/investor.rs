use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{iso_code, non_negative_amount};
use crate::dates::DateOnly;

/// An absent expiry date means the investor never expires.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealInvestorRequest {
    #[validate(length(equal = 3))]
    pub lender_type: Option<String>,
    pub effective_date: DateOnly,
    pub expiry_date: Option<DateOnly>,
    #[validate(length(equal = 1))]
    pub deal_status: Option<String>,
    #[validate(custom(function = "iso_code"))]
    pub currency: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealInvestor {
    pub portfolio_identifier: String,
    pub deal_identifier: String,
    pub lender_type_code: String,
    pub effective_date: Option<String>,
    pub expiry_date: Option<String>,
    pub is_expiry_date_maximum: bool,
    pub maximum_liability: Decimal,
    pub deal_status_code: Option<String>,
    pub currency: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacilityInvestorRequest {
    pub effective_date: DateOnly,
    pub guarantee_expiry_date: DateOnly,
    #[validate(custom(function = "iso_code"))]
    pub currency: String,
    #[validate(custom(function = "non_negative_amount"))]
    pub maximum_liability: Decimal,
    #[validate(length(equal = 3))]
    pub lender_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityInvestor {
    pub portfolio_identifier: String,
    pub facility_identifier: String,
    pub involved_party: String,
    pub effective_date: Option<String>,
    pub guarantee_expiry_date: Option<String>,
    pub currency: String,
    pub maximum_liability: Decimal,
    pub lender_type_code: String,
}
