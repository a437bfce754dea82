use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{non_negative_amount, party_identifier};
use crate::dates::DateOnly;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "deal_guarantee_dates"))]
pub struct CreateDealGuaranteeRequest {
    #[validate(custom(function = "party_identifier"))]
    pub guarantor_party: Option<String>,
    #[validate(custom(function = "party_identifier"))]
    pub limit_key: String,
    pub effective_date: DateOnly,
    pub guarantee_expiry_date: DateOnly,
    #[validate(custom(function = "non_negative_amount"))]
    pub maximum_liability: Decimal,
    #[validate(length(equal = 3))]
    pub guarantee_type_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "facility_guarantee_dates"))]
pub struct CreateFacilityGuaranteeRequest {
    #[validate(custom(function = "party_identifier"))]
    pub guarantor_party: String,
    #[validate(custom(function = "party_identifier"))]
    pub limit_key: String,
    pub effective_date: DateOnly,
    pub guarantee_expiry_date: DateOnly,
    #[validate(custom(function = "non_negative_amount"))]
    pub maximum_liability: Decimal,
    #[validate(length(equal = 3))]
    pub guarantee_type_code: String,
}

fn expiry_not_before_effective(
    effective: DateOnly,
    expiry: DateOnly,
) -> Result<(), ValidationError> {
    if expiry < effective {
        return Err(ValidationError::new("guarantee_expiry_date")
            .with_message("guaranteeExpiryDate must not be before effectiveDate".into()));
    }
    Ok(())
}

fn deal_guarantee_dates(request: &CreateDealGuaranteeRequest) -> Result<(), ValidationError> {
    expiry_not_before_effective(request.effective_date, request.guarantee_expiry_date)
}

fn facility_guarantee_dates(
    request: &CreateFacilityGuaranteeRequest,
) -> Result<(), ValidationError> {
    expiry_not_before_effective(request.effective_date, request.guarantee_expiry_date)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealGuarantee {
    pub portfolio_identifier: String,
    pub deal_identifier: String,
    pub guarantor_party: String,
    pub limit_key: String,
    pub effective_date: Option<String>,
    pub guarantee_expiry_date: Option<String>,
    pub maximum_liability: Decimal,
    pub guarantee_type_code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityGuarantee {
    pub portfolio_identifier: String,
    pub facility_identifier: String,
    pub guarantor_party: String,
    pub limit_key: String,
    pub effective_date: Option<String>,
    pub guarantee_expiry_date: Option<String>,
    pub maximum_liability: Decimal,
    pub guarantee_type_code: String,
}
