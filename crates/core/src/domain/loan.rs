use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{iso_code, non_negative_amount, party_identifier, positive_amount};
use crate::dates::DateOnly;
use crate::defaults::DOMESTIC_CURRENCY;

pub const BILLING_FREQUENCY_TYPES: [&str; 4] = ["M", "Q", "S", "A"];

fn billing_frequency_type(value: &str) -> Result<(), ValidationError> {
    if BILLING_FREQUENCY_TYPES.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::new("loan_billing_frequency_type")
        .with_message("loanBillingFrequencyType must be one of M, Q, S or A".into()))
}

/// A loan drawn under a facility, sent to ACBS as a `NewLoanRequest` bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "loan_request_is_consistent"))]
pub struct CreateLoanRequest {
    #[validate(custom(function = "party_identifier"))]
    pub borrower_party_identifier: String,
    #[validate(length(min = 1, max = 3))]
    pub product_type_id: String,
    #[validate(custom(function = "iso_code"))]
    pub currency: String,
    #[validate(custom(function = "non_negative_amount"))]
    pub deal_customer_usage_rate: Option<Decimal>,
    #[validate(length(equal = 1))]
    pub deal_customer_usage_operation_type: Option<String>,
    #[validate(custom(function = "positive_amount"))]
    pub amount: Decimal,
    pub issue_date: DateOnly,
    pub expiry_date: DateOnly,
    #[validate(custom(function = "non_negative_amount"))]
    pub spread_rate: Decimal,
    #[validate(length(equal = 1))]
    pub year_basis: Option<String>,
    #[validate(length(min = 1, max = 1))]
    pub index_rate_change_frequency: Option<String>,
    #[validate(custom(function = "billing_frequency_type"))]
    pub loan_billing_frequency_type: String,
}

fn loan_request_is_consistent(request: &CreateLoanRequest) -> Result<(), ValidationError> {
    if request.expiry_date < request.issue_date {
        return Err(ValidationError::new("expiry_date")
            .with_message("expiryDate must not be before issueDate".into()));
    }
    if request.currency != DOMESTIC_CURRENCY && request.deal_customer_usage_rate.is_none() {
        return Err(ValidationError::new("deal_customer_usage_rate")
            .with_message(
                "dealCustomerUsageRate is required for loans outside the domestic currency".into(),
            ));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub portfolio_identifier: String,
    pub loan_identifier: String,
    pub facility_identifier: String,
    pub borrower_party_identifier: String,
    pub product_type_id: String,
    pub product_type_group: String,
    pub currency: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub principal_balance: Decimal,
    pub interest_balance: Decimal,
    pub fee_balance: Decimal,
    pub other_balance: Decimal,
    pub discounted_principal: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoanExpiryDateRequest {
    pub expiry_date: DateOnly,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoanAmountRequest {
    pub effective_date: DateOnly,
    #[validate(custom(function = "positive_amount"))]
    pub amount_amendment: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanIdentifierResponse {
    pub loan_identifier: String,
}
