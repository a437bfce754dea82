//! Bundle-backed transactions: facility activation, new loans, loan and fee
//! amount amendments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::acbs::bundle::CreatedBundle;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacilityActivationRequest {
    #[validate(range(min = 1, max = 99))]
    pub initial_bundle_status_code: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleIdentifierResponse {
    pub bundle_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_errors: Option<String>,
}

impl From<CreatedBundle> for BundleIdentifierResponse {
    fn from(created: CreatedBundle) -> Self {
        Self { bundle_identifier: created.bundle_identifier, warning_errors: created.warning_errors }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityActivationTransaction {
    pub portfolio_identifier: String,
    pub facility_identifier: String,
    pub bundle_status_code: Option<String>,
    pub bundle_status_desc: Option<String>,
    pub initial_bundle_status_code: Option<u32>,
    pub initiating_user_name: Option<String>,
    pub account_owner_identifier: String,
    pub effective_date: Option<String>,
    pub facility_transaction_code_value_code: String,
    pub facility_transaction_type_code: String,
    pub is_draft_indicator: bool,
    pub lender_type_code: String,
    pub limit_key_value: String,
    pub limit_type_code: String,
    pub section_identifier: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTransaction {
    pub portfolio_identifier: String,
    pub facility_identifier: String,
    pub bundle_status_code: Option<String>,
    pub bundle_status_desc: Option<String>,
    pub posting_date: Option<String>,
    pub borrower_party_identifier: String,
    pub currency: String,
    pub deal_customer_usage_rate: Option<Decimal>,
    pub deal_customer_usage_operation_type: Option<String>,
    pub amount: Decimal,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub spread_rate: Option<Decimal>,
    pub next_due_date: Option<String>,
    pub year_basis: Option<String>,
    pub index_rate_change_frequency: Option<String>,
    pub loan_billing_frequency_type: Option<String>,
    pub product_type_id: String,
    pub product_type_group: String,
    pub loan_instrument_code: String,
}
