//! `BundleInformation` is the generic transaction envelope ACBS uses for loan
//! advances, facility activations, new loans and fee amount changes.
//!
//! Each message in `BundleMessageList` is discriminated by its `$type` tag.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{
    AccrualCategory, AcbsUser, BusinessDayAdjustment, Calendar, Currency,
    FacilityTransactionCodeValue, IndexRateChangeFrequency, LenderType, LimitType,
    LoanBillingFrequencyType, OperationType, ProductGroup, ProductType, ServicingUnit,
    ServicingUnitSection, TransactionType, UsageFrequency, YearBasis,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum BundleMessage {
    FacilityCodeValueTransaction(FacilityCodeValueTransaction),
    NewLoanRequest(Box<NewLoanRequest>),
    LoanAdvanceTransaction(LoanAdvanceTransaction),
    FacilityFeeAmountTransaction(FacilityFeeAmountTransaction),
    /// Any message type this service does not create itself.
    #[serde(other)]
    Unknown,
}

impl BundleMessage {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::FacilityCodeValueTransaction(_) => "FacilityCodeValueTransaction",
            Self::NewLoanRequest(_) => "NewLoanRequest",
            Self::LoanAdvanceTransaction(_) => "LoanAdvanceTransaction",
            Self::FacilityFeeAmountTransaction(_) => "FacilityFeeAmountTransaction",
            Self::Unknown => "Unknown",
        }
    }
}

/// Facility activation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FacilityCodeValueTransaction {
    pub account_owner_identifier: String,
    pub effective_date: String,
    pub facility_identifier: String,
    pub facility_transaction_code_value: FacilityTransactionCodeValue,
    pub facility_transaction_type: TransactionType,
    pub is_draft_indicator: bool,
    pub lender_type: LenderType,
    pub limit_key_value: String,
    pub limit_type: LimitType,
    pub section_identifier: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewLoanRequest {
    pub effective_date: String,
    pub facility_identifier: String,
    pub borrower_party_identifier: String,
    pub section_identifier: String,
    pub lender_type: LenderType,
    pub loan_instrument_code: String,
    pub currency: Currency,
    pub loan_amount: Decimal,
    pub product_type: ProductType,
    pub product_group: ProductGroup,
    pub maturity_date: String,
    pub servicing_user: AcbsUser,
    pub administrative_user: AcbsUser,
    pub servicing_unit: ServicingUnit,
    pub servicing_unit_section: ServicingUnitSection,
    pub deal_customer_usage_rate: Option<Decimal>,
    pub deal_customer_usage_operation_type: Option<OperationType>,
    pub financial_rate_group: String,
    pub customer_usage_rate_group: String,
    pub financial_frequency: UsageFrequency,
    pub customer_usage_frequency: UsageFrequency,
    pub financial_business_day_adjustment: BusinessDayAdjustment,
    pub customer_usage_business_day_adjustment: BusinessDayAdjustment,
    pub financial_calendar: Calendar,
    pub customer_usage_calendar: Calendar,
    pub financial_next_valuation_date: String,
    pub customer_usage_next_valuation_date: String,
    #[serde(default)]
    pub accrual_schedule_list: Vec<AccrualSchedule>,
    #[serde(default)]
    pub repayment_schedule_list: Vec<RepaymentSchedule>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccrualSchedule {
    pub accrual_category: AccrualCategory,
    pub effective_date: String,
    pub year_basis: YearBasis,
    pub index_rate_change_frequency: IndexRateChangeFrequency,
    pub spread_rate: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RepaymentSchedule {
    pub loan_billing_frequency_type: LoanBillingFrequencyType,
    pub next_due_date: String,
    pub next_accrue_to_date: String,
    pub billing_due_cycle_day: u32,
    pub billing_calendar: Calendar,
    pub business_day_adjustment: BusinessDayAdjustment,
    pub primary_schedule_indicator: bool,
}

/// Loan amount amendment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoanAdvanceTransaction {
    pub effective_date: String,
    pub loan_identifier: String,
    pub section_identifier: String,
    pub transaction_type: TransactionType,
    pub is_draft_indicator: bool,
    pub loan_advance_amount: Decimal,
}

/// Fixed fee amount amendment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FacilityFeeAmountTransaction {
    pub facility_identifier: String,
    pub effective_date: String,
    pub account_owner_identifier: String,
    pub lender_type: LenderType,
    pub segment_identifier: String,
    pub transaction_amount: Decimal,
    pub is_draft_indicator: bool,
    pub facility_fee_transaction_type: TransactionType,
    pub limit_key_value: String,
    pub limit_type: LimitType,
    pub section_identifier: String,
}

/// Body of `POST /BundleInformation`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsCreateBundleRequest {
    pub portfolio_identifier: String,
    pub initial_bundle_status_code: u32,
    pub initiating_user_name: String,
    #[serde(rename = "UseAPIUserIndicator")]
    pub use_api_user_indicator: bool,
    pub bundle_message_list: Vec<BundleMessage>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BundleStatus {
    pub bundle_status_code: String,
    #[serde(default)]
    pub bundle_status_short_description: Option<String>,
}

/// Response of `GET /BundleInformation/{bundle}?returnItems=true`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsGetBundleResponse {
    pub portfolio_identifier: String,
    #[serde(default)]
    pub initial_bundle_status_code: Option<u32>,
    #[serde(default)]
    pub initiating_user_name: Option<String>,
    #[serde(default, rename = "UseAPIUserIndicator")]
    pub use_api_user_indicator: Option<bool>,
    #[serde(default)]
    pub bundle_status: Option<BundleStatus>,
    #[serde(default)]
    pub posting_date: Option<String>,
    #[serde(default)]
    pub bundle_message_list: Vec<BundleMessage>,
}

/// Identifier ACBS assigned to a new bundle, read from response headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedBundle {
    pub bundle_identifier: String,
    pub warning_errors: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{AcbsGetBundleResponse, BundleMessage};

    #[test]
    fn messages_are_tagged_with_type() {
        let response: AcbsGetBundleResponse = serde_json::from_value(json!({
            "PortfolioIdentifier": "E1",
            "InitialBundleStatusCode": 3,
            "BundleStatus": { "BundleStatusCode": "A", "BundleStatusShortDescription": "Active" },
            "BundleMessageList": [{
                "$type": "LoanAdvanceTransaction",
                "EffectiveDate": "2023-04-19T00:00:00Z",
                "LoanIdentifier": "0000000001",
                "SectionIdentifier": "00",
                "TransactionType": { "TypeCode": "2000" },
                "IsDraftIndicator": false,
                "LoanAdvanceAmount": 1500.5
            }]
        }))
        .expect("bundle deserializes");

        let [BundleMessage::LoanAdvanceTransaction(message)] = response.bundle_message_list.as_slice()
        else {
            panic!("expected a single loan advance message");
        };
        assert_eq!(message.loan_identifier, "0000000001");
    }

    #[test]
    fn unrecognised_message_types_are_kept_as_unknown() {
        let message: BundleMessage =
            serde_json::from_value(json!({ "$type": "AccrualScheduleAmountTransaction", "X": 1 }))
                .expect("unknown message deserializes");

        assert_eq!(message, BundleMessage::Unknown);
        assert_eq!(message.type_name(), "Unknown");
    }
}
