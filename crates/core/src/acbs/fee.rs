use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{
    AccountingMethod, Currency, FeeStatus, FixedFeeChargeType, IncomeClass, LenderType, LimitType,
    PartyRef,
};

/// Body of `POST /Portfolio/{portfolio}/Facility/{facility}/Fee`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsCreateFixedFeeRequest {
    pub fixed_fee_amount: Decimal,
    pub fixed_fee_charge_type: FixedFeeChargeType,
    pub section_identifier: String,
    pub limit_type: LimitType,
    pub limit_key_value: String,
    pub involved_party: PartyRef,
    pub segment_identifier: String,
    pub effective_date: String,
    pub expiration_date: String,
    pub next_due_date: String,
    pub next_accrue_to_date: String,
    pub currency: Currency,
    pub lender_type: LenderType,
    pub income_class: IncomeClass,
    pub accounting_method: AccountingMethod,
    pub fee_status: FeeStatus,
    pub description: String,
    pub spread_to_investors_indicator: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsGetFixedFeeResponse {
    #[serde(default)]
    pub fixed_fee_amount: Option<Decimal>,
    #[serde(default)]
    pub effective_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub next_due_date: Option<String>,
    #[serde(default)]
    pub next_accrue_to_date: Option<String>,
    pub segment_identifier: String,
    #[serde(default)]
    pub description: Option<String>,
    pub currency: Currency,
    pub lender_type: LenderType,
    #[serde(default)]
    pub income_class: Option<IncomeClass>,
    #[serde(default)]
    pub involved_party: Option<PartyRef>,
    #[serde(default)]
    pub spread_to_investors_indicator: Option<bool>,
}
