use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{
    ComplianceRule, CovenantEvaluationMode, CovenantType, Currency, LenderType, LimitType,
    PledgeType,
};

/// Body of `POST /Portfolio/{portfolio}/Facility/{facility}/Covenant`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsCreateCovenantRequest {
    pub facility_identifier: String,
    pub portfolio_identifier: String,
    pub covenant_identifier: String,
    pub covenant_name: String,
    pub covenant_type: CovenantType,
    pub effective_date: String,
    pub expiration_date: String,
    pub lender_type: LenderType,
    pub limit_key_value: String,
    pub limit_type: LimitType,
    pub section_identifier: String,
    pub account_owner_identifier: String,
    pub compliance_rule: ComplianceRule,
    pub compliance_evaluation_mode: CovenantEvaluationMode,
    pub date_cycle_evaluation_mode: CovenantEvaluationMode,
    pub in_compliance_indicator: bool,
    pub waived_indicator: bool,
    pub target_amount: Decimal,
    pub pledge_type: PledgeType,
    pub currency: Currency,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsGetCovenantResponse {
    pub covenant_identifier: String,
    pub facility_identifier: String,
    pub portfolio_identifier: String,
    pub covenant_type: CovenantType,
    #[serde(default)]
    pub target_amount: Option<Decimal>,
    pub currency: Currency,
    #[serde(default)]
    pub effective_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub limit_key_value: Option<String>,
}
