//! Guarantees hang off both deals (`DealGuarantee`) and facilities
//! (`FacilityGuarantee`) with an identical wire shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{GuaranteeType, LenderType, LimitType, PartyRef};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsCreateGuaranteeRequest {
    pub lender_type: LenderType,
    pub section_identifier: String,
    pub limit_type: LimitType,
    pub limit_key: String,
    pub guarantor_party: PartyRef,
    pub guarantee_type: GuaranteeType,
    pub effective_date: String,
    pub expiration_date: String,
    pub guaranteed_limit: Decimal,
    pub guaranteed_percentage: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsGetGuaranteeResponse {
    #[serde(default)]
    pub effective_date: Option<String>,
    pub guarantor_party: PartyRef,
    pub limit_key: String,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub guaranteed_limit: Option<Decimal>,
    pub guarantee_type: GuaranteeType,
}
