use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{Currency, DealStatus, FacilityStatus, LenderType, PartyRef};

/// Body of `POST /Portfolio/{portfolio}/Deal/{deal}/DealParty`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsCreateDealInvestorRequest {
    pub lender_type: LenderType,
    pub section_identifier: String,
    pub effective_date: String,
    pub expiration_date: String,
    pub is_expiration_date_maximum: bool,
    pub limit_amount: Decimal,
    pub limit_key: String,
    pub deal_status: DealStatus,
    pub user_defined_code1: String,
    pub customer_advised_indicator: bool,
    pub limit_revolving_indicator: bool,
    pub currency: Currency,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsGetDealInvestorResponse {
    pub lender_type: LenderType,
    #[serde(default)]
    pub effective_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub is_expiration_date_maximum: bool,
    #[serde(default)]
    pub limit_amount: Option<Decimal>,
    #[serde(default)]
    pub deal_status: Option<DealStatus>,
    pub currency: Currency,
}

/// Body of `POST /Portfolio/{portfolio}/Facility/{facility}/FacilityParty`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsCreateFacilityInvestorRequest {
    pub facility_status: FacilityStatus,
    pub involved_party: PartyRef,
    pub effective_date: String,
    pub expiration_date: String,
    pub lender_type: LenderType,
    pub section_identifier: String,
    pub currency: Currency,
    pub limit_amount: Decimal,
    pub customer_advised_indicator: bool,
    pub limit_revolving_indicator: bool,
    pub user_defined_code1: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsGetFacilityInvestorResponse {
    pub involved_party: PartyRef,
    #[serde(default)]
    pub effective_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    pub lender_type: LenderType,
    pub currency: Currency,
    #[serde(default)]
    pub limit_amount: Option<Decimal>,
}
