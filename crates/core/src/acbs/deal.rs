use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{
    AcbsUser, CapitalClass, CapitalConversionFactor, Country, Currency, DealInitialStatus,
    DealOrigination, DealStatus, DealType, IndustryClassification, OfficerRiskRatingType,
    PartyRef, PartySummary, PurposeType, ServicingUnit, ServicingUnitSection,
};

/// Body of `POST /Portfolio/{portfolio}/Deal`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsCreateDealRequest {
    pub deal_identifier: String,
    pub deal_origination: DealOrigination,
    pub is_deal_syndication_indicator: bool,
    pub deal_initial_status: DealInitialStatus,
    pub deal_overall_status: DealStatus,
    pub deal_type: DealType,
    pub description: String,
    pub currency: Currency,
    pub original_effective_date: String,
    pub original_approval_date: String,
    pub target_closing_date: String,
    pub expiration_date: String,
    pub is_expiration_date_maximum: bool,
    pub limit_amount: Decimal,
    pub withheld_amount: Decimal,
    pub memo_limit_amount: Decimal,
    pub memo_used_amount: Decimal,
    pub memo_available_amount: Decimal,
    pub memo_withheld_amount: Decimal,
    pub borrower_party: PartyRef,
    pub servicing_unit: ServicingUnit,
    pub servicing_unit_section: ServicingUnitSection,
    pub servicing_user: AcbsUser,
    pub administrative_user: AcbsUser,
    pub officer_risk_rating_type: OfficerRiskRatingType,
    pub officer_risk_date: String,
    pub is_officer_risk_date_zero: bool,
    pub industry_classification: IndustryClassification,
    pub risk_country: Country,
    pub purpose_type: PurposeType,
    pub capital_class: CapitalClass,
    pub capital_conversion_factor: CapitalConversionFactor,
    pub financial_rate_group: String,
    pub customer_financial_rate_group: String,
}

/// Response of `GET /Portfolio/{portfolio}/Deal/{deal}`, reduced to the fields
/// the public API exposes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsGetDealResponse {
    pub deal_identifier: String,
    pub portfolio_identifier: String,
    #[serde(default)]
    pub description: Option<String>,
    pub currency: Currency,
    #[serde(default)]
    pub limit_amount: Option<Decimal>,
    #[serde(default)]
    pub original_effective_date: Option<String>,
    pub borrower_party: PartySummary,
    #[serde(default)]
    pub industry_classification: Option<IndustryClassification>,
}
