use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{
    AcbsUser, CapitalClass, CapitalConversionFactor, Country, CreditReviewRiskType, Currency,
    FacilityCategory, FacilityInitialStatus, FacilityStatus, FacilityType,
    FacilityUserDefinedList1, FacilityUserDefinedList3, FacilityUserDefinedList6,
    IndustryClassification, LenderType, OfficerRiskRatingType, PartyRef, PartySummary,
    PurposeType, RiskMitigation, ServicingUnit, ServicingUnitSection,
};

/// Body of `POST /Portfolio/{portfolio}/Facility`.
///
/// Updates send the same shape, merged over the facility ACBS currently holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsCreateFacilityRequest {
    pub facility_identifier: String,
    pub description: String,
    pub currency: Currency,
    pub original_effective_date: String,
    pub deal_identifier: String,
    pub deal_portfolio_identifier: String,
    pub deal_borrower_party_identifier: String,
    pub expiration_date: String,
    pub is_expiration_date_maximum: bool,
    pub limit_amount: Decimal,
    pub external_reference_identifier: String,
    pub facility_type: FacilityType,
    pub facility_initial_status: FacilityInitialStatus,
    pub facility_overall_status: FacilityStatus,
    pub facility_category: FacilityCategory,
    pub lender_type: LenderType,
    pub borrower_party: PartyRef,
    pub servicing_user: AcbsUser,
    pub administrative_user: AcbsUser,
    pub servicing_unit: ServicingUnit,
    pub servicing_unit_section: ServicingUnitSection,
    pub industry_classification: IndustryClassification,
    pub risk_country: Country,
    pub purpose_type: PurposeType,
    pub capital_class: CapitalClass,
    pub capital_conversion_factor: CapitalConversionFactor,
    pub risk_mitigation: RiskMitigation,
    pub officer_risk_rating_type: OfficerRiskRatingType,
    pub officer_risk_date: String,
    pub is_officer_risk_date_zero: bool,
    pub credit_review_risk_type: CreditReviewRiskType,
    pub credit_review_risk_date: String,
    pub is_credit_review_risk_date_zero: bool,
    pub next_review_date: String,
    pub is_next_review_date_zero: bool,
    pub facility_user_defined_list1: FacilityUserDefinedList1,
    pub facility_user_defined_list3: FacilityUserDefinedList3,
    pub facility_user_defined_list6: FacilityUserDefinedList6,
    pub user_defined_date1: Option<String>,
    pub is_user_defined_date1_zero: bool,
    pub user_defined_date2: String,
    pub is_user_defined_date2_zero: bool,
    pub user_defined_amount3: Decimal,
    pub interest_or_fee_rate: Decimal,
    #[serde(rename = "ProbabilityofDefault")]
    pub probability_of_default: Decimal,
    pub comp_bal_pct_reserve: Decimal,
    pub comp_bal_pct_amount: Decimal,
    pub agent_bank_party_identifier: String,
}

/// Response of `GET /Portfolio/{portfolio}/Facility/{facility}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsGetFacilityResponse {
    pub facility_identifier: String,
    #[serde(default)]
    pub description: Option<String>,
    pub currency: Currency,
    #[serde(default)]
    pub original_effective_date: Option<String>,
    #[serde(default)]
    pub deal_identifier: Option<String>,
    #[serde(default)]
    pub deal_portfolio_identifier: Option<String>,
    #[serde(default)]
    pub deal_borrower_party_identifier: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub limit_amount: Option<Decimal>,
    #[serde(default)]
    pub external_reference_identifier: Option<String>,
    pub facility_type: FacilityType,
    #[serde(default)]
    pub facility_overall_status: Option<FacilityStatus>,
    pub borrower_party: PartySummary,
    #[serde(default)]
    pub industry_classification: Option<IndustryClassification>,
    #[serde(default)]
    pub risk_country: Option<Country>,
    #[serde(default)]
    pub capital_conversion_factor: Option<CapitalConversionFactor>,
    #[serde(default)]
    pub officer_risk_rating_type: Option<OfficerRiskRatingType>,
    #[serde(default)]
    pub credit_review_risk_type: Option<CreditReviewRiskType>,
    #[serde(default)]
    pub facility_user_defined_list1: Option<FacilityUserDefinedList1>,
    #[serde(default)]
    pub facility_user_defined_list3: Option<FacilityUserDefinedList3>,
    #[serde(default)]
    pub facility_user_defined_list6: Option<FacilityUserDefinedList6>,
    #[serde(default)]
    pub user_defined_date1: Option<String>,
    #[serde(default)]
    pub user_defined_date2: Option<String>,
    #[serde(default)]
    pub user_defined_amount3: Option<Decimal>,
    #[serde(default)]
    pub interest_or_fee_rate: Option<Decimal>,
    #[serde(default, rename = "ProbabilityofDefault")]
    pub probability_of_default: Option<Decimal>,
    #[serde(default)]
    pub agent_bank_party_identifier: Option<String>,
}
