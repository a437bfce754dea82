//! Single-field code objects shared by many ACBS payloads.
//!
//! ACBS wraps almost every code value in its own object, e.g.
//! `{ "FacilityType": { "FacilityTypeCode": "250" } }`.

use serde::{Deserialize, Serialize};

macro_rules! code_object {
    ($($(#[$meta:meta])* $name:ident { $field:ident })+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
            #[serde(rename_all = "PascalCase")]
            pub struct $name {
                pub $field: String,
            }

            impl $name {
                pub fn new(value: impl Into<String>) -> Self {
                    Self { $field: value.into() }
                }
            }
        )+
    };
}

code_object! {
    PartyRef { party_identifier }
    LenderType { lender_type_code }
    LimitType { limit_type_code }
    Country { country_code }
    IndustryClassification { industry_classification_code }
    ServicingUnit { servicing_unit_identifier }
    ServicingUnitSection { servicing_unit_section_identifier }
    OfficerRiskRatingType { officer_risk_rating_type_code }
    CreditReviewRiskType { credit_review_risk_type_code }
    PurposeType { purpose_type_code }
    CapitalClass { capital_class_code }
    CapitalConversionFactor { capital_conversion_factor_code }
    RiskMitigation { risk_mitigation_code }

    DealOrigination { deal_origination_code }
    DealInitialStatus { deal_initial_status_code }
    DealStatus { deal_status_code }
    DealType { deal_type_code }

    FacilityType { facility_type_code }
    FacilityInitialStatus { facility_initial_status_code }
    FacilityStatus { facility_status_code }
    FacilityCategory { facility_category_code }
    FacilityUserDefinedList1 { user_defined_list1_code }
    FacilityUserDefinedList3 { user_defined_list3_code }
    FacilityUserDefinedList6 { user_defined_list6_code }

    GuaranteeType { guarantee_type_code }

    CovenantType { covenant_type_code }
    PledgeType { pledge_type_code }
    ComplianceRule { compliance_rule_code }
    CovenantEvaluationMode { covenant_evaluation_mode_code }

    ProductType { product_type_code }
    ProductGroup { product_group_code }
    OperationType { operation_type_code }
    UsageFrequency { usage_frequency_type_code }
    BusinessDayAdjustment { business_day_adjustment_type_code }
    Calendar { calendar_identifier }
    LoanBillingFrequencyType { loan_billing_frequency_type_code }
    AccrualCategory { accrual_category_code }
    YearBasis { year_basis_code }
    IndexRateChangeFrequency { index_rate_change_frequency_code }

    IncomeClass { income_class_code }
    FixedFeeChargeType { fixed_fee_charge_type_code }
    AccountingMethod { accounting_method_code }
    FeeStatus { fee_status_code }

    FacilityTransactionCodeValue { facility_transaction_code_value_code }
    TransactionType { type_code }

    PartyType { party_type_code }
    PartyStatus { party_status_code }
    MinorityClass { minority_class_code }
    CitizenshipClass { citizenship_class_code }
    AddressType { address_type_code }

    RatingEntity { rating_entity_code }
    AssignedRating { assigned_rating_code }
    ExternalRatingUserCode1 { user_code1 }
    ExternalRatingUserCode2 { user_code2 }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    pub currency_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active_indicator: Option<bool>,
}

impl Currency {
    pub fn active(code: impl Into<String>) -> Self {
        Self { currency_code: code.into(), is_active_indicator: Some(true) }
    }

    pub fn code(code: impl Into<String>) -> Self {
        Self { currency_code: code.into(), is_active_indicator: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsUser {
    pub user_acbs_identifier: String,
    pub user_name: String,
}

impl AcbsUser {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self { user_acbs_identifier: identifier.into(), user_name: name.into() }
    }
}

/// Party reference as ACBS returns it on reads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartySummary {
    pub party_identifier: String,
    #[serde(default)]
    pub party_name1: Option<String>,
}
