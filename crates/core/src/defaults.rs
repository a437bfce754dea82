//! Institution-wide default values sent to ACBS.
//!
//! Built once at startup and shared read-only (`Arc<DefaultValues>`) with every
//! request builder.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::acbs::common::AcbsUser;

/// Loans in any other currency carry a deal customer usage rate.
pub const DOMESTIC_CURRENCY: &str = "GBP";

#[derive(Clone, Debug, PartialEq)]
pub struct DefaultValues {
    pub portfolio_identifier: String,
    pub organisation: OrganisationDefaults,
    pub deal: DealDefaults,
    pub deal_guarantee: GuaranteeDefaults,
    pub deal_investor: DealInvestorDefaults,
    pub facility: FacilityDefaults,
    pub covenant: CovenantDefaults,
    pub facility_guarantee: GuaranteeDefaults,
    pub facility_investor: FacilityInvestorDefaults,
    pub fixed_fee: FixedFeeDefaults,
    pub loan: LoanDefaults,
    pub bundle: BundleDefaults,
    pub party: PartyDefaults,
    pub party_external_rating: PartyExternalRatingDefaults,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrganisationDefaults {
    pub account_owner_identifier: String,
    pub section_identifier: String,
    pub limit_type_code: String,
    pub servicing_unit_identifier: String,
    pub servicing_unit_section_identifier: String,
    pub servicing_user: AcbsUser,
    pub administrative_user: AcbsUser,
    pub financial_rate_group: String,
    pub risk_country_code: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DealDefaults {
    pub deal_origination_code: String,
    pub is_deal_syndication_indicator: bool,
    pub deal_initial_status_code: String,
    pub deal_overall_status_code: String,
    pub deal_type_code: String,
    pub officer_risk_rating_type_code: String,
    pub purpose_type_code: String,
    pub capital_class_code: String,
    pub capital_conversion_factor_code: String,
    pub description_obligor_name_length: usize,
    pub deal_value_fallback: Decimal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GuaranteeDefaults {
    pub lender_type_code: String,
    pub guarantor_party_identifier: String,
    pub guarantee_type_code: String,
    pub guaranteed_percentage: Decimal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DealInvestorDefaults {
    pub lender_type_code: String,
    pub limit_key: String,
    pub deal_status_code: String,
    pub user_defined_code1: String,
    pub customer_advised_indicator: bool,
    pub limit_revolving_indicator: bool,
    pub limit_amount: Decimal,
}

/// Keyed lookup with a fallback for unknown keys.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyedDefault<T> {
    pub by_key: BTreeMap<String, T>,
    pub fallback: T,
}

impl<T: Clone> KeyedDefault<T> {
    pub fn get(&self, key: &str) -> T {
        self.by_key.get(key).cloned().unwrap_or_else(|| self.fallback.clone())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FacilityDefaults {
    pub facility_initial_status_code: String,
    pub facility_overall_status_code: String,
    pub facility_category_code: String,
    pub lender_type_code: String,
    pub officer_risk_rating_type_code: String,
    pub credit_review_risk_type_code: String,
    pub purpose_type_code: String,
    pub capital_class_code: String,
    pub capital_conversion_factor_code: KeyedDefault<String>,
    pub risk_mitigation_code: String,
    pub delegation_type: String,
    pub premium_frequency_code: String,
    pub unissued_stage_code: String,
    pub issued_stage_code: String,
    pub unissued_comp_bal_pct_reserve: Decimal,
    pub issued_comp_bal_pct_reserve: Decimal,
    pub comp_bal_pct_amount: Decimal,
    pub description_product_name_length: usize,
    pub probability_of_default: Decimal,
    pub forecast_percentage_fallback: Decimal,
    pub interest_or_fee_rate_fallback: Decimal,
    /// Returned by ACBS on reads but rejected on updates.
    pub read_only_fields: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CovenantDefaults {
    pub lender_type_code: String,
    pub evaluation_mode_code: String,
    pub compliance_rule_code: String,
    pub pledge_type_code: String,
    pub in_compliance_indicator: bool,
    pub waived_indicator: bool,
    pub covenant_name: KeyedDefault<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FacilityInvestorDefaults {
    pub lender_type_code: String,
    pub involved_party_identifier: String,
    pub facility_status_code: String,
    pub user_defined_code1: String,
    pub customer_advised_indicator: bool,
    pub limit_revolving_indicator: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FixedFeeDefaults {
    pub lender_type_code: String,
    pub income_class_code: String,
    pub fixed_fee_charge_type_code: String,
    pub accounting_method_code: String,
    pub fee_status_code: String,
    pub description: String,
    pub spread_to_investors_indicator: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoanDefaults {
    pub loan_instrument_code: KeyedDefault<String>,
    pub product_group_code: KeyedDefault<String>,
    pub foreign_operation_type_code: String,
    pub usage_frequency_type_code: String,
    pub business_day_adjustment_type_code: String,
    pub calendar_identifier: String,
    pub accrual_category_code: String,
    pub year_basis_code: String,
    pub index_rate_change_frequency_code: String,
    pub billing_frequency_code: String,
    pub billing_frequency_months: KeyedDefault<u32>,
    pub amount_fallback: Decimal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BundleDefaults {
    pub servicing_queue_identifier: String,
    pub initial_bundle_status_code: u32,
    pub initiating_user_name: String,
    pub use_api_user_indicator: bool,
    pub facility_activation_type_code: String,
    pub facility_activation_code_value: String,
    pub loan_advance_type_code: String,
    pub fee_amount_increase_type_code: String,
    pub fee_amount_decrease_type_code: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PartyDefaults {
    pub party_type_code: String,
    pub party_status_code: String,
    pub officer_risk_rating_type_code: String,
    pub address_identifier: String,
    pub address_type_code: String,
    pub short_name_length: usize,
    pub sort_name_length: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PartyExternalRatingDefaults {
    pub rating_entity_code: String,
    pub probability_of_default: Decimal,
    pub loss_given_default: Decimal,
    pub risk_weighting: Decimal,
    pub external_rating_note: String,
    pub external_rating_user_code: String,
}

fn keyed<T: Clone>(entries: &[(&str, T)], fallback: T) -> KeyedDefault<T> {
    KeyedDefault {
        by_key: entries.iter().map(|(key, value)| (key.to_string(), value.clone())).collect(),
        fallback,
    }
}

fn keyed_strings(entries: &[(&str, &str)], fallback: &str) -> KeyedDefault<String> {
    keyed(
        &entries.iter().map(|(key, value)| (*key, value.to_string())).collect::<Vec<_>>(),
        fallback.to_string(),
    )
}

impl Default for DefaultValues {
    fn default() -> Self {
        let operations_user = AcbsUser::new("OPERATIONS", "OPERATIONS");

        Self {
            portfolio_identifier: "E1".to_string(),
            organisation: OrganisationDefaults {
                account_owner_identifier: "00000000".to_string(),
                section_identifier: "00".to_string(),
                limit_type_code: "00".to_string(),
                servicing_unit_identifier: "ACBSUNIT".to_string(),
                servicing_unit_section_identifier: "ACBSUNITSECTION".to_string(),
                servicing_user: operations_user.clone(),
                administrative_user: operations_user,
                financial_rate_group: "UKRATEGRP".to_string(),
                risk_country_code: "GBR".to_string(),
            },
            deal: DealDefaults {
                deal_origination_code: "C".to_string(),
                is_deal_syndication_indicator: true,
                deal_initial_status_code: "A".to_string(),
                deal_overall_status_code: "A".to_string(),
                deal_type_code: "500".to_string(),
                officer_risk_rating_type_code: "03".to_string(),
                purpose_type_code: "1".to_string(),
                capital_class_code: "A".to_string(),
                capital_conversion_factor_code: "8".to_string(),
                description_obligor_name_length: 19,
                deal_value_fallback: Decimal::ZERO,
            },
            deal_guarantee: GuaranteeDefaults {
                lender_type_code: "500".to_string(),
                guarantor_party_identifier: "00000141".to_string(),
                guarantee_type_code: "450".to_string(),
                guaranteed_percentage: Decimal::ONE_HUNDRED,
            },
            deal_investor: DealInvestorDefaults {
                lender_type_code: "500".to_string(),
                limit_key: "00000000".to_string(),
                deal_status_code: "A".to_string(),
                user_defined_code1: "000".to_string(),
                customer_advised_indicator: true,
                limit_revolving_indicator: true,
                limit_amount: Decimal::ZERO,
            },
            facility: FacilityDefaults {
                facility_initial_status_code: "PEND".to_string(),
                facility_overall_status_code: "A".to_string(),
                facility_category_code: "A".to_string(),
                lender_type_code: "100".to_string(),
                officer_risk_rating_type_code: "14".to_string(),
                credit_review_risk_type_code: "03".to_string(),
                purpose_type_code: "1".to_string(),
                capital_class_code: "A".to_string(),
                capital_conversion_factor_code: keyed_strings(
                    &[("250", "8"), ("260", "9"), ("280", "8")],
                    "8",
                ),
                risk_mitigation_code: String::new(),
                delegation_type: "A".to_string(),
                premium_frequency_code: "1".to_string(),
                unissued_stage_code: "06".to_string(),
                issued_stage_code: "07".to_string(),
                unissued_comp_bal_pct_reserve: Decimal::ONE_HUNDRED,
                issued_comp_bal_pct_reserve: Decimal::ZERO,
                comp_bal_pct_amount: Decimal::ZERO,
                description_product_name_length: 13,
                probability_of_default: Decimal::new(14, 2),
                forecast_percentage_fallback: Decimal::ZERO,
                interest_or_fee_rate_fallback: Decimal::ZERO,
                read_only_fields: vec!["AdministrativeUser".to_string()],
            },
            covenant: CovenantDefaults {
                lender_type_code: "100".to_string(),
                evaluation_mode_code: "M".to_string(),
                compliance_rule_code: "GE".to_string(),
                pledge_type_code: "PLEDGE".to_string(),
                in_compliance_indicator: true,
                waived_indicator: false,
                covenant_name: keyed_strings(
                    &[
                        ("43", "UK CONTRACT VALUE"),
                        ("46", "CHARGEABLE AMOUNT"),
                        ("47", "CHARGEABLE AMOUNT IN FOREIGN CURRENCY"),
                    ],
                    "COVENANT",
                ),
            },
            facility_guarantee: GuaranteeDefaults {
                lender_type_code: "100".to_string(),
                guarantor_party_identifier: "00000141".to_string(),
                guarantee_type_code: "315".to_string(),
                guaranteed_percentage: Decimal::ONE_HUNDRED,
            },
            facility_investor: FacilityInvestorDefaults {
                lender_type_code: "500".to_string(),
                involved_party_identifier: "00000000".to_string(),
                facility_status_code: "A".to_string(),
                user_defined_code1: "000".to_string(),
                customer_advised_indicator: true,
                limit_revolving_indicator: true,
            },
            fixed_fee: FixedFeeDefaults {
                lender_type_code: "100".to_string(),
                income_class_code: "BPM".to_string(),
                fixed_fee_charge_type_code: "2".to_string(),
                accounting_method_code: "A".to_string(),
                fee_status_code: "A".to_string(),
                description: "Bond Support Premium".to_string(),
                spread_to_investors_indicator: true,
            },
            loan: LoanDefaults {
                loan_instrument_code: keyed_strings(
                    &[("250", "9100"), ("260", "9200"), ("280", "9300")],
                    "9100",
                ),
                product_group_code: keyed_strings(
                    &[("250", "BS"), ("260", "EW"), ("280", "GM")],
                    "BS",
                ),
                foreign_operation_type_code: "M".to_string(),
                usage_frequency_type_code: "0".to_string(),
                business_day_adjustment_type_code: "S".to_string(),
                calendar_identifier: "UK".to_string(),
                accrual_category_code: "PAC01".to_string(),
                year_basis_code: "5".to_string(),
                index_rate_change_frequency_code: String::new(),
                billing_frequency_code: "Q".to_string(),
                billing_frequency_months: keyed(&[("M", 1), ("Q", 3), ("S", 6), ("A", 12)], 3),
                amount_fallback: Decimal::ZERO,
            },
            bundle: BundleDefaults {
                servicing_queue_identifier: "DCIS".to_string(),
                initial_bundle_status_code: 3,
                initiating_user_name: "APIUKEF".to_string(),
                use_api_user_indicator: false,
                facility_activation_type_code: "3403".to_string(),
                facility_activation_code_value: "A".to_string(),
                loan_advance_type_code: "2000".to_string(),
                fee_amount_increase_type_code: "1700".to_string(),
                fee_amount_decrease_type_code: "1701".to_string(),
            },
            party: PartyDefaults {
                party_type_code: "100".to_string(),
                party_status_code: "A".to_string(),
                officer_risk_rating_type_code: "02".to_string(),
                address_identifier: "01".to_string(),
                address_type_code: "01".to_string(),
                short_name_length: 15,
                sort_name_length: 20,
            },
            party_external_rating: PartyExternalRatingDefaults {
                rating_entity_code: "1".to_string(),
                probability_of_default: Decimal::ZERO,
                loss_given_default: Decimal::ZERO,
                risk_weighting: Decimal::ZERO,
                external_rating_note: String::new(),
                external_rating_user_code: String::new(),
            },
        }
    }
}
