use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{into_fields, merge_snapshot, truncate, Snapshot};
use crate::acbs::common::{
    CapitalClass, CapitalConversionFactor, Country, CreditReviewRiskType, Currency,
    FacilityCategory, FacilityInitialStatus, FacilityStatus, FacilityType,
    FacilityUserDefinedList1, FacilityUserDefinedList3, FacilityUserDefinedList6,
    IndustryClassification, LenderType, OfficerRiskRatingType, PartyRef, PurposeType,
    RiskMitigation, ServicingUnit, ServicingUnitSection,
};
use crate::acbs::facility::{AcbsCreateFacilityRequest, AcbsGetFacilityResponse};
use crate::dates::{earliest_of, remove_time_component_if_present, DateOnly, MAXIMUM_DATE_TIME};
use crate::defaults::{DefaultValues, FacilityDefaults};
use crate::domain::facility::{Facility, FacilityFields, FacilityUpdateOperation};

const DESCRIPTION_SEPARATOR: &str = " : ";

/// Fields that depend on whether the facility has been issued.
struct StageDependent {
    comp_bal_pct_reserve: Decimal,
    user_defined_date1: Option<String>,
    is_user_defined_date1_zero: bool,
}

fn stage_dependent(fields: &FacilityFields, facility: &FacilityDefaults) -> StageDependent {
    if fields.facility_stage_code == facility.unissued_stage_code {
        return StageDependent {
            comp_bal_pct_reserve: facility.unissued_comp_bal_pct_reserve,
            user_defined_date1: None,
            is_user_defined_date1_zero: true,
        };
    }

    StageDependent {
        comp_bal_pct_reserve: facility.issued_comp_bal_pct_reserve,
        user_defined_date1: fields.issue_date.map(DateOnly::to_date_time),
        is_user_defined_date1_zero: false,
    }
}

pub fn build_create_facility(
    facility_identifier: &str,
    fields: &FacilityFields,
    defaults: &DefaultValues,
    today: NaiveDate,
) -> AcbsCreateFacilityRequest {
    let facility = &defaults.facility;
    let organisation = &defaults.organisation;
    let stage = stage_dependent(fields, facility);
    let effective_date =
        DateOnly::from(earliest_of(today, fields.effective_date.date())).to_date_time();
    let capital_conversion_factor_code = fields
        .capital_conversion_factor_code
        .clone()
        .unwrap_or_else(|| facility.capital_conversion_factor_code.get(&fields.product_type_id));

    AcbsCreateFacilityRequest {
        facility_identifier: facility_identifier.to_string(),
        description: format!(
            "{}{DESCRIPTION_SEPARATOR}{} Months",
            truncate(&fields.product_type_name, facility.description_product_name_length),
            fields.exposure_period
        ),
        currency: Currency::active(&fields.currency),
        original_effective_date: effective_date.clone(),
        deal_identifier: fields.deal_identifier.clone(),
        deal_portfolio_identifier: defaults.portfolio_identifier.clone(),
        deal_borrower_party_identifier: fields.deal_borrower_identifier.clone(),
        expiration_date: fields.guarantee_expiry_date.to_date_time(),
        is_expiration_date_maximum: false,
        limit_amount: fields.maximum_liability,
        external_reference_identifier: fields.exposure_period.clone(),
        facility_type: FacilityType::new(&fields.product_type_id),
        facility_initial_status: FacilityInitialStatus::new(&facility.facility_initial_status_code),
        facility_overall_status: FacilityStatus::new(&facility.facility_overall_status_code),
        facility_category: FacilityCategory::new(&facility.facility_category_code),
        lender_type: LenderType::new(&facility.lender_type_code),
        borrower_party: PartyRef::new(&fields.obligor_party_identifier),
        servicing_user: organisation.servicing_user.clone(),
        administrative_user: organisation.administrative_user.clone(),
        servicing_unit: ServicingUnit::new(&organisation.servicing_unit_identifier),
        servicing_unit_section: ServicingUnitSection::new(
            &organisation.servicing_unit_section_identifier,
        ),
        industry_classification: IndustryClassification::new(
            &fields.obligor_industry_classification,
        ),
        risk_country: Country::new(
            fields.risk_country_code.as_deref().unwrap_or(&organisation.risk_country_code),
        ),
        purpose_type: PurposeType::new(&facility.purpose_type_code),
        capital_class: CapitalClass::new(&facility.capital_class_code),
        capital_conversion_factor: CapitalConversionFactor::new(capital_conversion_factor_code),
        risk_mitigation: RiskMitigation::new(&facility.risk_mitigation_code),
        officer_risk_rating_type: OfficerRiskRatingType::new(
            fields.credit_rating_code.as_deref().unwrap_or(&facility.officer_risk_rating_type_code),
        ),
        officer_risk_date: effective_date.clone(),
        is_officer_risk_date_zero: false,
        credit_review_risk_type: CreditReviewRiskType::new(
            fields.risk_status_code.as_deref().unwrap_or(&facility.credit_review_risk_type_code),
        ),
        credit_review_risk_date: effective_date,
        is_credit_review_risk_date_zero: false,
        next_review_date: MAXIMUM_DATE_TIME.to_string(),
        is_next_review_date_zero: true,
        facility_user_defined_list1: FacilityUserDefinedList1::new(&fields.facility_stage_code),
        facility_user_defined_list3: FacilityUserDefinedList3::new(&fields.delegation_type),
        facility_user_defined_list6: FacilityUserDefinedList6::new(&fields.premium_frequency_code),
        user_defined_date1: stage.user_defined_date1,
        is_user_defined_date1_zero: stage.is_user_defined_date1_zero,
        user_defined_date2: fields.next_quarter_end_date.to_date_time(),
        is_user_defined_date2_zero: false,
        user_defined_amount3: fields.forecast_percentage,
        interest_or_fee_rate: fields.interest_or_fee_rate,
        probability_of_default: fields.probability_of_default,
        comp_bal_pct_reserve: stage.comp_bal_pct_reserve,
        comp_bal_pct_amount: facility.comp_bal_pct_amount,
        agent_bank_party_identifier: fields.agent_bank_identifier.clone(),
    }
}

/// Overlays the full facility over `snapshot`. Issuing also forces the issued
/// stage code, which in turn selects the issued reserve and issue date.
pub fn build_update_facility(
    facility_identifier: &str,
    fields: &FacilityFields,
    operation: FacilityUpdateOperation,
    snapshot: Snapshot,
    defaults: &DefaultValues,
    today: NaiveDate,
) -> Snapshot {
    let overlay = match operation {
        FacilityUpdateOperation::Issue => {
            let issued = FacilityFields {
                facility_stage_code: defaults.facility.issued_stage_code.clone(),
                ..fields.clone()
            };
            build_create_facility(facility_identifier, &issued, defaults, today)
        }
        FacilityUpdateOperation::AmendExpiryDate => {
            build_create_facility(facility_identifier, fields, defaults, today)
        }
    };

    merge_snapshot(snapshot, into_fields(&overlay), &defaults.facility.read_only_fields)
}

pub fn facility_from_acbs(facility: AcbsGetFacilityResponse, defaults: &DefaultValues) -> Facility {
    let fallbacks = &defaults.facility;
    let product_type_name = facility.description.as_deref().map(|description| {
        description
            .split_once(DESCRIPTION_SEPARATOR)
            .map_or(description, |(name, _)| name)
            .to_string()
    });

    Facility {
        facility_identifier: facility.facility_identifier,
        portfolio_identifier: defaults.portfolio_identifier.clone(),
        deal_identifier: facility.deal_identifier,
        deal_borrower_identifier: facility.deal_borrower_party_identifier,
        currency: facility.currency.currency_code,
        maximum_liability: facility.limit_amount.unwrap_or_default(),
        product_type_id: facility.facility_type.facility_type_code,
        product_type_name,
        exposure_period: facility.external_reference_identifier,
        capital_conversion_factor_code: facility
            .capital_conversion_factor
            .map(|factor| factor.capital_conversion_factor_code),
        guarantee_expiry_date: remove_time_component_if_present(
            facility.expiration_date.as_deref(),
        ),
        effective_date: remove_time_component_if_present(
            facility.original_effective_date.as_deref(),
        ),
        issue_date: remove_time_component_if_present(facility.user_defined_date1.as_deref()),
        next_quarter_end_date: remove_time_component_if_present(
            facility.user_defined_date2.as_deref(),
        ),
        facility_stage_code: facility
            .facility_user_defined_list1
            .map(|list| list.user_defined_list1_code),
        delegation_type: facility.facility_user_defined_list3.map(|list| list.user_defined_list3_code),
        interest_or_fee_rate: facility
            .interest_or_fee_rate
            .unwrap_or(fallbacks.interest_or_fee_rate_fallback),
        forecast_percentage: facility
            .user_defined_amount3
            .unwrap_or(fallbacks.forecast_percentage_fallback),
        agent_bank_identifier: facility.agent_bank_party_identifier,
        obligor_party_identifier: facility.borrower_party.party_identifier,
        obligor_name: facility.borrower_party.party_name1,
        obligor_industry_classification: facility
            .industry_classification
            .map(|classification| classification.industry_classification_code),
        risk_country_code: facility.risk_country.map(|country| country.country_code),
        premium_frequency_code: facility
            .facility_user_defined_list6
            .map(|list| list.user_defined_list6_code),
        risk_status_code: facility
            .credit_review_risk_type
            .map(|risk| risk.credit_review_risk_type_code),
        credit_rating_code: facility
            .officer_risk_rating_type
            .map(|rating| rating.officer_risk_rating_type_code),
        probability_of_default: facility
            .probability_of_default
            .unwrap_or(fallbacks.probability_of_default),
        facility_overall_status: facility
            .facility_overall_status
            .map(|status| status.facility_status_code),
    }
}
