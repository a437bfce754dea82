use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::acbs::common::{GuaranteeType, LenderType, LimitType, PartyRef};
use crate::acbs::guarantee::{AcbsCreateGuaranteeRequest, AcbsGetGuaranteeResponse};
use crate::dates::{earliest_of, remove_time_component_if_present, DateOnly};
use crate::defaults::{DefaultValues, GuaranteeDefaults};
use crate::domain::guarantee::{
    CreateDealGuaranteeRequest, CreateFacilityGuaranteeRequest, DealGuarantee, FacilityGuarantee,
};

struct GuaranteeInput<'a> {
    guarantor_party: &'a str,
    limit_key: &'a str,
    effective_date: DateOnly,
    expiry_date: DateOnly,
    maximum_liability: Decimal,
    guarantee_type_code: &'a str,
}

fn build(
    input: GuaranteeInput<'_>,
    guarantee: &GuaranteeDefaults,
    defaults: &DefaultValues,
    today: NaiveDate,
) -> AcbsCreateGuaranteeRequest {
    AcbsCreateGuaranteeRequest {
        lender_type: LenderType::new(&guarantee.lender_type_code),
        section_identifier: defaults.organisation.section_identifier.clone(),
        limit_type: LimitType::new(&defaults.organisation.limit_type_code),
        limit_key: input.limit_key.to_string(),
        guarantor_party: PartyRef::new(input.guarantor_party),
        guarantee_type: GuaranteeType::new(input.guarantee_type_code),
        effective_date: DateOnly::from(earliest_of(today, input.effective_date.date()))
            .to_date_time(),
        expiration_date: input.expiry_date.to_date_time(),
        guaranteed_limit: input.maximum_liability,
        guaranteed_percentage: guarantee.guaranteed_percentage,
    }
}

/// Guarantor and guarantee type fall back to the institution defaults.
pub fn build_create_deal_guarantee(
    request: &CreateDealGuaranteeRequest,
    defaults: &DefaultValues,
    today: NaiveDate,
) -> AcbsCreateGuaranteeRequest {
    let guarantee = &defaults.deal_guarantee;
    let input = GuaranteeInput {
        guarantor_party: request
            .guarantor_party
            .as_deref()
            .unwrap_or(&guarantee.guarantor_party_identifier),
        limit_key: &request.limit_key,
        effective_date: request.effective_date,
        expiry_date: request.guarantee_expiry_date,
        maximum_liability: request.maximum_liability,
        guarantee_type_code: request
            .guarantee_type_code
            .as_deref()
            .unwrap_or(&guarantee.guarantee_type_code),
    };
    build(input, guarantee, defaults, today)
}

pub fn build_create_facility_guarantee(
    request: &CreateFacilityGuaranteeRequest,
    defaults: &DefaultValues,
    today: NaiveDate,
) -> AcbsCreateGuaranteeRequest {
    let input = GuaranteeInput {
        guarantor_party: &request.guarantor_party,
        limit_key: &request.limit_key,
        effective_date: request.effective_date,
        expiry_date: request.guarantee_expiry_date,
        maximum_liability: request.maximum_liability,
        guarantee_type_code: &request.guarantee_type_code,
    };
    build(input, &defaults.facility_guarantee, defaults, today)
}

pub fn deal_guarantee_from_acbs(
    deal_identifier: &str,
    guarantee: AcbsGetGuaranteeResponse,
    defaults: &DefaultValues,
) -> DealGuarantee {
    DealGuarantee {
        portfolio_identifier: defaults.portfolio_identifier.clone(),
        deal_identifier: deal_identifier.to_string(),
        guarantor_party: guarantee.guarantor_party.party_identifier,
        limit_key: guarantee.limit_key,
        effective_date: remove_time_component_if_present(guarantee.effective_date.as_deref()),
        guarantee_expiry_date: remove_time_component_if_present(
            guarantee.expiration_date.as_deref(),
        ),
        maximum_liability: guarantee.guaranteed_limit.unwrap_or_default(),
        guarantee_type_code: guarantee.guarantee_type.guarantee_type_code,
    }
}

pub fn facility_guarantee_from_acbs(
    facility_identifier: &str,
    guarantee: AcbsGetGuaranteeResponse,
    defaults: &DefaultValues,
) -> FacilityGuarantee {
    FacilityGuarantee {
        portfolio_identifier: defaults.portfolio_identifier.clone(),
        facility_identifier: facility_identifier.to_string(),
        guarantor_party: guarantee.guarantor_party.party_identifier,
        limit_key: guarantee.limit_key,
        effective_date: remove_time_component_if_present(guarantee.effective_date.as_deref()),
        guarantee_expiry_date: remove_time_component_if_present(
            guarantee.expiration_date.as_deref(),
        ),
        maximum_liability: guarantee.guaranteed_limit.unwrap_or_default(),
        guarantee_type_code: guarantee.guarantee_type.guarantee_type_code,
    }
}
