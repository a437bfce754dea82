use chrono::NaiveDate;

use crate::acbs::common::{Currency, DealStatus, FacilityStatus, LenderType, PartyRef};
use crate::acbs::investor::{
    AcbsCreateDealInvestorRequest, AcbsCreateFacilityInvestorRequest,
    AcbsGetDealInvestorResponse, AcbsGetFacilityInvestorResponse,
};
use crate::dates::{earliest_of, remove_time_component_if_present, DateOnly, MAXIMUM_DATE_TIME};
use crate::defaults::DefaultValues;
use crate::domain::investor::{
    CreateDealInvestorRequest, CreateFacilityInvestorRequest, DealInvestor, FacilityInvestor,
};

/// Without an expiry date the investor runs to the ACBS maximum date.
pub fn build_create_deal_investor(
    request: &CreateDealInvestorRequest,
    defaults: &DefaultValues,
    today: NaiveDate,
) -> AcbsCreateDealInvestorRequest {
    let investor = &defaults.deal_investor;
    let (expiration_date, is_expiration_date_maximum) = match request.expiry_date {
        Some(expiry_date) => (expiry_date.to_date_time(), false),
        None => (MAXIMUM_DATE_TIME.to_string(), true),
    };

    AcbsCreateDealInvestorRequest {
        lender_type: LenderType::new(
            request.lender_type.as_deref().unwrap_or(&investor.lender_type_code),
        ),
        section_identifier: defaults.organisation.section_identifier.clone(),
        effective_date: DateOnly::from(earliest_of(today, request.effective_date.date()))
            .to_date_time(),
        expiration_date,
        is_expiration_date_maximum,
        limit_amount: investor.limit_amount,
        limit_key: investor.limit_key.clone(),
        deal_status: DealStatus::new(
            request.deal_status.as_deref().unwrap_or(&investor.deal_status_code),
        ),
        user_defined_code1: investor.user_defined_code1.clone(),
        customer_advised_indicator: investor.customer_advised_indicator,
        limit_revolving_indicator: investor.limit_revolving_indicator,
        currency: Currency::active(&request.currency),
    }
}

pub fn deal_investor_from_acbs(
    deal_identifier: &str,
    investor: AcbsGetDealInvestorResponse,
    defaults: &DefaultValues,
) -> DealInvestor {
    DealInvestor {
        portfolio_identifier: defaults.portfolio_identifier.clone(),
        deal_identifier: deal_identifier.to_string(),
        lender_type_code: investor.lender_type.lender_type_code,
        effective_date: remove_time_component_if_present(investor.effective_date.as_deref()),
        expiry_date: remove_time_component_if_present(investor.expiration_date.as_deref()),
        is_expiry_date_maximum: investor.is_expiration_date_maximum,
        maximum_liability: investor.limit_amount.unwrap_or(defaults.deal_investor.limit_amount),
        deal_status_code: investor.deal_status.map(|status| status.deal_status_code),
        currency: investor.currency.currency_code,
    }
}

pub fn build_create_facility_investor(
    request: &CreateFacilityInvestorRequest,
    defaults: &DefaultValues,
    today: NaiveDate,
) -> AcbsCreateFacilityInvestorRequest {
    let investor = &defaults.facility_investor;

    AcbsCreateFacilityInvestorRequest {
        facility_status: FacilityStatus::new(&investor.facility_status_code),
        involved_party: PartyRef::new(&investor.involved_party_identifier),
        effective_date: DateOnly::from(earliest_of(today, request.effective_date.date()))
            .to_date_time(),
        expiration_date: request.guarantee_expiry_date.to_date_time(),
        lender_type: LenderType::new(
            request.lender_type.as_deref().unwrap_or(&investor.lender_type_code),
        ),
        section_identifier: defaults.organisation.section_identifier.clone(),
        currency: Currency::active(&request.currency),
        limit_amount: request.maximum_liability,
        customer_advised_indicator: investor.customer_advised_indicator,
        limit_revolving_indicator: investor.limit_revolving_indicator,
        user_defined_code1: investor.user_defined_code1.clone(),
    }
}

pub fn facility_investor_from_acbs(
    facility_identifier: &str,
    investor: AcbsGetFacilityInvestorResponse,
    defaults: &DefaultValues,
) -> FacilityInvestor {
    FacilityInvestor {
        portfolio_identifier: defaults.portfolio_identifier.clone(),
        facility_identifier: facility_identifier.to_string(),
        involved_party: investor.involved_party.party_identifier,
        effective_date: remove_time_component_if_present(investor.effective_date.as_deref()),
        guarantee_expiry_date: remove_time_component_if_present(
            investor.expiration_date.as_deref(),
        ),
        currency: investor.currency.currency_code,
        maximum_liability: investor.limit_amount.unwrap_or_default(),
        lender_type_code: investor.lender_type.lender_type_code,
    }
}
