use crate::acbs::common::{
    AccountingMethod, Currency, FeeStatus, FixedFeeChargeType, IncomeClass, LenderType, LimitType,
    PartyRef,
};
use crate::acbs::fee::{AcbsCreateFixedFeeRequest, AcbsGetFixedFeeResponse};
use crate::dates::remove_time_component_if_present;
use crate::defaults::DefaultValues;
use crate::domain::fee::{CreateFixedFeeRequest, FixedFee};

pub fn build_create_fixed_fee(
    request: &CreateFixedFeeRequest,
    defaults: &DefaultValues,
) -> AcbsCreateFixedFeeRequest {
    let fee = &defaults.fixed_fee;
    let organisation = &defaults.organisation;

    AcbsCreateFixedFeeRequest {
        fixed_fee_amount: request.amount,
        fixed_fee_charge_type: FixedFeeChargeType::new(&fee.fixed_fee_charge_type_code),
        section_identifier: organisation.section_identifier.clone(),
        limit_type: LimitType::new(&organisation.limit_type_code),
        limit_key_value: request.party_identifier.clone(),
        involved_party: PartyRef::new(&request.party_identifier),
        segment_identifier: request.period.clone(),
        effective_date: request.effective_date.to_date_time(),
        expiration_date: request.expiration_date.to_date_time(),
        next_due_date: request.next_due_date.to_date_time(),
        next_accrue_to_date: request.next_accrue_to_date.to_date_time(),
        currency: Currency::active(&request.currency),
        lender_type: LenderType::new(&request.lender_type_code),
        income_class: IncomeClass::new(
            request.income_class_code.as_deref().unwrap_or(&fee.income_class_code),
        ),
        accounting_method: AccountingMethod::new(&fee.accounting_method_code),
        fee_status: FeeStatus::new(&fee.fee_status_code),
        description: fee.description.clone(),
        spread_to_investors_indicator: request
            .spread_to_investors_indicator
            .unwrap_or(fee.spread_to_investors_indicator),
    }
}

pub fn fixed_fee_from_acbs(
    facility_identifier: &str,
    fee: AcbsGetFixedFeeResponse,
    defaults: &DefaultValues,
) -> FixedFee {
    FixedFee {
        facility_identifier: facility_identifier.to_string(),
        portfolio_identifier: defaults.portfolio_identifier.clone(),
        amount: fee.fixed_fee_amount.unwrap_or_default(),
        effective_date: remove_time_component_if_present(fee.effective_date.as_deref()),
        expiration_date: remove_time_component_if_present(fee.expiration_date.as_deref()),
        next_due_date: remove_time_component_if_present(fee.next_due_date.as_deref()),
        next_accrue_to_date: remove_time_component_if_present(fee.next_accrue_to_date.as_deref()),
        period: fee.segment_identifier,
        description: fee.description,
        currency: fee.currency.currency_code,
        lender_type_code: fee.lender_type.lender_type_code,
        income_class_code: fee.income_class.map(|class| class.income_class_code),
        party_identifier: fee.involved_party.map(|party| party.party_identifier),
        spread_to_investors_indicator: fee.spread_to_investors_indicator,
    }
}
