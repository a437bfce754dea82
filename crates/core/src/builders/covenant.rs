use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{into_fields, merge_snapshot, Snapshot};
use crate::acbs::common::{
    ComplianceRule, CovenantEvaluationMode, CovenantType, Currency, LenderType, LimitType,
    PledgeType,
};
use crate::acbs::covenant::{AcbsCreateCovenantRequest, AcbsGetCovenantResponse};
use crate::dates::{earliest_of, remove_time_component_if_present, DateOnly};
use crate::defaults::DefaultValues;
use crate::domain::covenant::{Covenant, CreateCovenantRequest, UpdateCovenantsRequest};

pub const COVENANT_IDENTIFIER_FIELD: &str = "CovenantIdentifier";

pub fn build_create_covenant(
    facility_identifier: &str,
    request: &CreateCovenantRequest,
    defaults: &DefaultValues,
    today: NaiveDate,
) -> AcbsCreateCovenantRequest {
    let covenant = &defaults.covenant;
    let organisation = &defaults.organisation;

    AcbsCreateCovenantRequest {
        facility_identifier: facility_identifier.to_string(),
        portfolio_identifier: defaults.portfolio_identifier.clone(),
        covenant_identifier: request.covenant_identifier.clone(),
        covenant_name: covenant.covenant_name.get(&request.covenant_type),
        covenant_type: CovenantType::new(&request.covenant_type),
        effective_date: DateOnly::from(earliest_of(today, request.effective_date.date()))
            .to_date_time(),
        expiration_date: request.expiration_date.to_date_time(),
        lender_type: LenderType::new(&covenant.lender_type_code),
        limit_key_value: request.obligor_party_identifier.clone(),
        limit_type: LimitType::new(&organisation.limit_type_code),
        section_identifier: organisation.section_identifier.clone(),
        account_owner_identifier: organisation.account_owner_identifier.clone(),
        compliance_rule: ComplianceRule::new(&covenant.compliance_rule_code),
        compliance_evaluation_mode: CovenantEvaluationMode::new(&covenant.evaluation_mode_code),
        date_cycle_evaluation_mode: CovenantEvaluationMode::new(&covenant.evaluation_mode_code),
        in_compliance_indicator: covenant.in_compliance_indicator,
        waived_indicator: covenant.waived_indicator,
        target_amount: request.maximum_liability,
        pledge_type: PledgeType::new(&covenant.pledge_type_code),
        currency: Currency::active(&request.currency),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CovenantChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_amount: Option<Decimal>,
}

/// Replaces expiry and target amount on one covenant, keeping everything else
/// ACBS returned.
pub fn build_update_covenant(snapshot: Snapshot, request: &UpdateCovenantsRequest) -> Snapshot {
    let changes = CovenantChanges {
        expiration_date: request.expiration_date.map(DateOnly::to_date_time),
        target_amount: request.target_amount,
    };
    merge_snapshot(snapshot, into_fields(&changes), &[])
}

pub fn covenant_from_acbs(covenant: AcbsGetCovenantResponse) -> Covenant {
    Covenant {
        covenant_identifier: covenant.covenant_identifier,
        portfolio_identifier: covenant.portfolio_identifier,
        facility_identifier: covenant.facility_identifier,
        covenant_type: covenant.covenant_type.covenant_type_code,
        maximum_liability: covenant.target_amount.unwrap_or_default(),
        currency: covenant.currency.currency_code,
        expiration_date: remove_time_component_if_present(covenant.expiration_date.as_deref()),
        effective_date: remove_time_component_if_present(covenant.effective_date.as_deref()),
        obligor_party_identifier: covenant.limit_key_value,
    }
}
