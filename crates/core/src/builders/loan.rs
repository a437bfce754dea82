use serde_json::Value;

use super::{merge_snapshot, Snapshot};
use crate::acbs::loan::{AcbsGetLoanResponse, LOAN_MATURITY_DATE_FIELD};
use crate::dates::remove_time_component_if_present;
use crate::defaults::DefaultValues;
use crate::domain::loan::{Loan, UpdateLoanExpiryDateRequest};

pub fn build_update_loan_expiry_date(
    snapshot: Snapshot,
    request: &UpdateLoanExpiryDateRequest,
) -> Snapshot {
    let mut overlay = Snapshot::new();
    overlay.insert(
        LOAN_MATURITY_DATE_FIELD.to_string(),
        Value::String(request.expiry_date.to_date_time()),
    );
    merge_snapshot(snapshot, overlay, &[])
}

pub fn loan_from_acbs(loan: AcbsGetLoanResponse, defaults: &DefaultValues) -> Loan {
    let fallback = defaults.loan.amount_fallback;

    Loan {
        portfolio_identifier: loan.portfolio_identifier,
        loan_identifier: loan.loan_identifier,
        facility_identifier: loan.parent_facility_identifier,
        borrower_party_identifier: loan.primary_party.party_identifier,
        product_type_id: loan.product_type.product_type_code,
        product_type_group: loan.product_group.product_group_code,
        currency: loan.currency.currency_code,
        issue_date: remove_time_component_if_present(loan.effective_date.as_deref()),
        expiry_date: remove_time_component_if_present(loan.maturity_date.as_deref()),
        principal_balance: loan.principal_balance.unwrap_or(fallback),
        interest_balance: loan.interest_balance.unwrap_or(fallback),
        fee_balance: loan.fee_balance.unwrap_or(fallback),
        other_balance: loan.other_balance.unwrap_or(fallback),
        discounted_principal: loan.discounted_principal.unwrap_or(fallback),
    }
}
