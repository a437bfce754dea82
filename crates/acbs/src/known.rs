//! Free-text 400 bodies ACBS uses to say a resource is missing.

use ukef_core::errors::KnownError;

pub fn deal_not_found(deal_identifier: &str) -> KnownError {
    KnownError::not_found(
        "The deal not found",
        format!("Deal with identifier {deal_identifier} was not found by ACBS."),
    )
}

pub fn facility_not_found(facility_identifier: &str) -> KnownError {
    KnownError::not_found(
        "Facility does not exist",
        format!("Facility with identifier {facility_identifier} was not found by ACBS."),
    )
}

pub fn loan_not_found(loan_identifier: &str) -> KnownError {
    KnownError::not_found(
        "Loan does not exist",
        format!("Loan with identifier {loan_identifier} was not found by ACBS."),
    )
}

pub fn party_not_found(party_identifier: &str) -> KnownError {
    KnownError::not_found(
        "Party not found",
        format!("Party with identifier {party_identifier} was not found by ACBS."),
    )
}

pub fn bundle_not_found(bundle_identifier: &str) -> KnownError {
    KnownError::not_found(
        "BundleInformation not found",
        format!("Bundle information with identifier {bundle_identifier} was not found by ACBS."),
    )
}
