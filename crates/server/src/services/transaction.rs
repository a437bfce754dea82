use tracing::info;
use ukef_acbs::{AcbsBundleInformationService, AcbsFacilityService};
use ukef_core::builders::bundle::{
    build_bundle, facility_activation_from_acbs, facility_activation_message,
    loan_transaction_from_acbs,
};
use ukef_core::domain::transaction::{
    BundleIdentifierResponse, CreateFacilityActivationRequest, FacilityActivationTransaction,
    LoanTransaction,
};
use ukef_core::errors::AcbsError;

use super::ServiceContext;
use crate::error::ApiError;

#[derive(Clone)]
pub struct TransactionService {
    bundles: AcbsBundleInformationService,
    facilities: AcbsFacilityService,
    context: ServiceContext,
}

impl TransactionService {
    pub fn new(
        bundles: AcbsBundleInformationService,
        facilities: AcbsFacilityService,
        context: ServiceContext,
    ) -> Self {
        Self { bundles, facilities, context }
    }

    /// The activation is keyed on the facility's borrower, so the facility is
    /// read first.
    pub async fn create_facility_activation(
        &self,
        facility_identifier: &str,
        request: &CreateFacilityActivationRequest,
    ) -> Result<BundleIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let defaults = self.context.defaults();
        let facility = self
            .facilities
            .get_facility_by_identifier(self.context.portfolio(), facility_identifier, &id_token)
            .await?;

        let message = facility_activation_message(&facility, defaults, self.context.today());
        let bundle = build_bundle(vec![message], request.initial_bundle_status_code, defaults);
        let created = self.bundles.create_bundle_information(&bundle, &id_token).await?;

        info!(
            event_name = "facility.activation.created",
            facility_identifier = %facility_identifier,
            bundle_identifier = %created.bundle_identifier,
            "facility activation bundle created in ACBS"
        );
        Ok(created.into())
    }

    pub async fn get_facility_activation(
        &self,
        facility_identifier: &str,
        bundle_identifier: &str,
    ) -> Result<FacilityActivationTransaction, ApiError> {
        let id_token = self.context.id_token().await?;
        let bundle =
            self.bundles.get_bundle_information_by_identifier(bundle_identifier, &id_token).await?;

        facility_activation_from_acbs(facility_identifier, bundle).ok_or_else(|| {
            AcbsError::not_found(format!(
                "Facility activation transaction with bundle identifier {bundle_identifier} was not found by ACBS."
            ))
            .into()
        })
    }

    pub async fn get_loan_transaction(
        &self,
        facility_identifier: &str,
        bundle_identifier: &str,
    ) -> Result<LoanTransaction, ApiError> {
        let id_token = self.context.id_token().await?;
        let bundle =
            self.bundles.get_bundle_information_by_identifier(bundle_identifier, &id_token).await?;

        loan_transaction_from_acbs(facility_identifier, bundle).ok_or_else(|| {
            AcbsError::not_found(format!(
                "Loan transaction with bundle identifier {bundle_identifier} was not found by ACBS."
            ))
            .into()
        })
    }
}
