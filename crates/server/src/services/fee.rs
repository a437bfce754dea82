use tracing::info;
use ukef_acbs::{AcbsBundleInformationService, AcbsFixedFeeService};
use ukef_core::builders::bundle::{build_bundle, fee_amount_messages};
use ukef_core::builders::fee::{build_create_fixed_fee, fixed_fee_from_acbs};
use ukef_core::domain::facility::FacilityIdentifierResponse;
use ukef_core::domain::fee::{CreateFixedFeeRequest, FixedFee, FixedFeeAmountAmendment};
use ukef_core::domain::transaction::BundleIdentifierResponse;

use super::ServiceContext;
use crate::error::ApiError;

#[derive(Clone)]
pub struct FixedFeeService {
    fees: AcbsFixedFeeService,
    bundles: AcbsBundleInformationService,
    context: ServiceContext,
}

impl FixedFeeService {
    pub fn new(
        fees: AcbsFixedFeeService,
        bundles: AcbsBundleInformationService,
        context: ServiceContext,
    ) -> Self {
        Self { fees, bundles, context }
    }

    pub async fn get_fixed_fees_for_facility(
        &self,
        facility_identifier: &str,
    ) -> Result<Vec<FixedFee>, ApiError> {
        let id_token = self.context.id_token().await?;
        let fees = self
            .fees
            .get_fixed_fees_for_facility(self.context.portfolio(), facility_identifier, &id_token)
            .await?;
        Ok(fees
            .into_iter()
            .map(|fee| fixed_fee_from_acbs(facility_identifier, fee, self.context.defaults()))
            .collect())
    }

    pub async fn create_fixed_fee_for_facility(
        &self,
        facility_identifier: &str,
        request: &CreateFixedFeeRequest,
    ) -> Result<FacilityIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let fee = build_create_fixed_fee(request, self.context.defaults());
        self.fees
            .create_fixed_fee_for_facility(self.context.portfolio(), facility_identifier, &fee, &id_token)
            .await?;

        info!(
            event_name = "facility.fixed_fee.created",
            facility_identifier = %facility_identifier,
            "fixed fee created in ACBS"
        );
        Ok(FacilityIdentifierResponse { facility_identifier: facility_identifier.to_string() })
    }

    /// All amendments travel in one bundle.
    pub async fn amend_fixed_fee_amounts(
        &self,
        facility_identifier: &str,
        amendments: &[FixedFeeAmountAmendment],
    ) -> Result<BundleIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let defaults = self.context.defaults();
        let bundle =
            build_bundle(fee_amount_messages(facility_identifier, amendments, defaults), None, defaults);
        let created = self.bundles.create_bundle_information(&bundle, &id_token).await?;

        info!(
            event_name = "facility.fixed_fee.amount_amended",
            facility_identifier = %facility_identifier,
            bundle_identifier = %created.bundle_identifier,
            amendments = amendments.len(),
            "fixed fee amount amendment bundle created in ACBS"
        );
        Ok(created.into())
    }
}
