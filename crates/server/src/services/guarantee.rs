use tracing::info;
use ukef_acbs::AcbsGuaranteeService;
use ukef_core::builders::guarantee::{
    build_create_deal_guarantee, build_create_facility_guarantee, deal_guarantee_from_acbs,
    facility_guarantee_from_acbs,
};
use ukef_core::domain::deal::DealIdentifierResponse;
use ukef_core::domain::facility::FacilityIdentifierResponse;
use ukef_core::domain::guarantee::{
    CreateDealGuaranteeRequest, CreateFacilityGuaranteeRequest, DealGuarantee, FacilityGuarantee,
};

use super::ServiceContext;
use crate::error::ApiError;

#[derive(Clone)]
pub struct GuaranteeService {
    guarantees: AcbsGuaranteeService,
    context: ServiceContext,
}

impl GuaranteeService {
    pub fn new(guarantees: AcbsGuaranteeService, context: ServiceContext) -> Self {
        Self { guarantees, context }
    }

    pub async fn get_guarantees_for_deal(
        &self,
        deal_identifier: &str,
    ) -> Result<Vec<DealGuarantee>, ApiError> {
        let id_token = self.context.id_token().await?;
        let guarantees = self
            .guarantees
            .get_guarantees_for_deal(self.context.portfolio(), deal_identifier, &id_token)
            .await?;
        Ok(guarantees
            .into_iter()
            .map(|guarantee| deal_guarantee_from_acbs(deal_identifier, guarantee, self.context.defaults()))
            .collect())
    }

    pub async fn create_guarantee_for_deal(
        &self,
        deal_identifier: &str,
        request: &CreateDealGuaranteeRequest,
    ) -> Result<DealIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let guarantee =
            build_create_deal_guarantee(request, self.context.defaults(), self.context.today());
        self.guarantees
            .create_guarantee_for_deal(self.context.portfolio(), deal_identifier, &guarantee, &id_token)
            .await?;

        info!(
            event_name = "deal.guarantee.created",
            deal_identifier = %deal_identifier,
            "deal guarantee created in ACBS"
        );
        Ok(DealIdentifierResponse { deal_identifier: deal_identifier.to_string() })
    }

    pub async fn get_guarantees_for_facility(
        &self,
        facility_identifier: &str,
    ) -> Result<Vec<FacilityGuarantee>, ApiError> {
        let id_token = self.context.id_token().await?;
        let guarantees = self
            .guarantees
            .get_guarantees_for_facility(self.context.portfolio(), facility_identifier, &id_token)
            .await?;
        Ok(guarantees
            .into_iter()
            .map(|guarantee| {
                facility_guarantee_from_acbs(facility_identifier, guarantee, self.context.defaults())
            })
            .collect())
    }

    pub async fn create_guarantee_for_facility(
        &self,
        facility_identifier: &str,
        request: &CreateFacilityGuaranteeRequest,
    ) -> Result<FacilityIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let guarantee =
            build_create_facility_guarantee(request, self.context.defaults(), self.context.today());
        self.guarantees
            .create_guarantee_for_facility(
                self.context.portfolio(),
                facility_identifier,
                &guarantee,
                &id_token,
            )
            .await?;

        info!(
            event_name = "facility.guarantee.created",
            facility_identifier = %facility_identifier,
            "facility guarantee created in ACBS"
        );
        Ok(FacilityIdentifierResponse { facility_identifier: facility_identifier.to_string() })
    }
}
