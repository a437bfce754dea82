use tracing::info;
use ukef_acbs::AcbsInvestorService;
use ukef_core::builders::investor::{
    build_create_deal_investor, build_create_facility_investor, deal_investor_from_acbs,
    facility_investor_from_acbs,
};
use ukef_core::domain::deal::DealIdentifierResponse;
use ukef_core::domain::facility::FacilityIdentifierResponse;
use ukef_core::domain::investor::{
    CreateDealInvestorRequest, CreateFacilityInvestorRequest, DealInvestor, FacilityInvestor,
};

use super::ServiceContext;
use crate::error::ApiError;

#[derive(Clone)]
pub struct InvestorService {
    investors: AcbsInvestorService,
    context: ServiceContext,
}

impl InvestorService {
    pub fn new(investors: AcbsInvestorService, context: ServiceContext) -> Self {
        Self { investors, context }
    }

    pub async fn get_investors_for_deal(
        &self,
        deal_identifier: &str,
    ) -> Result<Vec<DealInvestor>, ApiError> {
        let id_token = self.context.id_token().await?;
        let investors = self
            .investors
            .get_investors_for_deal(self.context.portfolio(), deal_identifier, &id_token)
            .await?;
        Ok(investors
            .into_iter()
            .map(|investor| deal_investor_from_acbs(deal_identifier, investor, self.context.defaults()))
            .collect())
    }

    pub async fn create_investor_for_deal(
        &self,
        deal_identifier: &str,
        request: &CreateDealInvestorRequest,
    ) -> Result<DealIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let investor =
            build_create_deal_investor(request, self.context.defaults(), self.context.today());
        self.investors
            .create_investor_for_deal(self.context.portfolio(), deal_identifier, &investor, &id_token)
            .await?;

        info!(
            event_name = "deal.investor.created",
            deal_identifier = %deal_identifier,
            "deal investor created in ACBS"
        );
        Ok(DealIdentifierResponse { deal_identifier: deal_identifier.to_string() })
    }

    pub async fn get_investors_for_facility(
        &self,
        facility_identifier: &str,
    ) -> Result<Vec<FacilityInvestor>, ApiError> {
        let id_token = self.context.id_token().await?;
        let investors = self
            .investors
            .get_investors_for_facility(self.context.portfolio(), facility_identifier, &id_token)
            .await?;
        Ok(investors
            .into_iter()
            .map(|investor| {
                facility_investor_from_acbs(facility_identifier, investor, self.context.defaults())
            })
            .collect())
    }

    pub async fn create_investor_for_facility(
        &self,
        facility_identifier: &str,
        request: &CreateFacilityInvestorRequest,
    ) -> Result<FacilityIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let investor =
            build_create_facility_investor(request, self.context.defaults(), self.context.today());
        self.investors
            .create_investor_for_facility(
                self.context.portfolio(),
                facility_identifier,
                &investor,
                &id_token,
            )
            .await?;

        info!(
            event_name = "facility.investor.created",
            facility_identifier = %facility_identifier,
            "facility investor created in ACBS"
        );
        Ok(FacilityIdentifierResponse { facility_identifier: facility_identifier.to_string() })
    }
}
