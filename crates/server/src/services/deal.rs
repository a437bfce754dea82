use tracing::info;
use ukef_acbs::AcbsDealService;
use ukef_core::builders::deal::{build_create_deal, deal_from_acbs};
use ukef_core::domain::deal::{CreateDealRequest, Deal, DealIdentifierResponse};

use super::ServiceContext;
use crate::error::ApiError;

#[derive(Clone)]
pub struct DealService {
    deals: AcbsDealService,
    context: ServiceContext,
}

impl DealService {
    pub fn new(deals: AcbsDealService, context: ServiceContext) -> Self {
        Self { deals, context }
    }

    pub async fn get_deal(&self, deal_identifier: &str) -> Result<Deal, ApiError> {
        let id_token = self.context.id_token().await?;
        let deal =
            self.deals.get_deal_by_identifier(self.context.portfolio(), deal_identifier, &id_token).await?;
        Ok(deal_from_acbs(deal, self.context.defaults()))
    }

    pub async fn create_deal(
        &self,
        request: &CreateDealRequest,
    ) -> Result<DealIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let deal = build_create_deal(request, self.context.defaults(), self.context.today());
        self.deals.create_deal(self.context.portfolio(), &deal, &id_token).await?;

        info!(
            event_name = "deal.created",
            deal_identifier = %request.deal_identifier,
            "deal created in ACBS"
        );
        Ok(DealIdentifierResponse { deal_identifier: request.deal_identifier.clone() })
    }
}
