use ukef_core::acbs::deal::{AcbsCreateDealRequest, AcbsGetDealResponse};
use ukef_core::errors::AcbsError;

use crate::client::{AcbsHttpClient, FailureContext};
use crate::known::deal_not_found;

#[derive(Clone, Debug)]
pub struct AcbsDealService {
    client: AcbsHttpClient,
}

impl AcbsDealService {
    pub fn new(client: AcbsHttpClient) -> Self {
        Self { client }
    }

    pub async fn get_deal_by_identifier(
        &self,
        portfolio_identifier: &str,
        deal_identifier: &str,
        id_token: &str,
    ) -> Result<AcbsGetDealResponse, AcbsError> {
        let failure =
            FailureContext::new(format!("Failed to get the deal with identifier {deal_identifier}."))
                .with_known(deal_not_found(deal_identifier));
        let path = format!("/Portfolio/{portfolio_identifier}/Deal/{deal_identifier}");
        self.client.get(&path, id_token, &failure).await
    }

    pub async fn create_deal(
        &self,
        portfolio_identifier: &str,
        deal: &AcbsCreateDealRequest,
        id_token: &str,
    ) -> Result<(), AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to create a deal with identifier {}.",
            deal.deal_identifier
        ));
        let path = format!("/Portfolio/{portfolio_identifier}/Deal");
        self.client.post(&path, deal, id_token, &failure).await?;
        Ok(())
    }
}
