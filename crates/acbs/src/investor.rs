use ukef_core::acbs::investor::{
    AcbsCreateDealInvestorRequest, AcbsCreateFacilityInvestorRequest, AcbsGetDealInvestorResponse,
    AcbsGetFacilityInvestorResponse,
};
use ukef_core::errors::AcbsError;

use crate::client::{AcbsHttpClient, FailureContext};
use crate::known::{deal_not_found, facility_not_found};

/// Investors are `DealParty` and `FacilityParty` records upstream.
#[derive(Clone, Debug)]
pub struct AcbsInvestorService {
    client: AcbsHttpClient,
}

impl AcbsInvestorService {
    pub fn new(client: AcbsHttpClient) -> Self {
        Self { client }
    }

    pub async fn get_investors_for_deal(
        &self,
        portfolio_identifier: &str,
        deal_identifier: &str,
        id_token: &str,
    ) -> Result<Vec<AcbsGetDealInvestorResponse>, AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to get the deal investors for the deal with identifier {deal_identifier}."
        ))
        .with_known(deal_not_found(deal_identifier));
        let path = format!("/Portfolio/{portfolio_identifier}/Deal/{deal_identifier}/DealParty");

        // A null body may also mean the deal exists without investors.
        self.client.get_nullable(&path, id_token, &failure).await?.ok_or_else(|| {
            AcbsError::not_found(format!(
                "Deal with identifier {deal_identifier} was not found by ACBS."
            ))
        })
    }

    pub async fn create_investor_for_deal(
        &self,
        portfolio_identifier: &str,
        deal_identifier: &str,
        investor: &AcbsCreateDealInvestorRequest,
        id_token: &str,
    ) -> Result<(), AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to create an investor for deal {deal_identifier} in ACBS."
        ))
        .with_known(deal_not_found(deal_identifier));
        let path = format!("/Portfolio/{portfolio_identifier}/Deal/{deal_identifier}/DealParty");
        self.client.post(&path, investor, id_token, &failure).await?;
        Ok(())
    }

    pub async fn get_investors_for_facility(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        id_token: &str,
    ) -> Result<Vec<AcbsGetFacilityInvestorResponse>, AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to get the facility investors for the facility with identifier {facility_identifier}."
        ))
        .with_known(facility_not_found(facility_identifier));
        let path =
            format!("/Portfolio/{portfolio_identifier}/Facility/{facility_identifier}/FacilityParty");
        self.client.get(&path, id_token, &failure).await
    }

    pub async fn create_investor_for_facility(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        investor: &AcbsCreateFacilityInvestorRequest,
        id_token: &str,
    ) -> Result<(), AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to create an investor for facility {facility_identifier} in ACBS."
        ))
        .with_known(facility_not_found(facility_identifier));
        let path =
            format!("/Portfolio/{portfolio_identifier}/Facility/{facility_identifier}/FacilityParty");
        self.client.post(&path, investor, id_token, &failure).await?;
        Ok(())
    }
}
