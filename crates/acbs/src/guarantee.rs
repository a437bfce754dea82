use ukef_core::acbs::guarantee::{AcbsCreateGuaranteeRequest, AcbsGetGuaranteeResponse};
use ukef_core::errors::AcbsError;

use crate::client::{AcbsHttpClient, FailureContext};
use crate::known::{deal_not_found, facility_not_found};

/// `DealGuarantee` and `FacilityGuarantee` share one wire shape.
#[derive(Clone, Debug)]
pub struct AcbsGuaranteeService {
    client: AcbsHttpClient,
}

impl AcbsGuaranteeService {
    pub fn new(client: AcbsHttpClient) -> Self {
        Self { client }
    }

    /// ACBS answers `null` both for a missing deal and for a deal it cannot
    /// list guarantees for; either way the deal is reported as not found.
    pub async fn get_guarantees_for_deal(
        &self,
        portfolio_identifier: &str,
        deal_identifier: &str,
        id_token: &str,
    ) -> Result<Vec<AcbsGetGuaranteeResponse>, AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to get the deal guarantees for the deal with identifier {deal_identifier}."
        ))
        .with_known(deal_not_found(deal_identifier));
        let path = format!("/Portfolio/{portfolio_identifier}/Deal/{deal_identifier}/DealGuarantee");

        self.client.get_nullable(&path, id_token, &failure).await?.ok_or_else(|| {
            AcbsError::not_found(format!(
                "Deal with identifier {deal_identifier} was not found by ACBS."
            ))
        })
    }

    pub async fn create_guarantee_for_deal(
        &self,
        portfolio_identifier: &str,
        deal_identifier: &str,
        guarantee: &AcbsCreateGuaranteeRequest,
        id_token: &str,
    ) -> Result<(), AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to create a guarantee for deal {deal_identifier} in ACBS."
        ))
        .with_known(deal_not_found(deal_identifier));
        let path = format!("/Portfolio/{portfolio_identifier}/Deal/{deal_identifier}/DealGuarantee");
        self.client.post(&path, guarantee, id_token, &failure).await?;
        Ok(())
    }

    pub async fn get_guarantees_for_facility(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        id_token: &str,
    ) -> Result<Vec<AcbsGetGuaranteeResponse>, AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to get the facility guarantees for the facility with identifier {facility_identifier}."
        ))
        .with_known(facility_not_found(facility_identifier));
        let path = format!(
            "/Portfolio/{portfolio_identifier}/Facility/{facility_identifier}/FacilityGuarantee"
        );
        self.client.get(&path, id_token, &failure).await
    }

    pub async fn create_guarantee_for_facility(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        guarantee: &AcbsCreateGuaranteeRequest,
        id_token: &str,
    ) -> Result<(), AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to create a guarantee for facility {facility_identifier} in ACBS."
        ))
        .with_known(facility_not_found(facility_identifier));
        let path = format!(
            "/Portfolio/{portfolio_identifier}/Facility/{facility_identifier}/FacilityGuarantee"
        );
        self.client.post(&path, guarantee, id_token, &failure).await?;
        Ok(())
    }
}
