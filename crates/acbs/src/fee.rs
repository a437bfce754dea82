use ukef_core::acbs::fee::{AcbsCreateFixedFeeRequest, AcbsGetFixedFeeResponse};
use ukef_core::errors::AcbsError;

use crate::client::{AcbsHttpClient, FailureContext};
use crate::known::facility_not_found;

#[derive(Clone, Debug)]
pub struct AcbsFixedFeeService {
    client: AcbsHttpClient,
}

impl AcbsFixedFeeService {
    pub fn new(client: AcbsHttpClient) -> Self {
        Self { client }
    }

    pub async fn get_fixed_fees_for_facility(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        id_token: &str,
    ) -> Result<Vec<AcbsGetFixedFeeResponse>, AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to get the fixed fees for the facility with identifier {facility_identifier}."
        ))
        .with_known(facility_not_found(facility_identifier));
        let path = format!("/Portfolio/{portfolio_identifier}/Facility/{facility_identifier}/Fee");
        self.client.get(&path, id_token, &failure).await
    }

    pub async fn create_fixed_fee_for_facility(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        fee: &AcbsCreateFixedFeeRequest,
        id_token: &str,
    ) -> Result<(), AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to create a fixed fee for facility {facility_identifier} in ACBS."
        ))
        .with_known(facility_not_found(facility_identifier));
        let path = format!("/Portfolio/{portfolio_identifier}/Facility/{facility_identifier}/Fee");
        self.client.post(&path, fee, id_token, &failure).await?;
        Ok(())
    }
}
