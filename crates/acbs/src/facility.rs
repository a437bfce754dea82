use ukef_core::acbs::facility::{AcbsCreateFacilityRequest, AcbsGetFacilityResponse};
use ukef_core::builders::Snapshot;
use ukef_core::errors::AcbsError;

use crate::client::{AcbsHttpClient, FailureContext};
use crate::known::facility_not_found;

#[derive(Clone, Debug)]
pub struct AcbsFacilityService {
    client: AcbsHttpClient,
}

impl AcbsFacilityService {
    pub fn new(client: AcbsHttpClient) -> Self {
        Self { client }
    }

    pub async fn get_facility_by_identifier(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        id_token: &str,
    ) -> Result<AcbsGetFacilityResponse, AcbsError> {
        let path = facility_path(portfolio_identifier, facility_identifier);
        self.client.get(&path, id_token, &get_failure(facility_identifier)).await
    }

    /// The facility exactly as ACBS holds it, for update flows.
    pub async fn get_facility_snapshot(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        id_token: &str,
    ) -> Result<Snapshot, AcbsError> {
        let path = facility_path(portfolio_identifier, facility_identifier);
        self.client.get(&path, id_token, &get_failure(facility_identifier)).await
    }

    pub async fn create_facility(
        &self,
        portfolio_identifier: &str,
        facility: &AcbsCreateFacilityRequest,
        id_token: &str,
    ) -> Result<(), AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to create a facility with identifier {}.",
            facility.facility_identifier
        ));
        let path = format!("/Portfolio/{portfolio_identifier}/Facility");
        self.client.post(&path, facility, id_token, &failure).await?;
        Ok(())
    }

    pub async fn update_facility(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        facility: &Snapshot,
        id_token: &str,
    ) -> Result<(), AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to update a facility with identifier {facility_identifier}."
        ))
        .with_known(facility_not_found(facility_identifier));
        let path = facility_path(portfolio_identifier, facility_identifier);
        self.client.put(&path, facility, id_token, &failure).await
    }
}

fn facility_path(portfolio_identifier: &str, facility_identifier: &str) -> String {
    format!("/Portfolio/{portfolio_identifier}/Facility/{facility_identifier}")
}

fn get_failure(facility_identifier: &str) -> FailureContext {
    FailureContext::new(format!(
        "Failed to get the facility with identifier {facility_identifier}."
    ))
    .with_known(facility_not_found(facility_identifier))
}
