use ukef_core::acbs::covenant::{AcbsCreateCovenantRequest, AcbsGetCovenantResponse};
use ukef_core::builders::Snapshot;
use ukef_core::errors::AcbsError;

use crate::client::{AcbsHttpClient, FailureContext};
use crate::known::facility_not_found;

#[derive(Clone, Debug)]
pub struct AcbsCovenantService {
    client: AcbsHttpClient,
}

impl AcbsCovenantService {
    pub fn new(client: AcbsHttpClient) -> Self {
        Self { client }
    }

    pub async fn get_covenants_for_facility(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        id_token: &str,
    ) -> Result<Vec<AcbsGetCovenantResponse>, AcbsError> {
        let path = covenants_path(portfolio_identifier, facility_identifier);
        self.client.get(&path, id_token, &get_failure(facility_identifier)).await
    }

    /// Every covenant of the facility exactly as ACBS holds it.
    pub async fn get_covenant_snapshots_for_facility(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        id_token: &str,
    ) -> Result<Vec<Snapshot>, AcbsError> {
        let path = covenants_path(portfolio_identifier, facility_identifier);
        self.client.get(&path, id_token, &get_failure(facility_identifier)).await
    }

    pub async fn create_covenant_for_facility(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        covenant: &AcbsCreateCovenantRequest,
        id_token: &str,
    ) -> Result<(), AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to create a covenant for facility {facility_identifier} in ACBS."
        ))
        .with_known(facility_not_found(facility_identifier));
        let path = covenants_path(portfolio_identifier, facility_identifier);
        self.client.post(&path, covenant, id_token, &failure).await?;
        Ok(())
    }

    pub async fn replace_covenant(
        &self,
        portfolio_identifier: &str,
        facility_identifier: &str,
        covenant_identifier: &str,
        covenant: &Snapshot,
        id_token: &str,
    ) -> Result<(), AcbsError> {
        let failure = FailureContext::new(format!(
            "Failed to update covenant {covenant_identifier} for facility {facility_identifier} in ACBS."
        ))
        .with_known(facility_not_found(facility_identifier));
        let path = format!(
            "{}/{covenant_identifier}",
            covenants_path(portfolio_identifier, facility_identifier)
        );
        self.client.put(&path, covenant, id_token, &failure).await
    }
}

fn covenants_path(portfolio_identifier: &str, facility_identifier: &str) -> String {
    format!("/Portfolio/{portfolio_identifier}/Facility/{facility_identifier}/Covenant")
}

fn get_failure(facility_identifier: &str) -> FailureContext {
    FailureContext::new(format!(
        "Failed to get the covenants for the facility with identifier {facility_identifier}."
    ))
    .with_known(facility_not_found(facility_identifier))
}
