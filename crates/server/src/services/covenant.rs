use serde_json::Value;
use tracing::info;
use ukef_acbs::AcbsCovenantService;
use ukef_core::builders::covenant::{build_create_covenant, build_update_covenant, covenant_from_acbs};
use ukef_core::domain::covenant::{Covenant, CreateCovenantRequest, UpdateCovenantsRequest};
use ukef_core::domain::facility::FacilityIdentifierResponse;
use ukef_core::errors::AcbsError;

use super::ServiceContext;
use crate::error::ApiError;

#[derive(Clone)]
pub struct CovenantService {
    covenants: AcbsCovenantService,
    context: ServiceContext,
}

impl CovenantService {
    pub fn new(covenants: AcbsCovenantService, context: ServiceContext) -> Self {
        Self { covenants, context }
    }

    pub async fn get_covenants_for_facility(
        &self,
        facility_identifier: &str,
    ) -> Result<Vec<Covenant>, ApiError> {
        let id_token = self.context.id_token().await?;
        let covenants = self
            .covenants
            .get_covenants_for_facility(self.context.portfolio(), facility_identifier, &id_token)
            .await?;
        Ok(covenants.into_iter().map(covenant_from_acbs).collect())
    }

    pub async fn create_covenant_for_facility(
        &self,
        facility_identifier: &str,
        request: &CreateCovenantRequest,
    ) -> Result<FacilityIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let covenant = build_create_covenant(
            facility_identifier,
            request,
            self.context.defaults(),
            self.context.today(),
        );
        self.covenants
            .create_covenant_for_facility(
                self.context.portfolio(),
                facility_identifier,
                &covenant,
                &id_token,
            )
            .await?;

        info!(
            event_name = "facility.covenant.created",
            facility_identifier = %facility_identifier,
            covenant_identifier = %request.covenant_identifier,
            "covenant created in ACBS"
        );
        Ok(FacilityIdentifierResponse { facility_identifier: facility_identifier.to_string() })
    }

    /// Applies the same change to every covenant of the facility, one PUT each.
    pub async fn update_covenants_for_facility(
        &self,
        facility_identifier: &str,
        request: &UpdateCovenantsRequest,
    ) -> Result<FacilityIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let portfolio = self.context.portfolio();
        let snapshots = self
            .covenants
            .get_covenant_snapshots_for_facility(portfolio, facility_identifier, &id_token)
            .await?;

        if snapshots.is_empty() {
            return Err(AcbsError::not_found(format!(
                "Covenants for facility with identifier {facility_identifier} were not found by ACBS."
            ))
            .into());
        }

        for snapshot in snapshots {
            let Some(covenant_identifier) =
                snapshot.get("CovenantIdentifier").and_then(Value::as_str).map(ToString::to_string)
            else {
                return Err(AcbsError::unexpected(
                    format!(
                        "ACBS returned a covenant without an identifier for facility {facility_identifier}."
                    ),
                    None,
                )
                .into());
            };

            let covenant = build_update_covenant(snapshot, request);
            self.covenants
                .replace_covenant(
                    portfolio,
                    facility_identifier,
                    &covenant_identifier,
                    &covenant,
                    &id_token,
                )
                .await?;
            info!(
                event_name = "facility.covenant.updated",
                facility_identifier = %facility_identifier,
                covenant_identifier = %covenant_identifier,
                "covenant updated in ACBS"
            );
        }

        Ok(FacilityIdentifierResponse { facility_identifier: facility_identifier.to_string() })
    }
}
