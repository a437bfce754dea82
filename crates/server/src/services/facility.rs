use tracing::info;
use ukef_acbs::AcbsFacilityService;
use ukef_core::builders::facility::{
    build_create_facility, build_update_facility, facility_from_acbs,
};
use ukef_core::domain::facility::{
    CreateFacilityRequest, Facility, FacilityFields, FacilityIdentifierResponse,
    FacilityUpdateOperation,
};

use super::ServiceContext;
use crate::error::ApiError;

#[derive(Clone)]
pub struct FacilityService {
    facilities: AcbsFacilityService,
    context: ServiceContext,
}

impl FacilityService {
    pub fn new(facilities: AcbsFacilityService, context: ServiceContext) -> Self {
        Self { facilities, context }
    }

    pub async fn get_facility(&self, facility_identifier: &str) -> Result<Facility, ApiError> {
        let id_token = self.context.id_token().await?;
        let facility = self
            .facilities
            .get_facility_by_identifier(self.context.portfolio(), facility_identifier, &id_token)
            .await?;
        Ok(facility_from_acbs(facility, self.context.defaults()))
    }

    pub async fn create_facility(
        &self,
        request: &CreateFacilityRequest,
    ) -> Result<FacilityIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let facility = build_create_facility(
            &request.facility_identifier,
            &request.fields,
            self.context.defaults(),
            self.context.today(),
        );
        self.facilities.create_facility(self.context.portfolio(), &facility, &id_token).await?;

        info!(
            event_name = "facility.created",
            facility_identifier = %request.facility_identifier,
            "facility created in ACBS"
        );
        Ok(FacilityIdentifierResponse { facility_identifier: request.facility_identifier.clone() })
    }

    /// Reads the facility ACBS holds and writes it back with `fields` merged in.
    /// Nothing is written if the read fails.
    pub async fn update_facility(
        &self,
        facility_identifier: &str,
        operation: FacilityUpdateOperation,
        fields: &FacilityFields,
    ) -> Result<FacilityIdentifierResponse, ApiError> {
        if let Err(error) = operation.check(fields) {
            return Err(ApiError::validation(
                error.message.map_or_else(|| error.code.to_string(), |message| message.to_string()),
            ));
        }

        let id_token = self.context.id_token().await?;
        let portfolio = self.context.portfolio();
        let snapshot =
            self.facilities.get_facility_snapshot(portfolio, facility_identifier, &id_token).await?;
        let facility = build_update_facility(
            facility_identifier,
            fields,
            operation,
            snapshot,
            self.context.defaults(),
            self.context.today(),
        );
        self.facilities.update_facility(portfolio, facility_identifier, &facility, &id_token).await?;

        info!(
            event_name = "facility.updated",
            facility_identifier = %facility_identifier,
            operation = ?operation,
            "facility updated in ACBS"
        );
        Ok(FacilityIdentifierResponse { facility_identifier: facility_identifier.to_string() })
    }
}
