use std::sync::Arc;

use secrecy::SecretString;
use ukef_acbs::{AcbsGateway, AcbsHttpClient, IdTokenProvider};
use ukef_core::defaults::DefaultValues;

use crate::services::{
    CovenantService, DealService, FacilityService, FixedFeeService, GuaranteeService,
    InvestorService, LoanService, PartyService, ServiceContext, TransactionService,
};

/// Shared by every handler; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub deals: DealService,
    pub facilities: FacilityService,
    pub covenants: CovenantService,
    pub guarantees: GuaranteeService,
    pub investors: InvestorService,
    pub fixed_fees: FixedFeeService,
    pub loans: LoanService,
    pub transactions: TransactionService,
    pub parties: PartyService,
    pub acbs_client: AcbsHttpClient,
    pub api_key: Option<SecretString>,
}

impl AppState {
    pub fn new(
        gateway: AcbsGateway,
        acbs_client: AcbsHttpClient,
        tokens: Arc<dyn IdTokenProvider>,
        defaults: Arc<DefaultValues>,
        api_key: Option<SecretString>,
    ) -> Self {
        let context = ServiceContext::new(tokens, defaults);
        Self {
            deals: DealService::new(gateway.deals, context.clone()),
            facilities: FacilityService::new(gateway.facilities.clone(), context.clone()),
            covenants: CovenantService::new(gateway.covenants, context.clone()),
            guarantees: GuaranteeService::new(gateway.guarantees, context.clone()),
            investors: InvestorService::new(gateway.investors, context.clone()),
            fixed_fees: FixedFeeService::new(
                gateway.fixed_fees,
                gateway.bundles.clone(),
                context.clone(),
            ),
            loans: LoanService::new(gateway.loans, gateway.bundles.clone(), context.clone()),
            transactions: TransactionService::new(gateway.bundles, gateway.facilities, context.clone()),
            parties: PartyService::new(gateway.parties, context),
            acbs_client,
            api_key,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use secrecy::SecretString;
    use ukef_acbs::{AcbsGateway, AcbsHttpClient, StaticIdTokenProvider};
    use ukef_core::defaults::DefaultValues;
    use wiremock::MockServer;

    use super::AppState;

    pub const TEST_ID_TOKEN: &str = "test-id-token";

    pub fn state_for(server: &MockServer) -> AppState {
        state_with_base_url(&server.uri())
    }

    pub fn state_with_base_url(base_url: &str) -> AppState {
        let client =
            AcbsHttpClient::with_base_url(base_url, Duration::from_secs(5)).expect("client");
        let defaults = Arc::new(DefaultValues::default());
        let gateway =
            AcbsGateway::new(client.clone(), defaults.bundle.servicing_queue_identifier.clone());
        let tokens =
            Arc::new(StaticIdTokenProvider::new(SecretString::from(TEST_ID_TOKEN.to_string())));
        AppState::new(gateway, client, tokens, defaults, None)
    }
}
