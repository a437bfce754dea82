//! ACBS gateway: one service per upstream resource over a shared HTTP client.
//!
//! Services issue a single call each and hand failures to the error
//! classifier in `ukef_core::errors`. They never retry and hold no state
//! beyond the client.

pub mod auth;
pub mod bundle;
pub mod client;
pub mod covenant;
pub mod deal;
pub mod facility;
pub mod fee;
pub mod guarantee;
pub mod investor;
pub mod known;
pub mod loan;
pub mod party;

pub use auth::{AuthError, IdTokenProvider, StaticIdTokenProvider};
pub use bundle::AcbsBundleInformationService;
pub use client::{AcbsHttpClient, ClientBuildError, FailureContext};
pub use covenant::AcbsCovenantService;
pub use deal::AcbsDealService;
pub use facility::AcbsFacilityService;
pub use fee::AcbsFixedFeeService;
pub use guarantee::AcbsGuaranteeService;
pub use investor::AcbsInvestorService;
pub use loan::AcbsLoanService;
pub use party::AcbsPartyService;

/// Every gateway service, sharing one client.
#[derive(Clone, Debug)]
pub struct AcbsGateway {
    pub bundles: AcbsBundleInformationService,
    pub covenants: AcbsCovenantService,
    pub deals: AcbsDealService,
    pub facilities: AcbsFacilityService,
    pub fixed_fees: AcbsFixedFeeService,
    pub guarantees: AcbsGuaranteeService,
    pub investors: AcbsInvestorService,
    pub loans: AcbsLoanService,
    pub parties: AcbsPartyService,
}

impl AcbsGateway {
    pub fn new(client: AcbsHttpClient, servicing_queue_identifier: impl Into<String>) -> Self {
        Self {
            bundles: AcbsBundleInformationService::new(client.clone(), servicing_queue_identifier),
            covenants: AcbsCovenantService::new(client.clone()),
            deals: AcbsDealService::new(client.clone()),
            facilities: AcbsFacilityService::new(client.clone()),
            fixed_fees: AcbsFixedFeeService::new(client.clone()),
            guarantees: AcbsGuaranteeService::new(client.clone()),
            investors: AcbsInvestorService::new(client.clone()),
            loans: AcbsLoanService::new(client.clone()),
            parties: AcbsPartyService::new(client),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use wiremock::MockServer;

    use crate::client::AcbsHttpClient;

    pub fn client(server: &MockServer) -> AcbsHttpClient {
        AcbsHttpClient::with_base_url(&server.uri(), Duration::from_secs(5)).expect("client")
    }
}
