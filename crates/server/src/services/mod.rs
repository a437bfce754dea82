//! Domain services: acquire a token, build the ACBS request, call the gateway,
//! map the answer back to the public shape. Upstream errors pass through
//! untouched.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use ukef_acbs::IdTokenProvider;
use ukef_core::defaults::DefaultValues;

use crate::error::ApiError;

mod covenant;
mod deal;
mod facility;
mod fee;
mod guarantee;
mod investor;
mod loan;
mod party;
mod transaction;

pub use covenant::CovenantService;
pub use deal::DealService;
pub use facility::FacilityService;
pub use fee::FixedFeeService;
pub use guarantee::GuaranteeService;
pub use investor::InvestorService;
pub use loan::LoanService;
pub use party::{CreatedParty, PartyService};
pub use transaction::TransactionService;

#[derive(Clone)]
pub struct ServiceContext {
    tokens: Arc<dyn IdTokenProvider>,
    defaults: Arc<DefaultValues>,
}

impl ServiceContext {
    pub fn new(tokens: Arc<dyn IdTokenProvider>, defaults: Arc<DefaultValues>) -> Self {
        Self { tokens, defaults }
    }

    pub async fn id_token(&self) -> Result<String, ApiError> {
        Ok(self.tokens.id_token().await?)
    }

    pub fn defaults(&self) -> &DefaultValues {
        &self.defaults
    }

    pub fn portfolio(&self) -> &str {
        &self.defaults.portfolio_identifier
    }

    pub fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
