use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use ukef_acbs::{AcbsGateway, AcbsHttpClient, ClientBuildError, StaticIdTokenProvider};
use ukef_core::config::{AppConfig, ConfigError};
use ukef_core::defaults::DefaultValues;

use crate::state::AppState;

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("ACBS client setup failed: {0}")]
    Client(#[from] ClientBuildError),
}

/// Config is loaded by the caller so logging can be set up before bootstrap.
pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );
    config.validate()?;

    let client = AcbsHttpClient::new(&config.acbs)?;
    let defaults = Arc::new(DefaultValues::default());
    let gateway = AcbsGateway::new(client.clone(), defaults.bundle.servicing_queue_identifier.clone());
    info!(
        event_name = "system.bootstrap.acbs_client_ready",
        correlation_id = "bootstrap",
        acbs_base_url = %config.acbs.base_url,
        timeout_secs = config.acbs.timeout_secs,
        "ACBS client configured"
    );

    let state = AppState::new(
        gateway,
        client,
        Arc::new(StaticIdTokenProvider::from_config(&config.acbs)),
        defaults,
        config.api.api_key.clone(),
    );

    Ok(Application { config, state })
}
