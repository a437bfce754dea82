use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use ukef_core::config::AcbsConfig;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no ACBS id token is configured")]
    MissingToken,
    #[error("failed to acquire an ACBS id token: {0}")]
    Acquisition(String),
}

/// Source of the bearer token sent on every ACBS call.
#[async_trait]
pub trait IdTokenProvider: Send + Sync {
    async fn id_token(&self) -> Result<String, AuthError>;
}

/// Hands out the token from configuration.
pub struct StaticIdTokenProvider {
    token: SecretString,
}

impl StaticIdTokenProvider {
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }

    pub fn from_config(config: &AcbsConfig) -> Self {
        Self::new(config.id_token.clone())
    }
}

#[async_trait]
impl IdTokenProvider for StaticIdTokenProvider {
    async fn id_token(&self) -> Result<String, AuthError> {
        let token = self.token.expose_secret().trim();
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }
        Ok(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::{AuthError, IdTokenProvider, StaticIdTokenProvider};

    #[tokio::test]
    async fn static_provider_returns_configured_token() {
        let provider = StaticIdTokenProvider::new(SecretString::from("id-token-123".to_string()));
        assert_eq!(provider.id_token().await.expect("token"), "id-token-123");
    }

    #[tokio::test]
    async fn blank_token_is_rejected() {
        let provider = StaticIdTokenProvider::new(SecretString::from("   ".to_string()));
        assert!(matches!(provider.id_token().await, Err(AuthError::MissingToken)));
    }
}
