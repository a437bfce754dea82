use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use ukef_core::config::AcbsConfig;
use ukef_core::errors::{classify, AcbsError, KnownError, UpstreamBody, UpstreamFailure};

#[derive(Debug, Error)]
#[error("could not build the ACBS HTTP client: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

/// How a failed call is reported: the patterns recognised in 400 text bodies,
/// tried in order, and the message used for everything else.
#[derive(Debug)]
pub struct FailureContext {
    known_errors: Vec<KnownError>,
    unknown_message: String,
}

impl FailureContext {
    pub fn new(unknown_message: impl Into<String>) -> Self {
        Self { known_errors: Vec::new(), unknown_message: unknown_message.into() }
    }

    pub fn with_known(mut self, known_error: KnownError) -> Self {
        self.known_errors.push(known_error);
        self
    }

    pub fn unknown_message(&self) -> &str {
        &self.unknown_message
    }

    pub(crate) fn classify(&self, failure: UpstreamFailure) -> AcbsError {
        let error = classify(failure, &self.known_errors, &self.unknown_message);
        warn!(
            event_name = "acbs.request.failed",
            kind = error.kind(),
            error_body = error.error_body().unwrap_or_default(),
            "{}",
            error.message()
        );
        error
    }
}

/// Thin JSON client over the ACBS base URL. Every call carries the caller's
/// bearer token; failures are classified before they leave this type.
#[derive(Clone, Debug)]
pub struct AcbsHttpClient {
    client: Client,
    base_url: String,
}

impl AcbsHttpClient {
    pub fn new(config: &AcbsConfig) -> Result<Self, ClientBuildError> {
        Self::with_base_url(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, ClientBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Any HTTP answer from the base URL counts as reachable.
    pub async fn probe(&self) -> Result<u16, UpstreamFailure> {
        let response = self.client.get(&self.base_url).send().await.map_err(|error| {
            UpstreamFailure::NoResponse { reason: error.to_string() }
        })?;
        Ok(response.status().as_u16())
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        id_token: &str,
        failure: &FailureContext,
    ) -> Result<T, AcbsError> {
        let response = self.execute(self.request(Method::GET, path, id_token), failure).await?;
        decode_body(response).await.map_err(|error| failure.classify(error))
    }

    /// Like [`get`](Self::get), but a `null` (or empty) 200 body is `None`.
    pub async fn get_nullable<T: DeserializeOwned>(
        &self,
        path: &str,
        id_token: &str,
        failure: &FailureContext,
    ) -> Result<Option<T>, AcbsError> {
        let response = self.execute(self.request(Method::GET, path, id_token), failure).await?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|error| failure.classify(invalid_body(status, &error)))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice::<Option<T>>(&bytes)
            .map_err(|error| failure.classify(invalid_body(status, &error)))
    }

    /// Returns the response headers; ACBS reports created identifiers there.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        id_token: &str,
        failure: &FailureContext,
    ) -> Result<HeaderMap, AcbsError> {
        let request = self.request(Method::POST, path, id_token).json(body);
        let response = self.execute(request, failure).await?;
        Ok(response.headers().clone())
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        id_token: &str,
        failure: &FailureContext,
    ) -> Result<(), AcbsError> {
        let request = self.request(Method::PUT, path, id_token).json(body);
        self.execute(request, failure).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str, id_token: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{path}", self.base_url)).bearer_auth(id_token)
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        failure: &FailureContext,
    ) -> Result<Response, AcbsError> {
        let response = request.send().await.map_err(|error| {
            failure.classify(UpstreamFailure::NoResponse { reason: error.to_string() })
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await;
        Err(failure.classify(error_status_failure(status.as_u16(), body)))
    }
}

/// An error body that cannot be read is not a body ACBS meant to send.
fn error_status_failure<E: std::fmt::Display>(
    status: u16,
    body: Result<String, E>,
) -> UpstreamFailure {
    match body {
        Ok(raw) => UpstreamFailure::Status { status, body: UpstreamBody::from_raw(&raw) },
        Err(error) => invalid_body(status, &error),
    }
}

async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamFailure> {
    let status = response.status().as_u16();
    let bytes = response.bytes().await.map_err(|error| invalid_body(status, &error))?;
    serde_json::from_slice(&bytes).map_err(|error| invalid_body(status, &error))
}

fn invalid_body(status: u16, error: &dyn std::fmt::Display) -> UpstreamFailure {
    UpstreamFailure::InvalidBody { status, reason: error.to_string() }
}
