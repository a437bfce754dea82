use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Body of a failed ACBS response, as a JSON-aware HTTP client would see it.
#[derive(Clone, Debug, PartialEq)]
pub enum UpstreamBody {
    Text(String),
    Json(Value),
}

impl UpstreamBody {
    /// JSON string bodies are unwrapped to text; anything that is not JSON is
    /// kept verbatim as text.
    pub fn from_raw(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::String(text)) => Self::Text(text),
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum UpstreamFailure {
    #[error("no response received from ACBS: {reason}")]
    NoResponse { reason: String },
    #[error("ACBS responded with status {status}")]
    Status { status: u16, body: UpstreamBody },
    #[error("ACBS responded with status {status} but the body could not be decoded: {reason}")]
    InvalidBody { status: u16, reason: String },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AcbsError {
    #[error("{message}")]
    ResourceNotFound {
        message: String,
        #[source]
        inner: Option<UpstreamFailure>,
    },
    #[error("{message}")]
    BadRequest {
        message: String,
        error_body: String,
        #[source]
        inner: Option<UpstreamFailure>,
    },
    #[error("{message}")]
    UnexpectedUpstream {
        message: String,
        #[source]
        inner: Option<UpstreamFailure>,
    },
}

impl AcbsError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::ResourceNotFound { message: message.into(), inner: None }
    }

    pub fn unexpected(message: impl Into<String>, inner: Option<UpstreamFailure>) -> Self {
        Self::UnexpectedUpstream { message: message.into(), inner }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ResourceNotFound { message, .. }
            | Self::BadRequest { message, .. }
            | Self::UnexpectedUpstream { message, .. } => message,
        }
    }

    pub fn error_body(&self) -> Option<&str> {
        match self {
            Self::BadRequest { error_body, .. } => Some(error_body),
            Self::ResourceNotFound { .. } | Self::UnexpectedUpstream { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::ResourceNotFound { .. } => "resource_not_found",
            Self::BadRequest { .. } => "bad_request",
            Self::UnexpectedUpstream { .. } => "unexpected_upstream",
        }
    }
}

/// Recognises a specific upstream cause from a free-text 400 body.
pub struct KnownError {
    substring: String,
    error: Box<dyn Fn() -> AcbsError + Send + Sync>,
}

impl KnownError {
    pub fn new(
        substring: impl Into<String>,
        error: impl Fn() -> AcbsError + Send + Sync + 'static,
    ) -> Self {
        Self { substring: substring.into(), error: Box::new(error) }
    }

    pub fn not_found(substring: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(substring, move || AcbsError::not_found(message.clone()))
    }

    pub fn matches(&self, body: &str) -> bool {
        body.contains(&self.substring)
    }

    pub fn to_error(&self) -> AcbsError {
        (self.error)()
    }
}

impl fmt::Debug for KnownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnownError").field("substring", &self.substring).finish_non_exhaustive()
    }
}

enum Classification {
    Known(AcbsError),
    BadRequest(String),
    Unexpected,
}

/// Maps a failed ACBS call onto the error taxonomy.
///
/// Only a 400 response is inspected. Known patterns are matched against text
/// bodies in order; JSON bodies are never pattern matched and are reported as a
/// bad request carrying their compact serialisation.
pub fn classify(
    failure: UpstreamFailure,
    known_errors: &[KnownError],
    unknown_message: &str,
) -> AcbsError {
    let classification = match &failure {
        UpstreamFailure::Status { status: 400, body: UpstreamBody::Text(text) } => known_errors
            .iter()
            .find(|known| known.matches(text))
            .map(|known| Classification::Known(known.to_error()))
            .unwrap_or_else(|| Classification::BadRequest(text.clone())),
        UpstreamFailure::Status { status: 400, body: UpstreamBody::Json(value) } => {
            Classification::BadRequest(compact_json(value))
        }
        UpstreamFailure::Status { .. }
        | UpstreamFailure::NoResponse { .. }
        | UpstreamFailure::InvalidBody { .. } => Classification::Unexpected,
    };

    match classification {
        Classification::Known(error) => error,
        Classification::BadRequest(error_body) => AcbsError::BadRequest {
            message: unknown_message.to_string(),
            error_body,
            inner: Some(failure),
        },
        Classification::Unexpected => AcbsError::unexpected(unknown_message, Some(failure)),
    }
}

/// Compact JSON with keys in received order and integral floats printed
/// without a fraction, matching what a JavaScript client would log.
fn compact_json(value: &Value) -> String {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 => {
                if float == 0.0 {
                    "0".to_string()
                } else {
                    format!("{float:.0}")
                }
            }
            _ => number.to_string(),
        },
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(compact_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(fields) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|(key, field)| format!("{}:{}", Value::from(key.as_str()), compact_json(field)))
                .collect();
            format!("{{{}}}", fields.join(","))
        }
        Value::Null | Value::Bool(_) | Value::String(_) => value.to_string(),
    }
}
