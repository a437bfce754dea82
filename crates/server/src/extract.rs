//! Extractors that deserialize and validate in one step, rejecting with a 400
//! [`ApiError`].

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// A non-empty JSON array whose items are each validated.
pub struct ValidatedJsonList<T>(pub Vec<T>);

impl<S, T> FromRequest<S> for ValidatedJsonList<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(items) = Json::<Vec<T>>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;
        if items.is_empty() {
            return Err(ApiError::validation("request body must contain at least one item"));
        }
        for (index, item) in items.iter().enumerate() {
            item.validate().map_err(|errors| match ApiError::from(errors) {
                ApiError::Validation(message) => ApiError::validation(format!("[{index}] {message}")),
                other => other,
            })?;
        }
        Ok(Self(items))
    }
}

pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Path parameters, deserialized by name and validated.
pub struct ValidatedPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::extract::{FromRequest, FromRequestParts};
    use axum::http::{header, Request};
    use serde::Deserialize;
    use validator::Validate;

    use super::{ValidatedJson, ValidatedJsonList, ValidatedQuery};
    use crate::error::ApiError;

    #[derive(Debug, Deserialize, Validate)]
    struct NamedBody {
        #[validate(length(min = 3))]
        name: String,
    }

    fn json_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn valid_json_is_extracted() {
        let ValidatedJson(probe) =
            ValidatedJson::<NamedBody>::from_request(json_request(r#"{"name":"ACME"}"#), &())
                .await
                .expect("valid");
        assert_eq!(probe.name, "ACME");
    }

    #[tokio::test]
    async fn rule_violations_and_malformed_json_are_validation_errors() {
        let short = ValidatedJson::<NamedBody>::from_request(json_request(r#"{"name":"AC"}"#), &()).await;
        match short {
            Err(ApiError::Validation(message)) => assert!(message.contains("name")),
            _ => panic!("expected a validation error"),
        }

        let malformed = ValidatedJson::<NamedBody>::from_request(json_request("{"), &()).await;
        assert!(matches!(malformed, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn empty_lists_are_rejected() {
        let result = ValidatedJsonList::<NamedBody>::from_request(json_request("[]"), &()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));

        let result =
            ValidatedJsonList::<NamedBody>::from_request(json_request(r#"[{"name":"ACME"},{"name":"A"}]"#), &())
                .await;
        match result {
            Err(ApiError::Validation(message)) => assert!(message.starts_with("[1]")),
            _ => panic!("expected a validation error"),
        }
    }

    #[tokio::test]
    async fn query_strings_are_validated() {
        let request = Request::builder().uri("/?name=AC").body(()).expect("request");
        let (mut parts, ()) = request.into_parts();

        let result = ValidatedQuery::<NamedBody>::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
