//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};

/// JSON body that never rejects on content.
///
/// A body without a JSON `Content-Type`, or one that does not parse,
/// yields an empty object, so handlers report missing fields instead of
/// a parse error. Only a failure to read the body itself is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct LenientJson(pub Value);

impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::BytesRejection(e)) => Err(e.into_response()),
            Err(e) => {
                tracing::debug!("ignoring request body: {}", e);
                Ok(Self(Value::Object(Map::new())))
            }
        }
    }
}
