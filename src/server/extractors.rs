//! Custom extractors for the HTTP server.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        request::Parts,
        HeaderMap, HeaderName, StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;

use crate::error::ErrorResponse;

/// Wire encodings understood by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Json,
    MsgPack,
}

impl Encoding {
    fn from_header(headers: &HeaderMap, name: HeaderName) -> Self {
        let value = headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if value.contains("msgpack") {
            Self::MsgPack
        } else {
            Self::Json
        }
    }
}

/// Response encoding requested through the `accept` header.
///
/// Anything that does not name MessagePack gets JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseFormat(pub Encoding);

#[async_trait]
impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(Encoding::from_header(&parts.headers, ACCEPT)))
    }
}

/// Rejection type for [`Payload`]
#[derive(Debug)]
pub struct PayloadRejection {
    status: StatusCode,
    message: String,
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new("DESERIALIZATION_ERROR", self.message);
        (self.status, Json(body)).into_response()
    }
}

/// Extractor for JSON or `MessagePack` request bodies.
///
/// The body is decoded as `MessagePack` when the content type mentions
/// `msgpack` (`application/msgpack`, `application/x-msgpack`), as JSON when it
/// mentions `json` or is absent, and rejected otherwise.
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let encoding = if content_type.contains("msgpack") {
            Encoding::MsgPack
        } else if content_type.is_empty() || content_type.contains("json") {
            Encoding::Json
        } else {
            return Err(PayloadRejection {
                status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                message: format!(
                    "Invalid content type: expected application/json or application/msgpack, got {content_type}"
                ),
            });
        };

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| PayloadRejection {
                status: StatusCode::BAD_REQUEST,
                message: format!("Failed to read request body: {e}"),
            })?;

        decode(encoding, &bytes).map(Payload)
    }
}

fn decode<T: DeserializeOwned>(encoding: Encoding, bytes: &[u8]) -> Result<T, PayloadRejection> {
    let decoded = match encoding {
        Encoding::Json => serde_json::from_slice(bytes).map_err(|e| e.to_string()),
        Encoding::MsgPack => rmp_serde::from_slice(bytes).map_err(|e| e.to_string()),
    };

    decoded.map_err(|e| PayloadRejection {
        status: StatusCode::BAD_REQUEST,
        message: format!("Failed to deserialize request body: {e}"),
    })
}
