//! JSON handlers for foos.

use std::fmt;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};

use foohub_app::ports::FooRepository;
use foohub_domain::foo::Foo;
use foohub_domain::id::FooId;

use crate::error::ApiError;
use crate::response::JsonLine;
use crate::state::AppState;

/// Request body for creating a foo.
///
/// Keys are matched case-insensitively. Any `id` sent by the client is
/// ignored, and a missing or `null` name leaves it empty.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CreateFooRequest {
    pub name: String,
}

impl<'de> Deserialize<'de> for CreateFooRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RequestVisitor;

        impl<'de> Visitor<'de> for RequestVisitor {
            type Value = CreateFooRequest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a foo object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut req = CreateFooRequest::default();
                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case("name") {
                        // null keeps whatever an earlier key set
                        if let Some(name) = map.next_value::<Option<String>>()? {
                            req.name = name;
                        }
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(req)
            }
        }

        deserializer.deserialize_map(RequestVisitor)
    }
}

impl CreateFooRequest {
    /// Decode the first JSON value of `body`, ignoring anything after it.
    ///
    /// A top-level `null` yields an empty request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyBody`] when `body` holds no JSON value, or
    /// [`ApiError::Decode`] when the first value is not a foo object.
    pub fn decode(body: &[u8]) -> Result<Self, ApiError> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();
        match values.next() {
            Some(Ok(req)) => Ok(req.unwrap_or_default()),
            Some(Err(err)) => Err(ApiError::Decode(err)),
            None => Err(ApiError::EmptyBody),
        }
    }
}

/// Possible responses from the show endpoint.
pub enum ShowResponse {
    Ok(JsonLine<Foo>),
}

impl IntoResponse for ShowResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(JsonLine<Foo>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => (StatusCode::OK, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /foo/{id}`
pub async fn show<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<ShowResponse, ApiError>
where
    R: FooRepository + Send + Sync + 'static,
{
    let foo = state.foo_service.get_foo(FooId::from(id)).await?;
    Ok(ShowResponse::Ok(JsonLine(foo)))
}

/// `POST /foo`
///
/// The body is decoded whatever its declared content type.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    R: FooRepository + Send + Sync + 'static,
{
    let req = CreateFooRequest::decode(&body)?;
    let created = state.foo_service.create_foo(req.name).await?;
    Ok(CreateResponse::Ok(JsonLine(created)))
}

/// `DELETE /foo/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: FooRepository + Send + Sync + 'static,
{
    state.foo_service.delete_foo(FooId::from(id)).await?;
    Ok(DeleteResponse::NoContent)
}
