// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::console::error::Error;

pub const YAML_CONTENT_TYPE: &str = "text/yaml";

/// Manifest request body, parsed as YAML when the content type says so and
/// as JSON otherwise.
#[derive(Debug)]
pub struct Manifest(pub Value);

impl<S> FromRequest<S> for Manifest
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_yaml = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.contains("yaml"));

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| Error::BadRequest {
                message: rejection.body_text(),
            })?;

        let value = if is_yaml {
            serde_yaml_ng::from_slice(&body).map_err(|e| Error::BadRequest {
                message: format!("Invalid YAML: {}", e),
            })?
        } else {
            serde_json::from_slice(&body).map_err(|e| Error::BadRequest {
                message: format!("Invalid JSON: {}", e),
            })?
        };

        Ok(Manifest(value))
    }
}

/// Query string extractor. Malformed parameters are answered with the
/// regular JSON error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct Query<T>(pub T);

/// Path parameter extractor, rejecting like [`Query`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);

/// YAML document response
#[derive(Debug)]
pub struct Yaml(pub String);

impl IntoResponse for Yaml {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, YAML_CONTENT_TYPE)], self.0).into_response()
    }
}
