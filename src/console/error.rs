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
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use snafu::Snafu;
use utoipa::ToSchema;

use crate::{cluster, types};

/// Console API error type
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to fetch {}: {}", kind, source))]
    Fetch {
        kind: &'static str,
        source: cluster::Error,
    },

    #[snafu(display("Failed to {} {}: {}", action, kind, source))]
    Mutate {
        action: &'static str,
        kind: &'static str,
        source: cluster::Error,
    },

    #[snafu(display("Invalid manifest: {}", source))]
    Validation { source: types::error::Error },

    #[snafu(display("Bad request: {}", message))]
    BadRequest { message: String },

    #[snafu(display("Failed to render YAML: {}", source))]
    Yaml { source: serde_yaml_ng::Error },
}

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Fetch { .. } | Error::Yaml { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Mutate { source, .. } => StatusCode::from_u16(source.code())
                .ok()
                .filter(|status| status.is_client_error() || status.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Error::Validation { .. } | Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, details) = match &self {
            Error::Fetch { kind, source } => {
                tracing::warn!("failed to fetch {}: {}", kind, source);
                (format!("Failed to fetch {}", kind), Some(source.message()))
            }
            Error::Mutate {
                action,
                kind,
                source,
            } => {
                tracing::warn!("failed to {} {}: {}", action, kind, source);
                (
                    format!("Failed to {} {}", action, kind),
                    Some(readable_message(&source.message())),
                )
            }
            Error::Validation { source } => (source.to_string(), None),
            Error::BadRequest { message } => (message.clone(), None),
            Error::Yaml { source } => (
                "Failed to render YAML".to_string(),
                Some(source.to_string()),
            ),
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}

/// Shortens upstream messages for display in the dialogs.
///
/// Admission webhook denials and field errors carry their useful part after
/// a fixed prefix; everything before it is dropped.
pub fn readable_message(message: &str) -> String {
    let payload = message
        .rsplit_once("denied the request: ")
        .map_or(message, |(_, payload)| payload);
    let payload = payload
        .split_once("Forbidden: ")
        .map_or(payload, |(_, payload)| payload);
    payload.trim().to_string()
}

/// Result type for Console API
pub type Result<T> = std::result::Result<T, Error>;
