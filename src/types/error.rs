// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use snafu::Snafu;

/// Manifest validation failures. These are resolved locally and never
/// reach the cluster API.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("manifest must be an object"))]
    NotAnObject,

    #[snafu(display("missing required field: {}", field))]
    MissingField { field: &'static str },

    #[snafu(display("invalid kind: expected {}, got {}", expected, found))]
    KindMismatch {
        expected: &'static str,
        found: String,
    },

    #[snafu(display("metadata.name must be a non-empty string"))]
    InvalidName,

    #[snafu(display(
        "metadata.name '{}' does not match the {} being updated ('{}')",
        found,
        kind,
        expected
    ))]
    NameMismatch {
        kind: &'static str,
        expected: String,
        found: String,
    },

    #[snafu(display("malformed manifest: {}", source))]
    SerdeJson { source: serde_json::Error },
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::SerdeJson { source }
    }
}
