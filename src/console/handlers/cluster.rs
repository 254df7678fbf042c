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

use axum::{Json, extract::State};
use snafu::ResultExt;

use crate::console::{
    error::{self, ErrorResponse, Result},
    models::list::NamespaceListResponse,
    state::AppState,
};
use crate::listing::fetch::fetch;
use crate::types::kind::{self, Namespace, ResourceKind};

/// List namespace names, for the namespace filters
#[utoipa::path(
    get,
    path = "/api/namespaces",
    tag = "cluster",
    responses(
        (status = 200, body = NamespaceListResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn list_namespaces(State(state): State<AppState>) -> Result<Json<NamespaceListResponse>> {
    let namespaces = fetch::<Namespace>(&state.cluster, None)
        .await
        .context(error::FetchSnafu {
            kind: Namespace::PLURAL,
        })?;

    let items: Vec<String> = namespaces
        .iter()
        .map(|ns| kind::name(ns).to_string())
        .collect();

    Ok(Json(NamespaceListResponse {
        total_count: items.len(),
        items,
    }))
}
