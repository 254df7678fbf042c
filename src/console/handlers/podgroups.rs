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
use kube::api::DynamicObject;

use crate::console::{
    error::{ErrorResponse, Result},
    extract::{Path, Query, Yaml},
    handlers,
    models::{
        list::{AllResponse, ListResponse},
        query::PodGroupListQuery,
    },
    state::AppState,
};
use crate::types::kind::PodGroup;

/// List pod groups
#[utoipa::path(
    get,
    path = "/api/podgroups",
    tag = "podgroups",
    params(PodGroupListQuery),
    responses(
        (status = 200, body = ListResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn list_pod_groups(
    State(state): State<AppState>,
    Query(query): Query<PodGroupListQuery>,
) -> Result<Json<ListResponse>> {
    handlers::list_page::<PodGroup>(&state, query.criteria(), query.page()).await
}

/// List every pod group, unpaginated
#[utoipa::path(
    get,
    path = "/api/all-podgroups",
    tag = "podgroups",
    responses(
        (status = 200, body = AllResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn list_all_pod_groups(State(state): State<AppState>) -> Result<Json<AllResponse>> {
    handlers::list_everything::<PodGroup>(&state).await
}

/// Get a pod group
#[utoipa::path(
    get,
    path = "/api/podgroups/{namespace}/{name}",
    tag = "podgroups",
    params(
        ("namespace" = String, Path, description = "PodGroup namespace"),
        ("name" = String, Path, description = "PodGroup name")
    ),
    responses(
        (status = 200, description = "Raw pod group object", content_type = "application/json"),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn get_pod_group(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<DynamicObject>> {
    handlers::get_object::<PodGroup>(&state, Some(&namespace), &name)
        .await
        .map(Json)
}

/// Get a pod group as YAML
#[utoipa::path(
    get,
    path = "/api/podgroups/{namespace}/{name}/yaml",
    tag = "podgroups",
    params(
        ("namespace" = String, Path, description = "PodGroup namespace"),
        ("name" = String, Path, description = "PodGroup name")
    ),
    responses(
        (status = 200, body = String, content_type = "text/yaml"),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn get_pod_group_yaml(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Yaml> {
    handlers::get_yaml::<PodGroup>(&state, Some(&namespace), &name).await
}
