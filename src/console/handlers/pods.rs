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

use axum::{Json, extract::State, http::StatusCode};
use kube::api::DynamicObject;

use crate::console::{
    error::{ErrorResponse, Result},
    extract::{Manifest, Path, Query, Yaml},
    handlers,
    models::{
        list::{AllResponse, ListResponse},
        query::PodListQuery,
    },
    state::AppState,
};
use crate::types::kind::Pod;

/// List pods
#[utoipa::path(
    get,
    path = "/api/pods",
    tag = "pods",
    params(PodListQuery),
    responses(
        (status = 200, body = ListResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn list_pods(
    State(state): State<AppState>,
    Query(query): Query<PodListQuery>,
) -> Result<Json<ListResponse>> {
    handlers::list_page::<Pod>(&state, query.criteria(), query.page()).await
}

/// List every pod, unpaginated
#[utoipa::path(
    get,
    path = "/api/all-pods",
    tag = "pods",
    responses(
        (status = 200, body = AllResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn list_all_pods(State(state): State<AppState>) -> Result<Json<AllResponse>> {
    handlers::list_everything::<Pod>(&state).await
}

/// Get a pod
#[utoipa::path(
    get,
    path = "/api/pods/{namespace}/{name}",
    tag = "pods",
    params(
        ("namespace" = String, Path, description = "Pod namespace"),
        ("name" = String, Path, description = "Pod name")
    ),
    responses(
        (status = 200, description = "Raw pod object", content_type = "application/json"),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn get_pod(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<DynamicObject>> {
    handlers::get_object::<Pod>(&state, Some(&namespace), &name)
        .await
        .map(Json)
}

/// Get a pod as YAML
#[utoipa::path(
    get,
    path = "/api/pods/{namespace}/{name}/yaml",
    tag = "pods",
    params(
        ("namespace" = String, Path, description = "Pod namespace"),
        ("name" = String, Path, description = "Pod name")
    ),
    responses(
        (status = 200, body = String, content_type = "text/yaml"),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn get_pod_yaml(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Yaml> {
    handlers::get_yaml::<Pod>(&state, Some(&namespace), &name).await
}

/// Create a pod from a JSON or YAML manifest
#[utoipa::path(
    post,
    path = "/api/pods",
    tag = "pods",
    responses(
        (status = 201, description = "Created pod", content_type = "application/json"),
        (status = 400, body = ErrorResponse)
    )
)]
pub async fn create_pod(
    State(state): State<AppState>,
    Manifest(manifest): Manifest,
) -> Result<(StatusCode, Json<DynamicObject>)> {
    handlers::create::<Pod>(&state, manifest).await
}
