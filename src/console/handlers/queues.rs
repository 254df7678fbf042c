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
        list::{AllResponse, DeleteResponse, ListResponse},
        query::QueueListQuery,
    },
    state::AppState,
};
use crate::types::kind::Queue;

/// List queues
#[utoipa::path(
    get,
    path = "/api/queues",
    tag = "queues",
    params(QueueListQuery),
    responses(
        (status = 200, body = ListResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn list_queues(
    State(state): State<AppState>,
    Query(query): Query<QueueListQuery>,
) -> Result<Json<ListResponse>> {
    handlers::list_page::<Queue>(&state, query.criteria(), query.page()).await
}

/// List every queue, unpaginated
#[utoipa::path(
    get,
    path = "/api/all-queues",
    tag = "queues",
    responses(
        (status = 200, body = AllResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn list_all_queues(State(state): State<AppState>) -> Result<Json<AllResponse>> {
    handlers::list_everything::<Queue>(&state).await
}

/// Get a queue
#[utoipa::path(
    get,
    path = "/api/queues/{name}",
    tag = "queues",
    params(("name" = String, Path, description = "Queue name")),
    responses(
        (status = 200, description = "Raw queue object", content_type = "application/json"),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn get_queue(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DynamicObject>> {
    handlers::get_object::<Queue>(&state, None, &name)
        .await
        .map(Json)
}

/// Get a queue as YAML
#[utoipa::path(
    get,
    path = "/api/queues/{name}/yaml",
    tag = "queues",
    params(("name" = String, Path, description = "Queue name")),
    responses(
        (status = 200, body = String, content_type = "text/yaml"),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn get_queue_yaml(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Yaml> {
    handlers::get_yaml::<Queue>(&state, None, &name).await
}

/// Create a queue from a JSON or YAML manifest
#[utoipa::path(
    post,
    path = "/api/queues",
    tag = "queues",
    responses(
        (status = 201, description = "Created queue", content_type = "application/json"),
        (status = 400, body = ErrorResponse)
    )
)]
pub async fn create_queue(
    State(state): State<AppState>,
    Manifest(manifest): Manifest,
) -> Result<(StatusCode, Json<DynamicObject>)> {
    handlers::create::<Queue>(&state, manifest).await
}

/// Replace a queue. The body needs `metadata` and `spec` only.
#[utoipa::path(
    put,
    path = "/api/queues/{name}",
    tag = "queues",
    params(("name" = String, Path, description = "Queue name")),
    responses(
        (status = 200, description = "Updated queue", content_type = "application/json"),
        (status = 400, body = ErrorResponse),
        (status = 409, body = ErrorResponse)
    )
)]
pub async fn update_queue(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Manifest(manifest): Manifest,
) -> Result<Json<DynamicObject>> {
    handlers::update::<Queue>(&state, None, &name, manifest).await
}

/// Delete a queue
#[utoipa::path(
    delete,
    path = "/api/queues/{name}",
    tag = "queues",
    params(("name" = String, Path, description = "Queue name")),
    responses(
        (status = 200, body = DeleteResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn delete_queue(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeleteResponse>> {
    handlers::delete::<Queue>(&state, None, &name).await
}
