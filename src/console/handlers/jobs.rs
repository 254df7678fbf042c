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
        query::JobListQuery,
    },
    state::AppState,
};
use crate::types::kind::Job;

/// List jobs
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "jobs",
    params(JobListQuery),
    responses(
        (status = 200, body = ListResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<Json<ListResponse>> {
    handlers::list_page::<Job>(&state, query.criteria(), query.page()).await
}

/// List every job, unpaginated
#[utoipa::path(
    get,
    path = "/api/all-jobs",
    tag = "jobs",
    responses(
        (status = 200, body = AllResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn list_all_jobs(State(state): State<AppState>) -> Result<Json<AllResponse>> {
    handlers::list_everything::<Job>(&state).await
}

/// Get a job
#[utoipa::path(
    get,
    path = "/api/jobs/{namespace}/{name}",
    tag = "jobs",
    params(
        ("namespace" = String, Path, description = "Job namespace"),
        ("name" = String, Path, description = "Job name")
    ),
    responses(
        (status = 200, description = "Raw job object", content_type = "application/json"),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<DynamicObject>> {
    handlers::get_object::<Job>(&state, Some(&namespace), &name)
        .await
        .map(Json)
}

/// Get a job as YAML
#[utoipa::path(
    get,
    path = "/api/jobs/{namespace}/{name}/yaml",
    tag = "jobs",
    params(
        ("namespace" = String, Path, description = "Job namespace"),
        ("name" = String, Path, description = "Job name")
    ),
    responses(
        (status = 200, body = String, content_type = "text/yaml"),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn get_job_yaml(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Yaml> {
    handlers::get_yaml::<Job>(&state, Some(&namespace), &name).await
}

/// Create a job from a JSON or YAML manifest
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = "jobs",
    responses(
        (status = 201, description = "Created job", content_type = "application/json"),
        (status = 400, body = ErrorResponse)
    )
)]
pub async fn create_job(
    State(state): State<AppState>,
    Manifest(manifest): Manifest,
) -> Result<(StatusCode, Json<DynamicObject>)> {
    handlers::create::<Job>(&state, manifest).await
}

/// Replace a job
#[utoipa::path(
    put,
    path = "/api/jobs/{namespace}/{name}",
    tag = "jobs",
    params(
        ("namespace" = String, Path, description = "Job namespace"),
        ("name" = String, Path, description = "Job name")
    ),
    responses(
        (status = 200, description = "Updated job", content_type = "application/json"),
        (status = 400, body = ErrorResponse),
        (status = 409, body = ErrorResponse)
    )
)]
pub async fn update_job(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Manifest(manifest): Manifest,
) -> Result<Json<DynamicObject>> {
    handlers::update::<Job>(&state, Some(&namespace), &name, manifest).await
}

/// Delete a job and, in the foreground, its pods
#[utoipa::path(
    delete,
    path = "/api/jobs/{namespace}/{name}",
    tag = "jobs",
    params(
        ("namespace" = String, Path, description = "Job namespace"),
        ("name" = String, Path, description = "Job name")
    ),
    responses(
        (status = 200, body = DeleteResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn delete_job(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>> {
    handlers::delete::<Job>(&state, Some(&namespace), &name).await
}
