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

use axum::{Router, routing::get};

use crate::console::{handlers, state::AppState};

/// Job routes
pub fn job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/jobs",
            get(handlers::jobs::list_jobs)
                .post(handlers::jobs::create_job),
        )
        .route("/all-jobs", get(handlers::jobs::list_all_jobs))
        .route(
            "/jobs/{namespace}/{name}",
            get(handlers::jobs::get_job)
                .put(handlers::jobs::update_job)
                .delete(handlers::jobs::delete_job),
        )
        .route(
            "/jobs/{namespace}/{name}/yaml",
            get(handlers::jobs::get_job_yaml),
        )
}

/// Queue routes. Queues are cluster scoped, so paths carry no namespace.
pub fn queue_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/queues",
            get(handlers::queues::list_queues)
                .post(handlers::queues::create_queue),
        )
        .route("/all-queues", get(handlers::queues::list_all_queues))
        .route(
            "/queues/{name}",
            get(handlers::queues::get_queue)
                .put(handlers::queues::update_queue)
                .delete(handlers::queues::delete_queue),
        )
        .route("/queues/{name}/yaml", get(handlers::queues::get_queue_yaml))
}

/// Pod routes
pub fn pod_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/pods",
            get(handlers::pods::list_pods)
                .post(handlers::pods::create_pod),
        )
        .route("/all-pods", get(handlers::pods::list_all_pods))
        .route("/pods/{namespace}/{name}", get(handlers::pods::get_pod))
        .route(
            "/pods/{namespace}/{name}/yaml",
            get(handlers::pods::get_pod_yaml),
        )
}

/// PodGroup routes, read only
pub fn pod_group_routes() -> Router<AppState> {
    Router::new()
        .route("/podgroups", get(handlers::podgroups::list_pod_groups))
        .route(
            "/all-podgroups",
            get(handlers::podgroups::list_all_pod_groups),
        )
        .route(
            "/podgroups/{namespace}/{name}",
            get(handlers::podgroups::get_pod_group),
        )
        .route(
            "/podgroups/{namespace}/{name}/yaml",
            get(handlers::podgroups::get_pod_group_yaml),
        )
}

/// Cluster-wide routes
pub fn cluster_routes() -> Router<AppState> {
    Router::new()
        .route("/namespaces", get(handlers::cluster::list_namespaces))
        .route("/metrics", get(handlers::metrics::get_metrics))
        .route("/metrics/stream", get(handlers::metrics::stream_metrics))
}
