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

use utoipa::OpenApi;

use crate::console::{
    error::ErrorResponse,
    handlers::{cluster, jobs, metrics, podgroups, pods, queues},
    models::list::{AllResponse, DeleteResponse, ListResponse, NamespaceListResponse},
};
use crate::metrics::{KindSummary, MetricsSnapshot};

/// OpenAPI document served at `/api-docs/openapi.json`
#[derive(OpenApi)]
#[openapi(
    info(title = "Volcano Dashboard API"),
    paths(
        jobs::list_jobs,
        jobs::list_all_jobs,
        jobs::get_job,
        jobs::get_job_yaml,
        jobs::create_job,
        jobs::update_job,
        jobs::delete_job,
        queues::list_queues,
        queues::list_all_queues,
        queues::get_queue,
        queues::get_queue_yaml,
        queues::create_queue,
        queues::update_queue,
        queues::delete_queue,
        pods::list_pods,
        pods::list_all_pods,
        pods::get_pod,
        pods::get_pod_yaml,
        pods::create_pod,
        podgroups::list_pod_groups,
        podgroups::list_all_pod_groups,
        podgroups::get_pod_group,
        podgroups::get_pod_group_yaml,
        cluster::list_namespaces,
        metrics::get_metrics,
        metrics::stream_metrics,
    ),
    components(schemas(
        ListResponse,
        AllResponse,
        NamespaceListResponse,
        DeleteResponse,
        ErrorResponse,
        KindSummary,
        MetricsSnapshot,
    )),
    tags(
        (name = "jobs", description = "Volcano batch jobs"),
        (name = "queues", description = "Volcano scheduling queues"),
        (name = "pods", description = "Pods"),
        (name = "podgroups", description = "Volcano pod groups"),
        (name = "cluster", description = "Namespaces"),
        (name = "metrics", description = "State counts for the dashboard charts"),
    )
)]
pub struct ApiDoc;
