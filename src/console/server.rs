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

use axum::{Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use http::{HeaderValue, Method, header, header::InvalidHeaderValue};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::console::{openapi::ApiDoc, routes, state::AppState};
use crate::types::kind::Namespace;

/// Starts the dashboard HTTP server and serves until the listener fails.
pub async fn run(config: &Config, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let app = app(state).layer(cors(&config.cors_origin)?);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Dashboard server listening on http://{}", addr);
    info!("  - GET  /api/jobs, /api/queues, /api/pods, /api/podgroups");
    info!("  - GET  /swagger-ui");
    info!("  - GET  /healthz");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Application router, without CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/readyz", get(ready_check))
        .nest("/api", api_routes())
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

/// Allows the dashboard frontend at `origin` to call the API.
pub fn cors(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(origin.parse::<HeaderValue>()?)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(routes::job_routes())
        .merge(routes::queue_routes())
        .merge(routes::pod_routes())
        .merge(routes::pod_group_routes())
        .merge(routes::cluster_routes())
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Ready once the cluster API answers.
async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.cluster.list_all::<Namespace>().await {
        Ok(_) => (StatusCode::OK, "Ready"),
        Err(e) => {
            warn!("cluster API not reachable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};

    use super::*;
    use crate::tests::{FakeCluster, get_json, namespace, send, test_app};

    #[tokio::test]
    async fn test_health_and_ready() {
        let fake = Arc::new(FakeCluster::with(vec![namespace("default")]));
        let (status, _, body) = send(test_app(fake.clone()), Method::GET, "/healthz", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"OK");

        let (status, _, _) = send(test_app(fake), Method::GET, "/readyz", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_not_ready_without_cluster() {
        let fake = Arc::new(FakeCluster::failing(502, "connection refused"));
        let (status, _, _) = send(test_app(fake.clone()), Method::GET, "/readyz", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        // liveness does not depend on the cluster
        let (status, _, _) = send(test_app(fake), Method::GET, "/healthz", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_openapi_document() {
        let fake = Arc::new(FakeCluster::default());
        let (status, doc) = get_json(&fake, "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        for path in [
            "/api/jobs",
            "/api/queues/{name}",
            "/api/pods/{namespace}/{name}/yaml",
            "/api/all-podgroups",
            "/api/metrics/stream",
        ] {
            assert!(doc["paths"].get(path).is_some(), "missing {path}");
        }
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let fake = Arc::new(FakeCluster::default());
        let (status, _) = get_json(&fake, "/api/deployments").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_cors_rejects_invalid_origin() {
        assert!(cors("http://localhost:3000").is_ok());
        assert!(cors("http://bad\norigin").is_err());
    }
}
