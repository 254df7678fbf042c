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

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    Json,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::{Stream, StreamExt};
use snafu::ResultExt;
use strum::Display;
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::IntervalStream;
use tracing::warn;

use crate::cluster::Cluster;
use crate::console::{
    error::{self, ErrorResponse, Result},
    state::AppState,
};
use crate::metrics::{self, MetricsSnapshot};

/// Event names on the metrics stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StreamEvent {
    #[strum(serialize = "snapshot")]
    Snapshot,
    #[strum(serialize = "error")]
    Error,
}

/// Current state counts of every kind
#[utoipa::path(
    get,
    path = "/api/metrics",
    tag = "metrics",
    responses(
        (status = 200, body = MetricsSnapshot),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn get_metrics(State(state): State<AppState>) -> Result<Json<MetricsSnapshot>> {
    metrics::snapshot(&state.cluster)
        .await
        .map(Json)
        .context(error::FetchSnafu { kind: "metrics" })
}

/// Server-sent events, one `snapshot` per interval
#[utoipa::path(
    get,
    path = "/api/metrics/stream",
    tag = "metrics",
    responses(
        (
            status = 200,
            description = "Event stream of metrics snapshots",
            content_type = "text/event-stream"
        )
    )
)]
pub async fn stream_metrics(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let cluster = state.cluster;
    let events = ticks(state.metrics_interval).then(move |_| {
        let cluster = cluster.clone();
        async move { Ok(snapshot_event(&cluster).await) }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// First tick fires at once. A slow snapshot pushes the next tick back
/// instead of bunching ticks up.
fn ticks(period: Duration) -> IntervalStream {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    IntervalStream::new(interval)
}

/// A failed snapshot becomes an `error` event; the stream goes on.
async fn snapshot_event(cluster: &Cluster) -> Event {
    let snapshot = match metrics::snapshot(cluster).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("metrics snapshot failed: {}", e);
            return Event::default()
                .event(StreamEvent::Error.to_string())
                .data(e.message());
        }
    };

    match Event::default()
        .event(StreamEvent::Snapshot.to_string())
        .json_data(&snapshot)
    {
        Ok(event) => event,
        Err(e) => Event::default()
            .event(StreamEvent::Error.to_string())
            .data(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use futures::StreamExt;
    use tower::ServiceExt;

    use super::*;
    use crate::tests::{FakeCluster, job, pod, queue, send_json, test_app};

    #[tokio::test]
    async fn test_ticks_keep_the_period_after_a_slow_snapshot() {
        let ticks = ticks(Duration::from_secs(5));
        assert_eq!(ticks.as_ref().missed_tick_behavior(), MissedTickBehavior::Delay);
        assert_eq!(ticks.as_ref().period(), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_get_metrics() {
        let fake = Arc::new(FakeCluster::with(vec![
            job("a", "ns", "q", "Running"),
            job("b", "ns", "q", "Completed"),
            queue("q", None, "Open"),
            pod("p", "ns", "Running"),
        ]));
        let (status, body) = send_json(test_app(fake), Method::GET, "/api/metrics", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["jobs"]["total"], 2);
        assert_eq!(body["jobs"]["byState"]["Completed"], 1);
        assert_eq!(body["queues"]["byState"]["Open"], 1);
        assert_eq!(body["podGroups"]["total"], 0);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_get_metrics_failure() {
        let fake = Arc::new(FakeCluster::failing(500, "etcd unavailable"));
        let (status, body) = send_json(test_app(fake), Method::GET, "/api/metrics", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch metrics");
    }

    async fn first_event(fake: Arc<FakeCluster>) -> String {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/metrics/stream")
            .body(Body::empty())
            .unwrap();
        let response = test_app(fake).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "text/event-stream");

        let mut body = response.into_body().into_data_stream();
        let chunk = body.next().await.unwrap().unwrap();
        String::from_utf8(chunk.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_stream_emits_snapshot() {
        let fake = Arc::new(FakeCluster::with(vec![pod("p", "ns", "Pending")]));
        let event = first_event(fake).await;
        assert!(event.starts_with("event: snapshot\n"), "{event}");
        assert!(event.contains("\"Pending\":1"));
    }

    #[tokio::test]
    async fn test_stream_reports_failures_as_events() {
        let fake = Arc::new(FakeCluster::failing(503, "apiserver is shutting down"));
        let event = first_event(fake).await;
        assert!(event.starts_with("event: error\n"), "{event}");
        assert!(event.contains("data: apiserver is shutting down"));
    }
}
