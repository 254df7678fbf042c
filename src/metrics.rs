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

//! State counts behind the dashboard charts.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kube::api::DynamicObject;
use serde::Serialize;
use utoipa::ToSchema;

use crate::cluster::{Cluster, Error};
use crate::listing::fetch::fetch;
use crate::types::kind::{Job, Pod, PodGroup, Queue, ResourceKind, UNKNOWN_STATE};

/// Item counts of one kind, grouped by state
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KindSummary {
    pub total: usize,
    pub by_state: BTreeMap<String, usize>,
}

/// Cluster-wide snapshot pushed to the charts
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub timestamp: DateTime<Utc>,
    pub jobs: KindSummary,
    pub queues: KindSummary,
    pub pods: KindSummary,
    pub pod_groups: KindSummary,
}

pub fn summarize<K: ResourceKind>(items: &[DynamicObject]) -> KindSummary {
    let mut summary = KindSummary {
        total: items.len(),
        ..Default::default()
    };
    for item in items {
        let state = K::state(item).unwrap_or(UNKNOWN_STATE);
        *summary.by_state.entry(state.to_owned()).or_default() += 1;
    }
    summary
}

/// Fetches every kind concurrently and counts items per state.
pub async fn snapshot(cluster: &Cluster) -> Result<MetricsSnapshot, Error> {
    let (jobs, queues, pods, pod_groups) = futures::try_join!(
        fetch::<Job>(cluster, None),
        fetch::<Queue>(cluster, None),
        fetch::<Pod>(cluster, None),
        fetch::<PodGroup>(cluster, None),
    )?;

    Ok(MetricsSnapshot {
        timestamp: Utc::now(),
        jobs: summarize::<Job>(&jobs),
        queues: summarize::<Queue>(&queues),
        pods: summarize::<Pod>(&pods),
        pod_groups: summarize::<PodGroup>(&pod_groups),
    })
}
