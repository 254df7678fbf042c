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


use std::pin::Pin;

use clap::ValueEnum;
use kube::api::DynamicObject;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cluster::{Cluster, KubeCluster};
use crate::config::Config;
use crate::console::state::AppState;
use crate::types::kind::{Job, Pod, PodGroup, Queue};
use crate::types::manifest::DEFAULT_NAMESPACE;

pub mod cluster;
pub mod config;
pub mod console;
pub mod listing;
pub mod metrics;
pub mod types;


shadow_rs::shadow!(build);

/// Kinds the `get` command can dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceType {
    Job,
    Queue,
    Pod,
    #[value(name = "podgroup")]
    PodGroup,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!(
        "starting dashboard {} ({}, built {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BUILD_TIME
    );

    let cluster = Cluster::new(KubeCluster::connect(&config).await?);
    let state = AppState::new(cluster, config.metrics_interval());

    console::server::run(&config, state).await
}

/// Writes one object as YAML to `file`, or to stdout.
pub async fn get(
    config: Config,
    kind: ResourceType,
    name: String,
    namespace: Option<String>,
    file: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cluster = Cluster::new(KubeCluster::connect(&config).await?);
    let object = fetch_one(&cluster, kind, namespace.as_deref(), &name).await?;

    let mut writer: Pin<Box<dyn AsyncWrite + Send>> = if let Some(file) = file {
        Box::pin(
            tokio::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(file)
                .await?,
        )
    } else {
        Box::pin(tokio::io::stdout())
    };

    writer
        .write_all(listing::format::to_yaml(&object)?.as_bytes())
        .await?;
    writer.flush().await?;

    Ok(())
}

async fn fetch_one(
    cluster: &Cluster,
    kind: ResourceType,
    namespace: Option<&str>,
    name: &str,
) -> Result<DynamicObject, cluster::Error> {
    let namespace = Some(namespace.unwrap_or(DEFAULT_NAMESPACE));
    match kind {
        ResourceType::Job => cluster.get::<Job>(namespace, name).await,
        ResourceType::Queue => cluster.get::<Queue>(namespace, name).await,
        ResourceType::Pod => cluster.get::<Pod>(namespace, name).await,
        ResourceType::PodGroup => cluster.get::<PodGroup>(namespace, name).await,
    }
}

#[cfg(test)]
mod get_tests {
    use super::*;
    use crate::tests::{FakeCluster, job, pod_group, queue};

    fn cluster() -> Cluster {
        Cluster::new(FakeCluster::with(vec![
            job("train", "default", "research", "Running"),
            job("train", "ml", "research", "Pending"),
            queue("research", None, "Open"),
            pod_group("train-pg", "ml", "research", "Running"),
        ]))
    }

    #[tokio::test]
    async fn test_fetch_one_defaults_namespace() {
        let object = fetch_one(&cluster(), ResourceType::Job, None, "train")
            .await
            .unwrap();
        assert_eq!(object.data["status"]["state"]["phase"], "Running");

        let object = fetch_one(&cluster(), ResourceType::Job, Some("ml"), "train")
            .await
            .unwrap();
        assert_eq!(object.data["status"]["state"]["phase"], "Pending");
    }

    #[tokio::test]
    async fn test_fetch_one_cluster_scoped() {
        let object = fetch_one(&cluster(), ResourceType::Queue, None, "research")
            .await
            .unwrap();
        assert_eq!(object.metadata.name.as_deref(), Some("research"));
    }

    #[tokio::test]
    async fn test_fetch_one_missing() {
        let err = fetch_one(&cluster(), ResourceType::PodGroup, None, "train-pg")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
