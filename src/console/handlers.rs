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

//! Route handlers. The per-kind modules only parse parameters; the shared
//! fetch → filter/paginate → format steps live here.

pub mod cluster;
pub mod jobs;
pub mod metrics;
pub mod podgroups;
pub mod pods;
pub mod queues;

use axum::{Json, http::StatusCode};
use kube::api::DynamicObject;
use serde_json::Value;
use snafu::ResultExt;
use tracing::info;

use crate::console::{
    error::{self, Error, Result},
    extract::Yaml,
    models::list::{AllResponse, DeleteResponse, ListResponse},
    state::AppState,
};
use crate::listing::{self, FilterCriteria, PageRequest, fetch::fetch, format};
use crate::types::kind::{ResourceKind, normalize_state};
use crate::types::manifest;

pub(crate) async fn list_page<K: ResourceKind>(
    state: &AppState,
    criteria: FilterCriteria,
    page: PageRequest,
) -> Result<Json<ListResponse>> {
    let items = fetch::<K>(&state.cluster, criteria.namespace.as_deref())
        .await
        .context(error::FetchSnafu { kind: K::PLURAL })?;

    let result = listing::filter_and_paginate::<K>(items, &criteria, page);
    Ok(Json(ListResponse::new(result, page)))
}

/// Every item of `K` across all namespaces, with missing states defaulted
/// to `"Unknown"`.
pub(crate) async fn list_everything<K: ResourceKind>(
    state: &AppState,
) -> Result<Json<AllResponse>> {
    let items = fetch::<K>(&state.cluster, None)
        .await
        .context(error::FetchSnafu { kind: K::PLURAL })?;

    let items: Vec<DynamicObject> = items.into_iter().map(normalize_state::<K>).collect();
    Ok(Json(AllResponse::from(items)))
}

pub(crate) async fn get_object<K: ResourceKind>(
    state: &AppState,
    namespace: Option<&str>,
    name: &str,
) -> Result<DynamicObject> {
    state
        .cluster
        .get::<K>(namespace, name)
        .await
        .context(error::FetchSnafu { kind: K::PLURAL })
}

pub(crate) async fn get_yaml<K: ResourceKind>(
    state: &AppState,
    namespace: Option<&str>,
    name: &str,
) -> Result<Yaml> {
    let object = get_object::<K>(state, namespace, name).await?;
    let yaml = format::to_yaml(&object).context(error::YamlSnafu)?;
    Ok(Yaml(yaml))
}

pub(crate) async fn create<K: ResourceKind>(
    state: &AppState,
    manifest: Value,
) -> Result<(StatusCode, Json<DynamicObject>)> {
    let validated = manifest::validate_create::<K>(manifest).context(error::ValidationSnafu)?;

    let created = state
        .cluster
        .create::<K>(validated.namespace.as_deref(), &validated.object)
        .await
        .context(error::MutateSnafu {
            action: "create",
            kind: K::KIND,
        })?;

    info!(
        "created {} {}/{}",
        K::KIND,
        validated.namespace.as_deref().unwrap_or_default(),
        validated.name
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// Full replace of `name`.
///
/// `uid` always comes from the live object. A `resourceVersion` sent by the
/// client is kept, so edits made on a stale copy fail with the upstream
/// conflict; without one the live version is used.
pub(crate) async fn update<K: ResourceKind>(
    state: &AppState,
    namespace: Option<&str>,
    name: &str,
    manifest: Value,
) -> Result<Json<DynamicObject>> {
    let mut validated =
        manifest::validate_update::<K>(manifest, name).context(error::ValidationSnafu)?;

    if let (Some(expected), Some(found)) = (namespace, validated.namespace.as_deref())
        && expected != found
    {
        return Err(Error::BadRequest {
            message: format!(
                "metadata.namespace '{}' does not match the {} being updated ('{}')",
                found,
                K::KIND,
                expected
            ),
        });
    }

    let mutate = || error::MutateSnafu {
        action: "update",
        kind: K::KIND,
    };
    let current = state
        .cluster
        .get::<K>(namespace, name)
        .await
        .context(mutate())?;

    let metadata = &mut validated.object.metadata;
    metadata.namespace = current.metadata.namespace.clone();
    metadata.uid = current.metadata.uid.clone();
    if metadata.resource_version.is_none() {
        metadata.resource_version = current.metadata.resource_version.clone();
    }

    let updated = state
        .cluster
        .replace::<K>(namespace, name, &validated.object)
        .await
        .context(mutate())?;

    info!("updated {} {}", K::KIND, name);
    Ok(Json(updated))
}

pub(crate) async fn delete<K: ResourceKind>(
    state: &AppState,
    namespace: Option<&str>,
    name: &str,
) -> Result<Json<DeleteResponse>> {
    state
        .cluster
        .delete::<K>(namespace, name)
        .await
        .context(error::MutateSnafu {
            action: "delete",
            kind: K::KIND,
        })?;

    info!("deleted {} {}", K::KIND, name);
    Ok(Json(DeleteResponse {
        success: true,
        message: format!("{} {} deleted successfully", K::KIND, name),
    }))
}
