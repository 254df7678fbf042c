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

//! Resource kinds served by the dashboard.
//!
//! Every kind is handled as a [`DynamicObject`] so that `spec` and `status`
//! pass through untouched. The differences between kinds (API coordinates,
//! scope, where the state and grouping fields live) are captured by the
//! [`ResourceKind`] trait.

use k8s_openapi::api::core::v1 as corev1;
use kube::api::{ApiResource, DynamicObject, GroupVersionKind};
use serde_json::{Map, Value};

/// State assigned by the `all-*` endpoints when an item has none yet.
pub const UNKNOWN_STATE: &str = "Unknown";

const VOLCANO_BATCH_GROUP: &str = "batch.volcano.sh";
const VOLCANO_SCHEDULING_GROUP: &str = "scheduling.volcano.sh";

pub trait ResourceKind: Send + Sync + 'static {
    /// Kind as written in manifests.
    const KIND: &'static str;

    /// Lower-case plural, used in error summaries.
    const PLURAL: &'static str;

    /// Cluster-scoped kinds ignore any namespace they are given.
    const NAMESPACED: bool;

    /// Location of the state field, relative to the object body.
    const STATE_PATH: &'static [&'static str];

    /// Location of the grouping field (`spec.queue`, `spec.parent`), if the
    /// kind has one.
    const GROUP_PATH: Option<&'static [&'static str]> = None;

    /// Updates may leave out `apiVersion` and `kind`.
    const PARTIAL_UPDATE: bool = false;

    fn api_resource() -> ApiResource;

    fn state(item: &DynamicObject) -> Option<&str> {
        lookup(&item.data, Self::STATE_PATH).and_then(Value::as_str)
    }

    fn group(item: &DynamicObject) -> Option<&str> {
        Self::GROUP_PATH
            .and_then(|path| lookup(&item.data, path))
            .and_then(Value::as_str)
    }
}

/// Volcano batch job (`batch.volcano.sh/v1alpha1`).
pub struct Job;

impl ResourceKind for Job {
    const KIND: &'static str = "Job";
    const PLURAL: &'static str = "jobs";
    const NAMESPACED: bool = true;
    const STATE_PATH: &'static [&'static str] = &["status", "state", "phase"];
    const GROUP_PATH: Option<&'static [&'static str]> = Some(&["spec", "queue"]);

    fn api_resource() -> ApiResource {
        ApiResource::from_gvk_with_plural(
            &GroupVersionKind::gvk(VOLCANO_BATCH_GROUP, "v1alpha1", Self::KIND),
            Self::PLURAL,
        )
    }

    // Older controllers report `status.state` as a bare string.
    fn state(item: &DynamicObject) -> Option<&str> {
        let state = lookup(&item.data, &["status", "state"])?;
        state
            .get("phase")
            .and_then(Value::as_str)
            .or_else(|| state.as_str())
    }
}

/// Volcano queue (`scheduling.volcano.sh/v1beta1`), cluster scoped.
pub struct Queue;

impl ResourceKind for Queue {
    const KIND: &'static str = "Queue";
    const PLURAL: &'static str = "queues";
    const NAMESPACED: bool = false;
    const STATE_PATH: &'static [&'static str] = &["status", "state"];
    const GROUP_PATH: Option<&'static [&'static str]> = Some(&["spec", "parent"]);
    // the queue editor sends `metadata` and `spec` only
    const PARTIAL_UPDATE: bool = true;

    fn api_resource() -> ApiResource {
        ApiResource::from_gvk_with_plural(
            &GroupVersionKind::gvk(VOLCANO_SCHEDULING_GROUP, "v1beta1", Self::KIND),
            Self::PLURAL,
        )
    }
}

/// Volcano pod group (`scheduling.volcano.sh/v1beta1`).
pub struct PodGroup;

impl ResourceKind for PodGroup {
    const KIND: &'static str = "PodGroup";
    const PLURAL: &'static str = "podgroups";
    const NAMESPACED: bool = true;
    const STATE_PATH: &'static [&'static str] = &["status", "phase"];
    const GROUP_PATH: Option<&'static [&'static str]> = Some(&["spec", "queue"]);

    fn api_resource() -> ApiResource {
        ApiResource::from_gvk_with_plural(
            &GroupVersionKind::gvk(VOLCANO_SCHEDULING_GROUP, "v1beta1", Self::KIND),
            Self::PLURAL,
        )
    }
}

pub struct Pod;

impl ResourceKind for Pod {
    const KIND: &'static str = "Pod";
    const PLURAL: &'static str = "pods";
    const NAMESPACED: bool = true;
    const STATE_PATH: &'static [&'static str] = &["status", "phase"];

    fn api_resource() -> ApiResource {
        ApiResource::erase::<corev1::Pod>(&())
    }
}

pub struct Namespace;

impl ResourceKind for Namespace {
    const KIND: &'static str = "Namespace";
    const PLURAL: &'static str = "namespaces";
    const NAMESPACED: bool = false;
    const STATE_PATH: &'static [&'static str] = &["status", "phase"];

    fn api_resource() -> ApiResource {
        ApiResource::erase::<corev1::Namespace>(&())
    }
}

pub fn name(item: &DynamicObject) -> &str {
    item.metadata.name.as_deref().unwrap_or_default()
}

pub fn namespace(item: &DynamicObject) -> Option<&str> {
    item.metadata.namespace.as_deref()
}

/// Fills in the kind's state field with [`UNKNOWN_STATE`] when it is
/// missing. Items that already carry a state are returned as they are.
pub fn normalize_state<K: ResourceKind>(mut item: DynamicObject) -> DynamicObject {
    if K::state(&item).is_none() {
        set_path(&mut item.data, K::STATE_PATH, Value::from(UNKNOWN_STATE));
    }
    item
}

pub(crate) fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

fn set_path(value: &mut Value, path: &[&str], leaf: Value) -> Option<()> {
    let (last, parents) = path.split_last()?;
    let mut current = value;
    for key in parents {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        current = current
            .as_object_mut()?
            .entry(*key)
            .or_insert(Value::Null);
    }
    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    current.as_object_mut()?.insert((*last).to_owned(), leaf);
    Some(())
}
