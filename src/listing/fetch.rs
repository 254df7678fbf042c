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

use kube::api::DynamicObject;
use tracing::debug;

use crate::cluster::{Cluster, Error};
use crate::listing::filter::constraint;
use crate::types::kind::ResourceKind;

/// Fetches the complete, unfiltered list of `K` in `namespace`, or in every
/// namespace when none is given (or it is `""`/`"All"`, or `K` is cluster
/// scoped).
///
/// The whole collection is materialised; filtering and paging happen later
/// in memory.
pub async fn fetch<K: ResourceKind>(
    cluster: &Cluster,
    namespace: Option<&str>,
) -> Result<Vec<DynamicObject>, Error> {
    let items = match constraint(namespace) {
        Some(ns) if K::NAMESPACED => cluster.list_in_namespace::<K>(ns).await?,
        _ => cluster.list_all::<K>().await?,
    };

    debug!("fetched {} {}", items.len(), K::PLURAL);
    Ok(items)
}
