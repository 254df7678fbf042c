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

use std::time::Duration;

use crate::cluster::Cluster;

/// Shared by every handler. Holds no per-request state.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Cluster API handle, created once at startup
    pub cluster: Cluster,
    /// Period of the metrics event stream
    pub metrics_interval: Duration,
}

impl AppState {
    pub fn new(cluster: Cluster, metrics_interval: Duration) -> Self {
        Self {
            cluster,
            metrics_interval,
        }
    }
}
