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

//! Query strings of the list endpoints. `""` and `"All"` in any filter mean
//! "no constraint".

use serde::Deserialize;
use utoipa::IntoParams;

use crate::listing::{FilterCriteria, PageRequest};

/// Job list query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct JobListQuery {
    pub namespace: Option<String>,
    /// Case-insensitive substring of the job name
    pub search: Option<String>,
    pub queue: Option<String>,
    /// Job phase, e.g. `Running`
    pub status: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl JobListQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            namespace: self.namespace.clone(),
            search: self.search.clone(),
            state: self.status.clone(),
            group: self.queue.clone(),
        }
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

/// Queue list query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QueueListQuery {
    pub search: Option<String>,
    /// Queue state, e.g. `Open`
    pub state: Option<String>,
    /// Parent queue name
    pub parent: Option<String>,
    pub page: Option<i64>,
    /// Page size, also accepted as `pageSize`
    #[serde(alias = "pageSize")]
    pub limit: Option<i64>,
}

impl QueueListQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            namespace: None,
            search: self.search.clone(),
            state: self.state.clone(),
            group: self.parent.clone(),
        }
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}

/// Pod list query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PodListQuery {
    pub namespace: Option<String>,
    pub search: Option<String>,
    /// Pod phase, e.g. `Pending`
    pub status: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PodListQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            namespace: self.namespace.clone(),
            search: self.search.clone(),
            state: self.status.clone(),
            group: None,
        }
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

/// PodGroup list query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PodGroupListQuery {
    pub namespace: Option<String>,
    pub search: Option<String>,
    pub queue: Option<String>,
    /// PodGroup phase, e.g. `Inqueue`
    pub status: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PodGroupListQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            namespace: self.namespace.clone(),
            search: self.search.clone(),
            state: self.status.clone(),
            group: self.queue.clone(),
        }
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}
