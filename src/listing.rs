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

//! The list pipeline shared by every resource kind:
//! fetch everything in scope, filter in memory, then cut one page.

pub mod fetch;
pub mod filter;
pub mod format;
pub mod page;

pub use filter::FilterCriteria;
pub use page::{ListResult, PageRequest};

use kube::api::DynamicObject;

use crate::types::kind::ResourceKind;

/// Filters `items` with `criteria` and returns the requested page together
/// with the size of the whole filtered set.
pub fn filter_and_paginate<K: ResourceKind>(
    items: Vec<DynamicObject>,
    criteria: &FilterCriteria,
    page: PageRequest,
) -> ListResult {
    let filtered = criteria.filter::<K>(items);
    let total_count = filtered.len();

    ListResult {
        items: page.slice(filtered),
        total_count,
    }
}
