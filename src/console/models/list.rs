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
use serde::Serialize;
use utoipa::ToSchema;

use crate::listing::{ListResult, PageRequest};

/// One page of a filtered resource list
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<DynamicObject>,
    /// Number of items matching the filters, across all pages
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl ListResponse {
    pub fn new(result: ListResult, page: PageRequest) -> Self {
        Self {
            total_pages: page.total_pages(result.total_count),
            items: result.items,
            total_count: result.total_count,
            page: page.page(),
            page_size: page.page_size(),
        }
    }
}

/// Every item of a kind, unpaginated
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllResponse {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<DynamicObject>,
    pub total_count: usize,
}

impl From<Vec<DynamicObject>> for AllResponse {
    fn from(items: Vec<DynamicObject>) -> Self {
        Self {
            total_count: items.len(),
            items,
        }
    }
}

/// Namespace names
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceListResponse {
    pub items: Vec<String>,
    pub total_count: usize,
}

/// Delete response
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
