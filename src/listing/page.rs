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

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a filtered list. `page` and `page_size` are 1-based and
/// never below 1: smaller requested values are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let clamp = |value: i64| usize::try_from(value.max(1)).unwrap_or(usize::MAX);
        Self {
            page: page.map_or(DEFAULT_PAGE, clamp),
            page_size: page_size.map_or(DEFAULT_PAGE_SIZE, clamp),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total_count: usize) -> usize {
        total_count.div_ceil(self.page_size)
    }

    /// Cuts the page out of `items`. Pages past the end are empty.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let start = (self.page - 1).saturating_mul(self.page_size);
        items
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }
}

/// Filtered items of one page plus the size of the whole filtered set.
#[derive(Debug, Clone)]
pub struct ListResult {
    pub items: Vec<DynamicObject>,
    pub total_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageRequest::new(None, None);
        assert_eq!(page, PageRequest::default());
        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), 10);
    }

    #[test]
    fn test_clamps_below_one() {
        let page = PageRequest::new(Some(0), Some(-5));
        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), 1);
    }

    #[test]
    fn test_slice() {
        let items: Vec<u32> = (1..=25).collect();
        let first = PageRequest::new(Some(1), Some(10)).slice(items.clone());
        assert_eq!(first, (1..=10).collect::<Vec<_>>());
        let last = PageRequest::new(Some(3), Some(10)).slice(items.clone());
        assert_eq!(last, (21..=25).collect::<Vec<_>>());
        assert!(PageRequest::new(Some(10), Some(10)).slice(items).is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items: Vec<u32> = (1..=3).collect();
        assert!(PageRequest::new(Some(i64::MAX), Some(i64::MAX)).slice(items).is_empty());
    }

    #[test]
    fn test_total_pages() {
        let page = PageRequest::new(Some(1), Some(10));
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(10), 1);
        assert_eq!(page.total_pages(25), 3);
    }
}
