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

use crate::types::kind::{self, ResourceKind};

/// Filter value the UI sends for "no constraint".
pub const ALL: &str = "All";

/// Returns the value if it actually constrains anything: empty strings and
/// `"All"` do not.
pub fn constraint(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL)
}

/// Per-request filter. Every field is optional and the set fields are
/// combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact match on `metadata.namespace`.
    pub namespace: Option<String>,
    /// Case-insensitive substring match on `metadata.name`.
    pub search: Option<String>,
    /// Exact match on the kind's state field.
    pub state: Option<String>,
    /// Exact match on the kind's grouping field (queue or parent queue).
    pub group: Option<String>,
}

impl FilterCriteria {
    pub fn matches<K: ResourceKind>(&self, item: &DynamicObject) -> bool {
        // search is free text, only the empty string disables it
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty())
            && !kind::name(item)
                .to_lowercase()
                .contains(&search.to_lowercase())
        {
            return false;
        }

        if let Some(namespace) = constraint(self.namespace.as_deref())
            && kind::namespace(item) != Some(namespace)
        {
            return false;
        }

        if let Some(group) = constraint(self.group.as_deref())
            && K::group(item) != Some(group)
        {
            return false;
        }

        if let Some(state) = constraint(self.state.as_deref())
            && K::state(item) != Some(state)
        {
            return false;
        }

        true
    }

    /// Keeps the matching items, in their original order.
    pub fn filter<K: ResourceKind>(&self, items: Vec<DynamicObject>) -> Vec<DynamicObject> {
        items
            .into_iter()
            .filter(|item| self.matches::<K>(item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{job, pod, queue};
    use crate::types::kind::{Job, Pod, Queue};

    #[test]
    fn test_constraint() {
        assert_eq!(constraint(None), None);
        assert_eq!(constraint(Some("")), None);
        assert_eq!(constraint(Some("All")), None);
        assert_eq!(constraint(Some("all")), Some("all"));
        assert_eq!(constraint(Some("default")), Some("default"));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = vec![
            job("Job-A", "a", "q", "Running"),
            job("job-b", "a", "q", "Running"),
            job("JOB-C", "a", "q", "Running"),
            job("other", "a", "q", "Running"),
        ];
        let criteria = FilterCriteria {
            search: Some("job-".to_string()),
            ..Default::default()
        };
        let kept = criteria.filter::<Job>(items);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_all_means_no_constraint() {
        let items = vec![pod("p1", "a", "Running"), pod("p2", "b", "Failed")];
        let criteria = FilterCriteria {
            namespace: Some("All".to_string()),
            state: Some("All".to_string()),
            search: Some(String::new()),
            group: Some(String::new()),
        };
        assert_eq!(criteria.filter::<Pod>(items).len(), 2);
    }

    #[test]
    fn test_group_filter_on_kind_without_group_matches_nothing() {
        let items = vec![pod("p1", "a", "Running")];
        let criteria = FilterCriteria {
            group: Some("q1".to_string()),
            ..Default::default()
        };
        assert!(criteria.filter::<Pod>(items).is_empty());
    }

    #[test]
    fn test_queue_parent_filter() {
        let items = vec![
            queue("root", None, "Open"),
            queue("child-a", Some("root"), "Open"),
            queue("child-b", Some("root"), "Closed"),
        ];
        let criteria = FilterCriteria {
            group: Some("root".to_string()),
            state: Some("Open".to_string()),
            ..Default::default()
        };
        let kept = criteria.filter::<Queue>(items);
        assert_eq!(kept.len(), 1);
        assert_eq!(kind::name(&kept[0]), "child-a");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = vec![
            job("job1", "a", "q1", "Running"),
            job("job2", "a", "q2", "Pending"),
            job("job3", "b", "q1", "Running"),
        ];
        let criteria = FilterCriteria {
            namespace: Some("a".to_string()),
            search: Some("JOB".to_string()),
            ..Default::default()
        };

        let once = criteria.filter::<Job>(items);
        let twice = criteria.filter::<Job>(once.clone());
        let names = |items: &[DynamicObject]| -> Vec<String> {
            items.iter().map(|o| kind::name(o).to_string()).collect()
        };
        assert_eq!(names(&once), names(&twice));
        assert_eq!(names(&once), ["job1", "job2"]);
    }
}
