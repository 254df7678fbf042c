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

use serde::Serialize;

/// Renders a resource as the YAML document shown in the edit dialogs.
///
/// Mappings are indented by two spaces and keys keep the order they had in
/// the API response (`serde_json` is built with `preserve_order`). The
/// serializer never emits anchors or aliases.
pub fn to_yaml<T: Serialize>(item: &T) -> Result<String, serde_yaml_ng::Error> {
    serde_yaml_ng::to_string(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{job, object};
    use serde_json::{Value, json};

    #[test]
    fn test_yaml_round_trip() {
        let item = job("job1", "a", "q1", "Running");
        let yaml = to_yaml(&item).unwrap();

        let reparsed: Value = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(reparsed, serde_json::to_value(&item).unwrap());
    }

    #[test]
    fn test_yaml_keeps_key_order_and_indent() {
        let item = object(json!({
            "apiVersion": "batch.volcano.sh/v1alpha1",
            "kind": "Job",
            "metadata": { "name": "ordered", "namespace": "a" },
            "spec": { "zeta": 1, "alpha": { "nested": true }, "mid": "x" }
        }));
        let yaml = to_yaml(&item).unwrap();

        let zeta = yaml.find("zeta:").unwrap();
        let alpha = yaml.find("alpha:").unwrap();
        let mid = yaml.find("mid:").unwrap();
        assert!(zeta < alpha && alpha < mid, "keys reordered:\n{yaml}");
        assert!(yaml.starts_with("apiVersion: batch.volcano.sh/v1alpha1\nkind: Job\n"));
        assert!(yaml.contains("\nspec:\n  zeta: 1\n  alpha:\n    nested: true\n"));
    }

    #[test]
    fn test_yaml_repeated_values_are_not_aliased() {
        let item = object(json!({
            "metadata": { "name": "shared" },
            "spec": { "a": { "k": "v" }, "b": { "k": "v" } }
        }));
        let yaml = to_yaml(&item).unwrap();
        assert!(!yaml.contains('&') && !yaml.contains('*'));
    }

    #[test]
    fn test_yaml_sequences_sit_at_parent_key_indent() {
        let item = object(json!({
            "metadata": { "name": "web" },
            "spec": { "containers": [{ "name": "c", "image": "nginx" }] }
        }));
        let yaml = to_yaml(&item).unwrap();
        assert!(yaml.contains("\nspec:\n  containers:\n  - name: c\n    image: nginx\n"), "{yaml}");
    }

    #[test]
    fn test_yaml_long_scalars_stay_on_one_line() {
        let long = vec!["volcano"; 25].join(" ");
        assert_eq!(long.len(), 199);
        let item = object(json!({ "metadata": { "name": "long" }, "spec": { "note": long } }));
        let yaml = to_yaml(&item).unwrap();
        assert!(yaml.contains(&format!("\n  note: {long}\n")), "{yaml}");
    }
}
