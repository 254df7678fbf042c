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

//! Shape checks for user supplied manifests.
//!
//! Only the top level is inspected; everything below `spec` is left for the
//! cluster API (and its admission webhooks) to judge.

use kube::api::DynamicObject;
use kube::core::TypeMeta;
use serde_json::{Map, Value};
use snafu::{OptionExt, ensure};

use crate::types::error::{
    Error, InvalidNameSnafu, KindMismatchSnafu, MissingFieldSnafu, NameMismatchSnafu,
    NotAnObjectSnafu,
};
use crate::types::kind::ResourceKind;

pub const DEFAULT_NAMESPACE: &str = "default";

const REQUIRED_FIELDS: [&str; 4] = ["apiVersion", "kind", "metadata", "spec"];

/// A manifest that passed validation for kind `K`.
#[derive(Debug)]
pub struct Validated {
    pub name: String,
    pub namespace: Option<String>,
    pub object: DynamicObject,
}

/// Validates a manifest submitted for creation.
pub fn validate_create<K: ResourceKind>(manifest: Value) -> Result<Validated, Error> {
    let fields = as_object(&manifest)?;
    for field in REQUIRED_FIELDS {
        ensure!(fields.contains_key(field), MissingFieldSnafu { field });
    }
    check_kind::<K>(fields)?;
    let name = name_of(fields)?;

    let object: DynamicObject = serde_json::from_value(manifest)?;
    let namespace = K::NAMESPACED.then(|| {
        object
            .metadata
            .namespace
            .clone()
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_owned())
    });

    Ok(Validated {
        name,
        namespace,
        object,
    })
}

/// Validates a manifest submitted as an update of `expected_name`.
///
/// Kinds with [`ResourceKind::PARTIAL_UPDATE`] may omit `apiVersion` and
/// `kind`; when `kind` is present it must still match. Any `status` is
/// dropped, the cluster owns it.
pub fn validate_update<K: ResourceKind>(
    manifest: Value,
    expected_name: &str,
) -> Result<Validated, Error> {
    let fields = as_object(&manifest)?;
    let required: &[&'static str] = if K::PARTIAL_UPDATE {
        &REQUIRED_FIELDS[2..]
    } else {
        &REQUIRED_FIELDS
    };
    for &field in required {
        ensure!(fields.contains_key(field), MissingFieldSnafu { field });
    }
    if fields.contains_key("kind") {
        check_kind::<K>(fields)?;
    }
    let name = name_of(fields)?;
    ensure!(
        name == expected_name,
        NameMismatchSnafu {
            kind: K::KIND,
            expected: expected_name,
            found: name.clone(),
        }
    );

    let mut manifest = manifest;
    if let Some(fields) = manifest.as_object_mut() {
        fields.remove("status");
    }
    let mut object: DynamicObject = serde_json::from_value(manifest)?;
    if object.types.is_none() {
        let resource = K::api_resource();
        object.types = Some(TypeMeta {
            api_version: resource.api_version,
            kind: resource.kind,
        });
    }
    let namespace = K::NAMESPACED
        .then(|| object.metadata.namespace.clone())
        .flatten();

    Ok(Validated {
        name,
        namespace,
        object,
    })
}

fn as_object(manifest: &Value) -> Result<&Map<String, Value>, Error> {
    manifest.as_object().context(NotAnObjectSnafu)
}

fn check_kind<K: ResourceKind>(fields: &Map<String, Value>) -> Result<(), Error> {
    let found = fields.get("kind").and_then(Value::as_str).unwrap_or_default();
    ensure!(
        found == K::KIND,
        KindMismatchSnafu {
            expected: K::KIND,
            found,
        }
    );
    Ok(())
}

fn name_of(fields: &Map<String, Value>) -> Result<String, Error> {
    fields
        .get("metadata")
        .and_then(|metadata| metadata.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .context(InvalidNameSnafu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::kind::{Job, Queue};
    use serde_json::json;

    fn job_manifest() -> Value {
        json!({
            "apiVersion": "batch.volcano.sh/v1alpha1",
            "kind": "Job",
            "metadata": { "name": "train", "namespace": "ml" },
            "spec": { "queue": "default", "minAvailable": 1 }
        })
    }

    #[test]
    fn test_validate_create_accepts_complete_manifest() {
        let validated = validate_create::<Job>(job_manifest()).unwrap();
        assert_eq!(validated.name, "train");
        assert_eq!(validated.namespace.as_deref(), Some("ml"));
        assert_eq!(validated.object.data["spec"]["minAvailable"], json!(1));
    }

    #[test]
    fn test_validate_create_defaults_namespace() {
        let mut manifest = job_manifest();
        manifest["metadata"] = json!({ "name": "train" });
        let validated = validate_create::<Job>(manifest).unwrap();
        assert_eq!(validated.namespace.as_deref(), Some(DEFAULT_NAMESPACE));
    }

    #[test]
    fn test_validate_create_cluster_scoped_has_no_namespace() {
        let manifest = json!({
            "apiVersion": "scheduling.volcano.sh/v1beta1",
            "kind": "Queue",
            "metadata": { "name": "research", "namespace": "ignored" },
            "spec": { "weight": 1 }
        });
        let validated = validate_create::<Queue>(manifest).unwrap();
        assert_eq!(validated.namespace, None);
    }

    #[test]
    fn test_validate_create_reports_each_missing_field() {
        for field in REQUIRED_FIELDS {
            let mut manifest = job_manifest();
            manifest.as_object_mut().unwrap().remove(field);
            let err = validate_create::<Job>(manifest).unwrap_err();
            assert!(
                matches!(err, Error::MissingField { field: f } if f == field),
                "unexpected error for {field}: {err}"
            );
        }
    }

    #[test]
    fn test_validate_create_rejects_wrong_kind() {
        let mut manifest = job_manifest();
        manifest["kind"] = json!("Deployment");
        let err = validate_create::<Job>(manifest).unwrap_err();
        assert_eq!(err.to_string(), "invalid kind: expected Job, got Deployment");
    }

    #[test]
    fn test_validate_create_rejects_non_string_name() {
        let mut manifest = job_manifest();
        manifest["metadata"]["name"] = json!(42);
        let err = validate_create::<Job>(manifest).unwrap_err();
        assert!(matches!(err, Error::InvalidName));
    }

    #[test]
    fn test_validate_create_rejects_non_object() {
        let err = validate_create::<Job>(json!(["not", "a", "manifest"])).unwrap_err();
        assert!(matches!(err, Error::NotAnObject));
    }

    #[test]
    fn test_validate_update_accepts_metadata_and_spec_only() {
        let body = json!({
            "metadata": { "name": "research" },
            "spec": { "weight": 3 },
            "status": { "state": "Open" }
        });
        let validated = validate_update::<Queue>(body, "research").unwrap();
        let types = validated.object.types.unwrap();
        assert_eq!(types.kind, "Queue");
        assert_eq!(types.api_version, "scheduling.volcano.sh/v1beta1");
        assert!(validated.object.data.get("status").is_none());
    }

    #[test]
    fn test_validate_update_rejects_name_mismatch() {
        let body = json!({ "metadata": { "name": "other" }, "spec": {} });
        let err = validate_update::<Queue>(body, "research").unwrap_err();
        assert!(matches!(err, Error::NameMismatch { .. }));
    }

    #[test]
    fn test_validate_update_requires_type_fields_for_jobs() {
        for field in ["apiVersion", "kind"] {
            let mut manifest = job_manifest();
            manifest.as_object_mut().unwrap().remove(field);
            let err = validate_update::<Job>(manifest, "train").unwrap_err();
            assert!(
                matches!(err, Error::MissingField { field: f } if f == field),
                "unexpected error for {field}: {err}"
            );
        }
    }

    #[test]
    fn test_validate_update_checks_kind_when_present() {
        let mut manifest = job_manifest();
        manifest["kind"] = json!("Queue");
        let err = validate_update::<Job>(manifest, "train").unwrap_err();
        assert!(matches!(err, Error::KindMismatch { .. }));
    }
}
