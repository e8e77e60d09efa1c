use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::api::PERSISTENT_VOLUME_CLAIM_API;
use crate::Crd;
use crate::DefaultHeader;
use crate::InputK8Obj;
use crate::InputObjectMeta;
use crate::Spec;

pub const STORAGE: &str = "storage";

pub type PersistentVolumeClaim = InputK8Obj<PersistentVolumeClaimSpec>;

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistentVolumeClaimSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub access_modes: Vec<AccessMode>,
    pub resources: StorageRequirements,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,
}

impl Spec for PersistentVolumeClaimSpec {
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &PERSISTENT_VOLUME_CLAIM_API
    }
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Clone, Copy)]
pub enum AccessMode {
    ReadWriteOnce,
    ReadOnlyMany,
    ReadWriteMany,
    ReadWriteOncePod,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageRequirements {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub requests: BTreeMap<String, String>,
}

impl PersistentVolumeClaim {
    /// claim of `storage` (e.g. "10Gi") labeled with the owning application
    pub fn generate<N, S, A>(name: N, access_mode: AccessMode, storage: S, app: A) -> Self
    where
        N: Into<String>,
        S: Into<String>,
        A: Into<String>,
    {
        let mut requests = BTreeMap::new();
        requests.insert(STORAGE.to_owned(), storage.into());

        let spec = PersistentVolumeClaimSpec {
            access_modes: vec![access_mode],
            resources: StorageRequirements { requests },
            storage_class_name: None,
        };

        InputK8Obj::new(spec, InputObjectMeta::with_app(name, app))
    }

    pub fn set_storage_class<S: Into<String>>(mut self, storage_class: S) -> Self {
        self.spec.storage_class_name = Some(storage_class.into());
        self
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::{AccessMode, PersistentVolumeClaim};

    #[test]
    fn test_generated_claim() {
        let claim =
            PersistentVolumeClaim::generate("site-private", AccessMode::ReadWriteMany, "10Gi", "site");
        assert_eq!(
            serde_json::to_value(&claim).expect("json"),
            json!({
                "kind": "PersistentVolumeClaim",
                "metadata": { "name": "site-private", "labels": { "app": "site" } },
                "spec": {
                    "accessModes": ["ReadWriteMany"],
                    "resources": { "requests": { "storage": "10Gi" } }
                }
            })
        );
    }

    #[test]
    fn test_storage_class() {
        let claim =
            PersistentVolumeClaim::generate("site-public", AccessMode::ReadWriteOnce, "1Gi", "site")
                .set_storage_class("gp2");
        let value = serde_json::to_value(&claim).expect("json");
        assert_eq!(value["spec"]["storageClassName"], json!("gp2"));
    }
}
