//! OpenShift only kinds, served from the `*.openshift.io` API groups

pub mod build;
pub mod deploy;
pub mod image;
pub mod route;

use serde::Deserialize;
use serde::Serialize;

pub const IMAGE_STREAM_TAG: &str = "ImageStreamTag";

/// reference to another object by kind and name
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ObjectReference {
    pub fn new<K: Into<String>, N: Into<String>>(kind: K, name: N) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            namespace: None,
        }
    }

    pub fn image_stream_tag<N: Into<String>>(name: N) -> Self {
        Self::new(IMAGE_STREAM_TAG, name)
    }
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LocalObjectReference {
    pub name: String,
}

impl LocalObjectReference {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self { name: name.into() }
    }
}
