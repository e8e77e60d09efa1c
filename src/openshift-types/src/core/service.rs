use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::api::SERVICE_API;
use crate::Crd;
use crate::DefaultHeader;
use crate::InputK8Obj;
use crate::InputObjectMeta;
use crate::Spec;

/// pods of a deployment config carry this label
pub const DEPLOYMENT_CONFIG_SELECTOR: &str = "deploymentconfig";

pub type Service = InputK8Obj<ServiceSpec>;

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ServicePort>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub selector: BTreeMap<String, String>,
}

impl Spec for ServiceSpec {
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &SERVICE_API
    }
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServicePort {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_port: Option<TargetPort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_port: Option<u16>,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Clone, Copy)]
#[allow(clippy::upper_case_acronyms)]
pub enum Protocol {
    TCP,
    UDP,
    SCTP,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Clone)]
#[serde(untagged)]
pub enum TargetPort {
    Number(u16),
    Name(String),
}

impl std::fmt::Display for TargetPort {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Name(value) => write!(f, "{}", value),
        }
    }
}

impl From<u16> for TargetPort {
    fn from(port: u16) -> Self {
        Self::Number(port)
    }
}

impl Service {
    /// TCP service in front of the pods of deployment config `deployment`
    pub fn generate<N, D, A>(name: N, deployment: D, port: u16, target_port: u16, app: A) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        A: Into<String>,
    {
        let mut selector = BTreeMap::new();
        selector.insert(DEPLOYMENT_CONFIG_SELECTOR.to_owned(), deployment.into());

        let spec = ServiceSpec {
            ports: vec![ServicePort {
                name: Some(format!("{port}-tcp")),
                protocol: Some(Protocol::TCP),
                port,
                target_port: Some(target_port.into()),
                ..Default::default()
            }],
            selector,
        };

        InputK8Obj::new(spec, InputObjectMeta::with_app(name, app))
    }
}
