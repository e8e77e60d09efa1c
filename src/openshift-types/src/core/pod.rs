use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::Env;

/// memory limit key in resource requirements
pub const MEMORY: &str = "memory";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PodSpec {
    pub containers: Vec<ContainerSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<VolumeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_policy: Option<PodRestartPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodRestartPolicy {
    Always,
    Never,
    OnFailure,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<ImagePullPolicy>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ContainerPortSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<Env>,
    #[serde(skip_serializing_if = "ResourceRequirements::is_empty")]
    pub resources: ResourceRequirements,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volume_mounts: Vec<VolumeMount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,
}

impl ContainerSpec {
    pub fn named<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn set_memory_limit<M: Into<String>>(&mut self, limit: M) {
        self.resources.limits.insert(MEMORY.to_owned(), limit.into());
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePullPolicy {
    Always,
    Never,
    IfNotPresent,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Probe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec: Option<ExecAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_get: Option<HttpGetAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_socket: Option<TcpSocketAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_delay_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_threshold: Option<u32>,
}

impl Probe {
    pub fn exec<I: IntoIterator<Item = S>, S: Into<String>>(command: I) -> Self {
        Self {
            exec: Some(ExecAction {
                command: command.into_iter().map(Into::into).collect(),
            }),
            ..Default::default()
        }
    }

    pub fn http_get<P: Into<String>>(path: P, port: u16) -> Self {
        Self {
            http_get: Some(HttpGetAction {
                path: path.into(),
                port,
            }),
            ..Default::default()
        }
    }

    pub fn tcp_socket(port: u16) -> Self {
        Self {
            tcp_socket: Some(TcpSocketAction { port }),
            ..Default::default()
        }
    }

    pub fn set_initial_delay_seconds(mut self, seconds: u32) -> Self {
        self.initial_delay_seconds = Some(seconds);
        self
    }

    pub fn set_timeout_seconds(mut self, seconds: u32) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecAction {
    pub command: Vec<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpGetAction {
    pub path: String,
    pub port: u16,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TcpSocketAction {
    pub port: u16,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceRequirements {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub limits: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub requests: BTreeMap<String, String>,
}

impl ResourceRequirements {
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty() && self.requests.is_empty()
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPortSpec {
    pub container_port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl ContainerPortSpec {
    pub fn tcp(container_port: u16) -> Self {
        ContainerPortSpec {
            container_port,
            name: None,
            protocol: Some("TCP".to_owned()),
        }
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<SecretVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_volume_claim: Option<PersistentVolumeClaimVolumeSource>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeMount {
    pub name: String,
    pub mount_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretVolumeSource {
    pub secret_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<u16>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersistentVolumeClaimVolumeSource {
    pub claim_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

/// pod volume together with where the container mounts it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedVolume {
    pub volume: VolumeSpec,
    pub mount: VolumeMount,
}

impl MountedVolume {
    pub fn claim<N, C, P>(name: N, claim_name: C, mount_path: P) -> Self
    where
        N: Into<String>,
        C: Into<String>,
        P: Into<String>,
    {
        let name = name.into();
        Self {
            volume: VolumeSpec {
                name: name.clone(),
                persistent_volume_claim: Some(PersistentVolumeClaimVolumeSource {
                    claim_name: claim_name.into(),
                    read_only: None,
                }),
                ..Default::default()
            },
            mount: VolumeMount {
                name,
                mount_path: mount_path.into(),
                ..Default::default()
            },
        }
    }

    pub fn secret<N, S, P>(name: N, secret_name: S, mount_path: P) -> Self
    where
        N: Into<String>,
        S: Into<String>,
        P: Into<String>,
    {
        let name = name.into();
        Self {
            volume: VolumeSpec {
                name: name.clone(),
                secret: Some(SecretVolumeSource {
                    secret_name: secret_name.into(),
                    default_mode: None,
                }),
                ..Default::default()
            },
            mount: VolumeMount {
                name,
                mount_path: mount_path.into(),
                read_only: Some(true),
                ..Default::default()
            },
        }
    }
}

/// container plus volumes shared by the deployment config and cron job builders
pub(crate) fn add_volume(pod: &mut PodSpec, volume: MountedVolume) {
    if let Some(container) = pod.containers.first_mut() {
        container.volume_mounts.push(volume.mount);
    }
    pod.volumes.push(volume.volume);
}
