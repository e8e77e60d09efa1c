use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::api::DEPLOYMENT_CONFIG_API;
use crate::core::pod::{add_volume, ContainerPortSpec, ContainerSpec, MountedVolume, PodSpec, Probe};
use crate::core::service::DEPLOYMENT_CONFIG_SELECTOR;
use crate::Crd;
use crate::DefaultHeader;
use crate::Env;
use crate::InputK8Obj;
use crate::InputObjectMeta;
use crate::LabelProvider;
use crate::Spec;
use crate::TemplateMeta;
use crate::TemplateSpec;

use super::ObjectReference;

pub type DeploymentConfig = InputK8Obj<DeploymentConfigSpec>;

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentConfigSpec {
    pub replicas: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_history_limit: Option<u32>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub selector: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<DeploymentStrategy>,
    pub template: TemplateSpec<PodSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<DeploymentTriggerPolicy>,
}

impl Spec for DeploymentConfigSpec {
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &DEPLOYMENT_CONFIG_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentStrategy {
    pub r#type: DeploymentStrategyType,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentStrategyType {
    #[default]
    Rolling,
    Recreate,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum DeploymentTriggerPolicy {
    ConfigChange,
    #[serde(rename_all = "camelCase")]
    ImageChange {
        image_change_params: ImageChangeParams,
    },
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageChangeParams {
    pub automatic: bool,
    pub container_names: Vec<String>,
    pub from: ObjectReference,
}

/// Chained construction of a single container [`DeploymentConfig`] whose image
/// comes from an image stream tag. Pods are selected by the
/// `deploymentconfig` label, the same label generated services select on.
#[derive(Debug, Clone)]
pub struct DeploymentConfigBuilder {
    config: DeploymentConfig,
}

impl DeploymentConfigBuilder {
    pub fn create<N, T, I>(name: N, image_stream_tag: T, image_name: I) -> Self
    where
        N: Into<String>,
        T: Into<String>,
        I: Into<String>,
    {
        let name = name.into();
        let image_name = image_name.into();

        let mut selector = BTreeMap::new();
        selector.insert(DEPLOYMENT_CONFIG_SELECTOR.to_owned(), name.clone());

        let mut container = ContainerSpec::named(image_name.clone());
        container.image = Some(image_name.clone());

        let template = TemplateSpec {
            metadata: Some(TemplateMeta {
                name: Some(name.clone()),
                labels: selector.clone(),
                ..Default::default()
            }),
            spec: PodSpec {
                containers: vec![container],
                ..Default::default()
            },
        };

        let spec = DeploymentConfigSpec {
            replicas: 1,
            selector,
            strategy: Some(DeploymentStrategy::default()),
            template,
            triggers: vec![
                DeploymentTriggerPolicy::ImageChange {
                    image_change_params: ImageChangeParams {
                        automatic: false,
                        container_names: vec![image_name],
                        from: ObjectReference::image_stream_tag(image_stream_tag),
                    },
                },
                DeploymentTriggerPolicy::ConfigChange,
            ],
            ..Default::default()
        };

        Self {
            config: InputK8Obj::new(spec, InputObjectMeta::named(name)),
        }
    }

    /// redeploy automatically when the image stream tag moves
    pub fn set_update_on_image_change(mut self, automatic: bool) -> Self {
        for trigger in self.config.spec.triggers.iter_mut() {
            if let DeploymentTriggerPolicy::ImageChange {
                image_change_params,
            } = trigger
            {
                image_change_params.automatic = automatic;
            }
        }
        self
    }

    pub fn set_replicas(mut self, replicas: u32) -> Self {
        self.config.spec.replicas = replicas;
        self
    }

    pub fn set_revision_history_limit(mut self, limit: u32) -> Self {
        self.config.spec.revision_history_limit = Some(limit);
        self
    }

    pub fn set_strategy(mut self, strategy: DeploymentStrategyType) -> Self {
        self.config.spec.strategy = Some(DeploymentStrategy { r#type: strategy });
        self
    }

    pub fn set_container_port(mut self, port: u16) -> Self {
        self.container().ports = vec![ContainerPortSpec::tcp(port)];
        self
    }

    pub fn set_memory_limit<M: Into<String>>(mut self, limit: M) -> Self {
        self.container().set_memory_limit(limit);
        self
    }

    pub fn add_env(mut self, env: Env) -> Self {
        self.container().env.push(env);
        self
    }

    pub fn set_liveness_probe(mut self, probe: Probe) -> Self {
        self.container().liveness_probe = Some(probe);
        self
    }

    pub fn set_readiness_probe(mut self, probe: Probe) -> Self {
        self.container().readiness_probe = Some(probe);
        self
    }

    pub fn add_volume(mut self, volume: MountedVolume) -> Self {
        add_volume(&mut self.config.spec.template.spec, volume);
        self
    }

    /// labels replace any set before and go on the deployment config and on
    /// its pods; the pods always keep the `deploymentconfig` selector label
    pub fn set_labels<T: ToString>(mut self, labels: Vec<(T, T)>) -> Self {
        self.config.metadata = self.config.metadata.set_labels(labels);
        let mut pod_labels = self.config.metadata.labels.clone();
        pod_labels.extend(self.config.spec.selector.clone());
        self.template_meta().labels = pod_labels;
        self
    }

    /// annotations go on the pod template
    pub fn set_annotations<T: Into<String>>(mut self, annotations: Vec<(T, T)>) -> Self {
        let template = self.template_meta();
        for (key, value) in annotations {
            template.annotations.insert(key.into(), value.into());
        }
        self
    }

    pub fn build(self) -> DeploymentConfig {
        self.config
    }

    fn container(&mut self) -> &mut ContainerSpec {
        let pod = &mut self.config.spec.template.spec;
        if pod.containers.is_empty() {
            pod.containers.push(ContainerSpec::default());
        }
        &mut pod.containers[0]
    }

    fn template_meta(&mut self) -> &mut TemplateMeta {
        self.config
            .spec
            .template
            .metadata
            .get_or_insert_with(TemplateMeta::default)
    }
}
