use serde::Deserialize;
use serde::Serialize;

use crate::api::BUILD_CONFIG_API;
use crate::Crd;
use crate::DefaultHeader;
use crate::Env;
use crate::InputK8Obj;
use crate::InputObjectMeta;
use crate::LabelProvider;
use crate::Spec;

use super::{LocalObjectReference, ObjectReference};

pub const DOCKER_IMAGE: &str = "DockerImage";

pub type BuildConfig = InputK8Obj<BuildConfigSpec>;

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfigSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_policy: Option<RunPolicy>,
    pub source: BuildSource,
    pub strategy: BuildStrategy,
    pub output: BuildOutput,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<BuildTriggerPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_deadline_seconds: Option<u64>,
}

impl Spec for BuildConfigSpec {
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &BUILD_CONFIG_API
    }
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Clone, Copy)]
pub enum RunPolicy {
    Serial,
    Parallel,
    SerialLatestOnly,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildSource {
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<GitBuildSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_secret: Option<LocalObjectReference>,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GitBuildSource {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildStrategy {
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_strategy: Option<SourceBuildStrategy>,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceBuildStrategy {
    pub from: ObjectReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_secret: Option<LocalObjectReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<Env>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<ObjectReference>,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Clone)]
#[serde(tag = "type")]
pub enum BuildTriggerPolicy {
    ConfigChange,
    #[serde(rename_all = "camelCase")]
    ImageChange { image_change: ImageChangeTrigger },
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageChangeTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<ObjectReference>,
}

/// Chained construction of a source-to-image [`BuildConfig`] that pushes into
/// an image stream tag. Same contract as the route builder: setters consume
/// and return the builder, the last value wins, nothing is validated.
#[derive(Debug, Clone)]
pub struct BuildConfigBuilder {
    config: BuildConfig,
}

impl BuildConfigBuilder {
    /// serial git build with config change and image change triggers
    pub fn create<N, T>(name: N, image_stream_tag: T) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        let spec = BuildConfigSpec {
            run_policy: Some(RunPolicy::Serial),
            source: BuildSource {
                r#type: "Git".to_owned(),
                ..Default::default()
            },
            strategy: BuildStrategy {
                r#type: "Source".to_owned(),
                source_strategy: Some(SourceBuildStrategy::default()),
            },
            output: BuildOutput {
                to: Some(ObjectReference::image_stream_tag(image_stream_tag)),
            },
            triggers: vec![
                BuildTriggerPolicy::ConfigChange,
                BuildTriggerPolicy::ImageChange {
                    image_change: ImageChangeTrigger::default(),
                },
            ],
            completion_deadline_seconds: None,
        };
        Self {
            config: InputK8Obj::new(spec, InputObjectMeta::named(name)),
        }
    }

    pub fn set_labels<T: ToString>(mut self, labels: Vec<(T, T)>) -> Self {
        self.config.metadata = self.config.metadata.set_labels(labels);
        self
    }

    pub fn set_git<U: Into<String>, R: Into<String>>(mut self, uri: U, git_ref: R) -> Self {
        self.config.spec.source.git = Some(GitBuildSource {
            uri: uri.into(),
            r#ref: Some(git_ref.into()),
        });
        self
    }

    /// secret used to clone the repository
    pub fn set_source_secret<S: Into<String>>(mut self, secret: S) -> Self {
        self.config.spec.source.source_secret = Some(LocalObjectReference::new(secret));
        self
    }

    /// builder image, e.g. (`DockerImage`, `registry/php:8.1`)
    pub fn set_source_image<K: Into<String>, N: Into<String>>(mut self, kind: K, name: N) -> Self {
        self.source_strategy().from = ObjectReference::new(kind, name);
        self
    }

    pub fn set_pull_secret<S: Into<String>>(mut self, secret: S) -> Self {
        self.source_strategy().pull_secret = Some(LocalObjectReference::new(secret));
        self
    }

    pub fn set_incremental(mut self, incremental: bool) -> Self {
        self.source_strategy().incremental = Some(incremental);
        self
    }

    pub fn add_env(mut self, env: Env) -> Self {
        self.source_strategy().env.push(env);
        self
    }

    pub fn set_run_policy(mut self, policy: RunPolicy) -> Self {
        self.config.spec.run_policy = Some(policy);
        self
    }

    pub fn set_completion_deadline_seconds(mut self, seconds: u64) -> Self {
        self.config.spec.completion_deadline_seconds = Some(seconds);
        self
    }

    pub fn build(self) -> BuildConfig {
        self.config
    }

    fn source_strategy(&mut self) -> &mut SourceBuildStrategy {
        self.config
            .spec
            .strategy
            .source_strategy
            .get_or_insert_with(SourceBuildStrategy::default)
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::{BuildConfigBuilder, RunPolicy, DOCKER_IMAGE};
    use crate::Env;

    #[test]
    fn test_build_config_body() {
        let config = BuildConfigBuilder::create("site-build", "site-stream:master")
            .set_git("git@github.com:example/site.git", "master")
            .set_source_secret("build-key")
            .set_source_image(DOCKER_IMAGE, "registry.example.com/php:8.1")
            .add_env(Env::key_value("COMPOSER_ARGS", "--no-dev"))
            .build();

        assert_eq!(
            serde_json::to_value(&config).expect("json"),
            json!({
                "kind": "BuildConfig",
                "metadata": { "name": "site-build" },
                "spec": {
                    "runPolicy": "Serial",
                    "source": {
                        "type": "Git",
                        "git": { "uri": "git@github.com:example/site.git", "ref": "master" },
                        "sourceSecret": { "name": "build-key" }
                    },
                    "strategy": {
                        "type": "Source",
                        "sourceStrategy": {
                            "from": { "kind": "DockerImage", "name": "registry.example.com/php:8.1" },
                            "env": [{ "name": "COMPOSER_ARGS", "value": "--no-dev" }]
                        }
                    },
                    "output": { "to": { "kind": "ImageStreamTag", "name": "site-stream:master" } },
                    "triggers": [
                        { "type": "ConfigChange" },
                        { "type": "ImageChange", "imageChange": {} }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_build_config_last_value_wins() {
        let config = BuildConfigBuilder::create("b", "s:latest")
            .set_run_policy(RunPolicy::Parallel)
            .set_git("https://a", "main")
            .set_git("https://b", "develop")
            .set_run_policy(RunPolicy::SerialLatestOnly)
            .build();

        let git = config.spec.source.git.expect("git");
        assert_eq!(git.uri, "https://b");
        assert_eq!(git.r#ref.as_deref(), Some("develop"));
        assert_eq!(config.spec.run_policy, Some(RunPolicy::SerialLatestOnly));
    }
}
