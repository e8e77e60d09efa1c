use serde::Deserialize;
use serde::Serialize;

use crate::api::CRON_JOB_API;
use crate::core::pod::{add_volume, ContainerSpec, MountedVolume, PodRestartPolicy, PodSpec};
use crate::Crd;
use crate::DefaultHeader;
use crate::Env;
use crate::InputK8Obj;
use crate::InputObjectMeta;
use crate::LabelProvider;
use crate::Spec;
use crate::TemplateMeta;
use crate::TemplateSpec;

pub type CronJob = InputK8Obj<CronJobSpec>;

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CronJobSpec {
    pub schedule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency_policy: Option<ConcurrencyPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_deadline_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_jobs_history_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_jobs_history_limit: Option<u32>,
    pub job_template: JobTemplateSpec,
}

impl Spec for CronJobSpec {
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &CRON_JOB_API
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcurrencyPolicy {
    Allow,
    Forbid,
    Replace,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct JobTemplateSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TemplateMeta>,
    pub spec: JobSpec,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSpec {
    pub template: TemplateSpec<PodSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backoff_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_deadline_seconds: Option<u64>,
}

/// Chained construction of a [`CronJob`] running one container. Jobs do not
/// overlap (`Forbid`) and failed pods restart in place (`OnFailure`).
#[derive(Debug, Clone)]
pub struct CronJobBuilder {
    job: CronJob,
}

impl CronJobBuilder {
    pub fn create<N, I, S>(name: N, image_name: I, schedule: S) -> Self
    where
        N: Into<String>,
        I: Into<String>,
        S: Into<String>,
    {
        let name = name.into();

        let mut container = ContainerSpec::named(name.clone());
        container.image = Some(image_name.into());

        let spec = CronJobSpec {
            schedule: schedule.into(),
            concurrency_policy: Some(ConcurrencyPolicy::Forbid),
            suspend: Some(false),
            job_template: JobTemplateSpec {
                metadata: None,
                spec: JobSpec {
                    template: TemplateSpec {
                        metadata: None,
                        spec: PodSpec {
                            containers: vec![container],
                            restart_policy: Some(PodRestartPolicy::OnFailure),
                            ..Default::default()
                        },
                    },
                    ..Default::default()
                },
            },
            ..Default::default()
        };

        Self {
            job: InputK8Obj::new(spec, InputObjectMeta::named(name)),
        }
    }

    pub fn set_suspend(mut self, suspend: bool) -> Self {
        self.job.spec.suspend = Some(suspend);
        self
    }

    pub fn set_schedule<S: Into<String>>(mut self, schedule: S) -> Self {
        self.job.spec.schedule = schedule.into();
        self
    }

    pub fn set_concurrency_policy(mut self, policy: ConcurrencyPolicy) -> Self {
        self.job.spec.concurrency_policy = Some(policy);
        self
    }

    pub fn set_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.container().args = args.into_iter().map(Into::into).collect();
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

    pub fn add_volume(mut self, volume: MountedVolume) -> Self {
        add_volume(self.pod(), volume);
        self
    }

    pub fn set_labels<T: ToString>(mut self, labels: Vec<(T, T)>) -> Self {
        self.job.metadata = self.job.metadata.set_labels(labels);
        self
    }

    /// annotations go on the pods the jobs create
    pub fn set_annotations<T: Into<String>>(mut self, annotations: Vec<(T, T)>) -> Self {
        let template = self
            .job
            .spec
            .job_template
            .spec
            .template
            .metadata
            .get_or_insert_with(TemplateMeta::default);
        for (key, value) in annotations {
            template.annotations.insert(key.into(), value.into());
        }
        self
    }

    pub fn build(self) -> CronJob {
        self.job
    }

    fn pod(&mut self) -> &mut PodSpec {
        &mut self.job.spec.job_template.spec.template.spec
    }

    fn container(&mut self) -> &mut ContainerSpec {
        let pod = self.pod();
        if pod.containers.is_empty() {
            pod.containers.push(ContainerSpec::default());
        }
        &mut pod.containers[0]
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::CronJobBuilder;
    use crate::core::pod::MountedVolume;
    use crate::Env;

    #[test]
    fn test_cron_job_body() {
        let job = CronJobBuilder::create("site-cron", "site-image", "*/30 * * * *")
            .set_args(["/bin/sh", "-c", "cd /code; drush -r web cron"])
            .set_memory_limit("128Mi")
            .add_env(Env::key_value("ENV", "dev"))
            .set_annotations(vec![("test", "tester")])
            .add_volume(MountedVolume::secret("keys", "site-keys", "/etc/keys"))
            .build();

        assert_eq!(
            serde_json::to_value(&job).expect("json"),
            json!({
                "kind": "CronJob",
                "metadata": { "name": "site-cron" },
                "spec": {
                    "schedule": "*/30 * * * *",
                    "concurrencyPolicy": "Forbid",
                    "suspend": false,
                    "jobTemplate": {
                        "spec": {
                            "template": {
                                "metadata": { "annotations": { "test": "tester" } },
                                "spec": {
                                    "containers": [{
                                        "name": "site-cron",
                                        "image": "site-image",
                                        "args": ["/bin/sh", "-c", "cd /code; drush -r web cron"],
                                        "env": [{ "name": "ENV", "value": "dev" }],
                                        "resources": { "limits": { "memory": "128Mi" } },
                                        "volumeMounts": [{ "name": "keys", "mountPath": "/etc/keys", "readOnly": true }]
                                    }],
                                    "volumes": [{ "name": "keys", "secret": { "secretName": "site-keys" } }],
                                    "restartPolicy": "OnFailure"
                                }
                            }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_cron_job_suspend() {
        let job = CronJobBuilder::create("c", "i", "@daily")
            .set_suspend(true)
            .set_schedule("@hourly")
            .build();
        assert_eq!(job.spec.suspend, Some(true));
        assert_eq!(job.spec.schedule, "@hourly");
    }
}
