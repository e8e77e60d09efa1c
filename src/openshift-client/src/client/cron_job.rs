use serde_json::Value;

use openshift_types::batch::cron_job::{CronJob, CronJobSpec};

use crate::{ClientError, HttpTransport};

use super::OpenShiftClient;

impl<T> OpenShiftClient<T>
where
    T: HttpTransport,
{
    pub async fn create_cron_job(&self, job: &CronJob) -> Result<Value, ClientError> {
        self.create_item(job).await
    }

    pub async fn get_cron_job(&self, name: &str) -> Result<Value, ClientError> {
        self.retrieve_item::<CronJobSpec>(name).await
    }

    pub async fn update_cron_job(&self, job: &CronJob) -> Result<Value, ClientError> {
        self.replace_item(job).await
    }

    pub async fn delete_cron_job(&self, name: &str) -> Result<Value, ClientError> {
        self.delete_item::<CronJobSpec>(name).await
    }
}
