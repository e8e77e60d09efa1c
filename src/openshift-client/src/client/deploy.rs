use serde_json::Value;

use openshift_types::openshift::deploy::{DeploymentConfig, DeploymentConfigSpec};
use openshift_types::options::ListOptions;

use crate::{ClientError, HttpTransport};

use super::OpenShiftClient;

impl<T> OpenShiftClient<T>
where
    T: HttpTransport,
{
    pub async fn create_deployment_config(
        &self,
        config: &DeploymentConfig,
    ) -> Result<Value, ClientError> {
        self.create_item(config).await
    }

    pub async fn get_deployment_config(&self, name: &str) -> Result<Value, ClientError> {
        self.retrieve_item::<DeploymentConfigSpec>(name).await
    }

    pub async fn update_deployment_config(
        &self,
        config: &DeploymentConfig,
    ) -> Result<Value, ClientError> {
        self.replace_item(config).await
    }

    pub async fn delete_deployment_config(&self, name: &str) -> Result<Value, ClientError> {
        self.delete_item::<DeploymentConfigSpec>(name).await
    }

    /// deployment configs matching `label_selector`, e.g. `app=site`
    pub async fn list_deployment_configs(&self, label_selector: &str) -> Result<Value, ClientError> {
        self.retrieve_items::<DeploymentConfigSpec>(Some(ListOptions::labels(label_selector)))
            .await
    }
}
