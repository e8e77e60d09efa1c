use serde_json::Value;

use openshift_types::openshift::build::{BuildConfig, BuildConfigSpec};

use crate::{ClientError, HttpTransport};

use super::OpenShiftClient;

impl<T> OpenShiftClient<T>
where
    T: HttpTransport,
{
    pub async fn create_build_config(&self, config: &BuildConfig) -> Result<Value, ClientError> {
        self.create_item(config).await
    }

    pub async fn get_build_config(&self, name: &str) -> Result<Value, ClientError> {
        self.retrieve_item::<BuildConfigSpec>(name).await
    }

    pub async fn update_build_config(&self, config: &BuildConfig) -> Result<Value, ClientError> {
        self.replace_item(config).await
    }

    pub async fn delete_build_config(&self, name: &str) -> Result<Value, ClientError> {
        self.delete_item::<BuildConfigSpec>(name).await
    }
}
