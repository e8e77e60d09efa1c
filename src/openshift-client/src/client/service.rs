use serde_json::Value;

use openshift_types::core::service::{Service, ServiceSpec};

use crate::{ClientError, HttpTransport};

use super::OpenShiftClient;

impl<T> OpenShiftClient<T>
where
    T: HttpTransport,
{
    /// TCP service selecting the pods of deployment config `deployment`
    pub async fn create_service(
        &self,
        name: &str,
        deployment: &str,
        port: u16,
        target_port: u16,
        app: &str,
    ) -> Result<Value, ClientError> {
        let service = Service::generate(name, deployment, port, target_port, app);
        self.create_item(&service).await
    }

    pub async fn get_service(&self, name: &str) -> Result<Value, ClientError> {
        self.retrieve_item::<ServiceSpec>(name).await
    }

    pub async fn update_service(&self, service: &Service) -> Result<Value, ClientError> {
        self.replace_item(service).await
    }

    pub async fn delete_service(&self, name: &str) -> Result<Value, ClientError> {
        self.delete_item::<ServiceSpec>(name).await
    }
}
