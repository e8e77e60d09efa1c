use serde_json::Value;

use openshift_types::openshift::route::{Route, RouteSpec};

use crate::{ClientError, HttpTransport};

use super::OpenShiftClient;

impl<T> OpenShiftClient<T>
where
    T: HttpTransport,
{
    pub async fn create_route(&self, route: &Route) -> Result<Value, ClientError> {
        self.create_item(route).await
    }

    pub async fn get_route(&self, name: &str) -> Result<Value, ClientError> {
        self.retrieve_item::<RouteSpec>(name).await
    }

    pub async fn update_route(&self, route: &Route) -> Result<Value, ClientError> {
        self.replace_item(route).await
    }

    pub async fn delete_route(&self, name: &str) -> Result<Value, ClientError> {
        self.delete_item::<RouteSpec>(name).await
    }
}
