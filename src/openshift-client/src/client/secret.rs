use serde_json::Value;

use openshift_types::core::secret::{Secret, SecretSpec};

use crate::{ClientError, HttpTransport};

use super::OpenShiftClient;

impl<T> OpenShiftClient<T>
where
    T: HttpTransport,
{
    /// create opaque secret `name` from plain values, labeled `app` = name
    pub async fn create_secret<N, I, K, V>(&self, name: N, data: I) -> Result<Value, ClientError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.create_item(&Secret::opaque(name, data)).await
    }

    pub async fn get_secret(&self, name: &str) -> Result<Value, ClientError> {
        self.retrieve_item::<SecretSpec>(name).await
    }

    /// replace data of secret `name`, same body as create
    pub async fn update_secret<N, I, K, V>(&self, name: N, data: I) -> Result<Value, ClientError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.replace_item(&Secret::opaque(name, data)).await
    }

    pub async fn delete_secret(&self, name: &str) -> Result<Value, ClientError> {
        self.delete_item::<SecretSpec>(name).await
    }
}
