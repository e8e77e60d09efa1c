use serde_json::Value;

use openshift_types::core::storage::{AccessMode, PersistentVolumeClaim, PersistentVolumeClaimSpec};

use crate::{ClientError, HttpTransport};

use super::OpenShiftClient;

impl<T> OpenShiftClient<T>
where
    T: HttpTransport,
{
    pub async fn create_persistent_volume_claim(
        &self,
        name: &str,
        access_mode: AccessMode,
        storage: &str,
        app: &str,
    ) -> Result<Value, ClientError> {
        let claim = PersistentVolumeClaim::generate(name, access_mode, storage, app);
        self.create_item(&claim).await
    }

    pub async fn get_persistent_volume_claim(&self, name: &str) -> Result<Value, ClientError> {
        self.retrieve_item::<PersistentVolumeClaimSpec>(name).await
    }

    pub async fn update_persistent_volume_claim(
        &self,
        claim: &PersistentVolumeClaim,
    ) -> Result<Value, ClientError> {
        self.replace_item(claim).await
    }

    pub async fn delete_persistent_volume_claim(&self, name: &str) -> Result<Value, ClientError> {
        self.delete_item::<PersistentVolumeClaimSpec>(name).await
    }
}
