use serde_json::Value;

use openshift_types::openshift::image::{ImageStream, ImageStreamSpec, ImageStreamTagSpec};

use crate::{ClientError, HttpTransport};

use super::OpenShiftClient;

impl<T> OpenShiftClient<T>
where
    T: HttpTransport,
{
    pub async fn create_image_stream(&self, name: &str) -> Result<Value, ClientError> {
        self.create_item(&ImageStream::generate(name)).await
    }

    pub async fn get_image_stream(&self, name: &str) -> Result<Value, ClientError> {
        self.retrieve_item::<ImageStreamSpec>(name).await
    }

    pub async fn update_image_stream(&self, stream: &ImageStream) -> Result<Value, ClientError> {
        self.replace_item(stream).await
    }

    pub async fn delete_image_stream(&self, name: &str) -> Result<Value, ClientError> {
        self.delete_item::<ImageStreamSpec>(name).await
    }

    /// `name` is `stream:tag`
    pub async fn get_image_stream_tag(&self, name: &str) -> Result<Value, ClientError> {
        self.retrieve_item::<ImageStreamTagSpec>(name).await
    }
}
