use serde::Deserialize;
use serde::Serialize;

use crate::api::{IMAGE_STREAM_API, IMAGE_STREAM_TAG_API};
use crate::Crd;
use crate::DefaultHeader;
use crate::InputK8Obj;
use crate::InputObjectMeta;
use crate::Spec;

pub type ImageStream = InputK8Obj<ImageStreamSpec>;

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageStreamSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_policy: Option<ImageLookupPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image_repository: Option<String>,
}

impl Spec for ImageStreamSpec {
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &IMAGE_STREAM_API
    }
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageLookupPolicy {
    pub local: bool,
}

impl ImageStream {
    /// empty stream that builds push into, labeled with `app` = name
    pub fn generate<N: Into<String>>(name: N) -> Self {
        let name = name.into();
        let spec = ImageStreamSpec {
            lookup_policy: Some(ImageLookupPolicy { local: false }),
            ..Default::default()
        };
        InputK8Obj::new(spec, InputObjectMeta::with_app(name.clone(), name))
    }
}

/// image stream tags (`stream:tag`) are only read through the client
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
pub struct ImageStreamTagSpec {}

impl Spec for ImageStreamTagSpec {
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &IMAGE_STREAM_TAG_API
    }

    fn is_empty(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::ImageStream;

    #[test]
    fn test_generated_stream() {
        let stream = ImageStream::generate("site-stream");
        assert_eq!(
            serde_json::to_value(&stream).expect("json"),
            json!({
                "kind": "ImageStream",
                "metadata": { "name": "site-stream", "labels": { "app": "site-stream" } },
                "spec": { "lookupPolicy": { "local": false } }
            })
        );
    }
}
