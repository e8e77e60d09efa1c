use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::Spec;

pub const TYPE_OPAQUE: &str = "Opaque";
pub const APP_LABEL: &str = "app";

pub trait LabelProvider: Sized {
    fn set_label_map(self, labels: BTreeMap<String, String>) -> Self;

    /// helper for setting list of labels
    fn set_labels<T: ToString>(self, labels: Vec<(T, T)>) -> Self {
        let mut label_map = BTreeMap::new();
        for (key, value) in labels {
            label_map.insert(key.to_string(), value.to_string());
        }
        self.set_label_map(label_map)
    }
}

/// metadata sent with a descriptor.
/// namespace is not part of it, the client puts it in the path
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct InputObjectMeta {
    pub name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl LabelProvider for InputObjectMeta {
    fn set_label_map(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = labels;
        self
    }
}

impl fmt::Display for InputObjectMeta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl InputObjectMeta {
    pub fn named<S: Into<String>>(name: S) -> Self {
        InputObjectMeta {
            name: name.into(),
            ..Default::default()
        }
    }

    /// name plus `app` label, the shape used by the generators
    pub fn with_app<S: Into<String>, A: Into<String>>(name: S, app: A) -> Self {
        Self::named(name).set_labels(vec![(APP_LABEL.to_owned(), app.into())])
    }

    pub fn set_annotations<T: Into<String>>(mut self, annotations: Vec<(T, T)>) -> Self {
        for (key, value) in annotations {
            self.annotations.insert(key.into(), value.into());
        }
        self
    }
}

/// Resource descriptor as sent to the API server.
///
/// Field order is the wire order: `kind`, `metadata`, then `spec` (left out for
/// kinds that have none) followed by the kind's top level header fields.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
#[serde(bound(serialize = "S: Serialize"))]
#[serde(bound(deserialize = "S: DeserializeOwned"))]
pub struct InputK8Obj<S>
where
    S: Spec,
{
    #[serde(default = "S::kind")]
    pub kind: String,
    #[serde(default)]
    pub metadata: InputObjectMeta,
    #[serde(default, skip_serializing_if = "Spec::is_empty")]
    pub spec: S,
    #[serde(flatten)]
    pub header: S::Header,
}

impl<S> InputK8Obj<S>
where
    S: Spec,
{
    pub fn new(spec: S, metadata: InputObjectMeta) -> Self {
        Self {
            kind: S::kind(),
            metadata,
            spec,
            header: S::Header::default(),
        }
    }

    pub fn set_header(mut self, header: S::Header) -> Self {
        self.header = header;
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// canonical JSON body
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<S> LabelProvider for InputK8Obj<S>
where
    S: Spec,
{
    fn set_label_map(mut self, labels: BTreeMap<String, String>) -> Self {
        self.metadata.labels = labels;
        self
    }
}

/// `Status` object returned by the API server on failures
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaStatus {
    pub api_version: String,
    pub kind: String,
    pub code: Option<u16>,
    pub message: Option<String>,
    pub reason: Option<String>,
    pub status: Option<StatusEnum>,
    pub details: Option<StatusDetails>,
}

impl fmt::Display for MetaStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.reason, &self.message) {
            (Some(reason), Some(message)) => write!(f, "{reason}: {message}"),
            (None, Some(message)) => write!(f, "{message}"),
            (Some(reason), None) => write!(f, "{reason}"),
            (None, None) => write!(f, "api status: {:?}", self.code),
        }
    }
}

impl std::error::Error for MetaStatus {}

#[allow(clippy::upper_case_acronyms)]
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Clone)]
pub enum StatusEnum {
    #[serde(rename = "Success")]
    SUCCESS,
    #[serde(rename = "Failure")]
    FAILURE,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusDetails {
    pub name: Option<String>,
    pub group: Option<String>,
    pub kind: Option<String>,
    pub uid: Option<String>,
}

/// name is optional for template
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl LabelProvider for TemplateMeta {
    fn set_label_map(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = labels;
        self
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateSpec<S> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TemplateMeta>,
    pub spec: S,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Env {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_from: Option<EnvVarSource>,
}

impl Env {
    pub fn key_value<T: Into<String>>(name: T, value: T) -> Self {
        Env {
            name: name.into(),
            value: Some(value.into()),
            value_from: None,
        }
    }

    /// value read from a key of a secret
    pub fn key_secret_ref<T: Into<String>>(name: T, secret: T, key: T) -> Self {
        Env {
            name: name.into(),
            value: None,
            value_from: Some(EnvVarSource {
                secret_key_ref: Some(SecretKeySelector {
                    name: secret.into(),
                    key: key.into(),
                }),
            }),
        }
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvVarSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key_ref: Option<SecretKeySelector>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretKeySelector {
    pub name: String,
    pub key: String,
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::Env;
    use super::InputObjectMeta;
    use super::LabelProvider;
    use super::MetaStatus;

    #[test]
    fn test_metadata_label() {
        let metadata =
            InputObjectMeta::default().set_labels(vec![("app".to_owned(), "test".to_owned())]);

        let maps = metadata.labels;
        assert_eq!(maps.len(), 1);
        assert_eq!(maps.get("app").unwrap(), "test");
    }

    #[test]
    fn test_metadata_omits_empty_maps() {
        let metadata = InputObjectMeta::named("web");
        assert_eq!(serde_json::to_value(&metadata).unwrap(), json!({"name": "web"}));

        let metadata = InputObjectMeta::with_app("web", "site").set_annotations(vec![("a", "b")]);
        assert_eq!(
            serde_json::to_string(&metadata).unwrap(),
            r#"{"name":"web","labels":{"app":"site"},"annotations":{"a":"b"}}"#
        );
    }

    #[test]
    fn test_env() {
        let env = Env::key_value("lang", "english");
        assert_eq!(env.name, "lang");
        assert_eq!(env.value, Some("english".to_owned()));
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"name": "lang", "value": "english"})
        );

        let env = Env::key_secret_ref("DB_PASS", "db", "password");
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"name": "DB_PASS", "valueFrom": {"secretKeyRef": {"name": "db", "key": "password"}}})
        );
    }

    #[test]
    fn test_meta_status() {
        let status: MetaStatus = serde_json::from_value(json!({
            "kind": "Status",
            "apiVersion": "v1",
            "metadata": {},
            "status": "Failure",
            "message": "secrets \"db\" not found",
            "reason": "NotFound",
            "details": { "name": "db", "kind": "secrets" },
            "code": 404
        }))
        .expect("status");
        assert_eq!(status.code, Some(404));
        assert_eq!(status.to_string(), "NotFound: secrets \"db\" not found");
    }
}
