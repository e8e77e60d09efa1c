use serde::Deserialize;
use serde::Serialize;

use crate::api::SECRET_API;
use crate::Crd;
use crate::Header;
use crate::InputK8Obj;
use crate::InputObjectMeta;
use crate::Spec;
use crate::TYPE_OPAQUE;

pub type Secret = InputK8Obj<SecretSpec>;

impl Spec for SecretSpec {
    type Header = SecretHeader;

    fn metadata() -> &'static Crd {
        &SECRET_API
    }

    fn is_empty(&self) -> bool {
        true
    }
}

/// secrets carry no `spec`, everything lives in the header
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SecretSpec {}

/// `data` holds the raw values in the order they were given; they are base64
/// encoded on the wire
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretHeader {
    #[serde(rename = "type", default)]
    pub ty: String,
    #[serde(default, with = "base64_data")]
    pub data: Vec<(String, String)>,
}

impl Header for SecretHeader {}

impl SecretHeader {
    /// a repeated key keeps its first position and takes the last value
    pub fn opaque<I, K, V>(data: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut header = Self {
            ty: TYPE_OPAQUE.to_owned(),
            data: vec![],
        };
        for (key, value) in data {
            header.insert(key, value);
        }
        header
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let (key, value) = (key.into(), value.into());
        match self.data.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.data.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }
}

impl Secret {
    /// opaque secret labeled with `app` = name
    pub fn opaque<N, I, K, V>(name: N, data: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        InputK8Obj::new(SecretSpec {}, InputObjectMeta::with_app(name.clone(), name))
            .set_header(SecretHeader::opaque(data))
    }
}

mod base64_data {

    use std::fmt;

    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::de::{Error, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::Deserializer;
    use serde::Serializer;

    pub fn serialize<S>(data: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(data.len()))?;
        for (key, value) in data {
            map.serialize_entry(key, &STANDARD.encode(value))?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EncodedData)
    }

    struct EncodedData;

    impl<'de> Visitor<'de> for EncodedData {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("map of base64 encoded strings")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut data = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, String>()? {
                let bytes = STANDARD.decode(value.as_bytes()).map_err(A::Error::custom)?;
                let value = String::from_utf8(bytes).map_err(A::Error::custom)?;
                data.push((key, value));
            }
            Ok(data)
        }
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::{Secret, SecretHeader};

    const SECRET_BODY: &str = r#"{"kind":"Secret","metadata":{"name":"my-secret-name","labels":{"app":"my-secret-name"}},"type":"Opaque","data":{"username":"am9obi5kb2U=","password":"c2VjcmV0IQ=="}}"#;

    #[test]
    fn test_secret_body() {
        let secret = Secret::opaque(
            "my-secret-name",
            [("username", "john.doe"), ("password", "secret!")],
        );

        assert_eq!(secret.to_json().expect("json"), SECRET_BODY);
    }

    #[test]
    fn test_secret_keeps_caller_order() {
        let secret = Secret::opaque("s", [("zeta", "1"), ("alpha", "2"), ("mid", "3")]);
        let body = secret.to_json().expect("json");
        assert!(body.ends_with(r#""data":{"zeta":"MQ==","alpha":"Mg==","mid":"Mw=="}}"#));
    }

    #[test]
    fn test_secret_repeated_key() {
        let header = SecretHeader::opaque([("user", "a"), ("pass", "b"), ("user", "c")]);
        assert_eq!(
            header.data,
            vec![
                ("user".to_owned(), "c".to_owned()),
                ("pass".to_owned(), "b".to_owned())
            ]
        );
    }

    #[test]
    fn test_secret_empty_value() {
        let secret = Secret::opaque("empty", [("token", "")]);
        let value = serde_json::to_value(&secret).expect("value");
        assert_eq!(value["data"], json!({"token": ""}));
    }

    #[test]
    fn test_secret_decode() {
        let secret: Secret = serde_json::from_str(
            r#"{"kind":"Secret","apiVersion":"v1","metadata":{"name":"db","namespace":"ns1","uid":"1234"},"type":"Opaque","data":{"username":"am9obi5kb2U=","password":"c2VjcmV0IQ=="}}"#,
        )
        .expect("secret");

        assert_eq!(secret.name(), "db");
        assert_eq!(secret.header.ty, "Opaque");
        assert_eq!(secret.header.get("username"), Some("john.doe"));
        assert_eq!(
            secret.to_json().expect("json"),
            r#"{"kind":"Secret","metadata":{"name":"db"},"type":"Opaque","data":{"username":"am9obi5kb2U=","password":"c2VjcmV0IQ=="}}"#
        );
    }

    #[test]
    fn test_secret_decode_invalid_base64() {
        let result = serde_json::from_value::<Secret>(json!({
            "kind": "Secret",
            "metadata": { "name": "db" },
            "data": { "username": "not base64!" }
        }));
        assert!(result.is_err());
    }
}
