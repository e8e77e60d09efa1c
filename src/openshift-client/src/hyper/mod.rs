use async_trait::async_trait;
use http::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use http::{StatusCode, Uri};
use hyper::client::HttpConnector;
use hyper::{Body, Client, Request};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use serde::Deserialize;
use tracing::{debug, error, trace};

use openshift_types::MetaStatus;

use crate::transport::APPLICATION_JSON;
use crate::{ApiRequest, ApiResponse, ClientError, HttpTransport};

pub type HyperClient = Client<HttpsConnector<HttpConnector>, Body>;

/// Where the API server is and how to authenticate against it
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportConfig {
    /// base url such as `https://api.cluster:6443`
    pub host: String,
    pub token: Option<String>,
}

impl TransportConfig {
    pub fn new<H: Into<String>>(host: H) -> Self {
        Self {
            host: host.into(),
            token: None,
        }
    }

    pub fn set_token<T: Into<String>>(mut self, token: T) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Transport over hyper with rustls, trusting the platform roots.
/// Any non-2xx answer is returned as [`ClientError::Status`].
#[derive(Debug)]
pub struct HyperTransport {
    client: HyperClient,
    host: String,
    token: Option<String>,
}

impl HyperTransport {
    pub fn new(config: TransportConfig) -> Self {
        let connector = HttpsConnectorBuilder::new()
            .with_native_roots()
            .https_or_http()
            .enable_http1()
            .build();

        debug!(host = %config.host, "hyper transport");
        Self {
            client: Client::builder().build(connector),
            host: config.host,
            token: config.token,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

fn request_uri(host: &str, request: &ApiRequest) -> Result<Uri, ClientError> {
    let query = if request.query.is_empty() {
        String::new()
    } else {
        format!("?{}", serde_qs::to_string(&request.query)?)
    };
    let uri_value = format!("{}{}{}", host.trim_end_matches('/'), request.path, query);
    Ok(uri_value.parse()?)
}

#[async_trait]
impl HttpTransport for HyperTransport {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let uri = request_uri(&self.host, &request)?;
        trace!("request url: {}", uri);

        let mut builder = Request::builder()
            .method(request.method)
            .uri(uri)
            .header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(token) = &self.token {
            let full_token = format!("Bearer {token}");
            builder = builder.header(AUTHORIZATION, HeaderValue::from_str(&full_token)?);
        }

        let body = request.body.map(Body::from).unwrap_or_else(Body::empty);
        let response = self.client.request(builder.body(body)?).await?;
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await?;

        if status.is_success() {
            return Ok(ApiResponse::from_bytes(status, bytes));
        }

        trace!(%status, "error response received");
        Err(status_error(status, &bytes))
    }
}

/// API `Status` object from an error response; a body that is not one is
/// kept as the message
fn status_error(status: StatusCode, bytes: &[u8]) -> ClientError {
    let api_status: MetaStatus = serde_json::from_slice(bytes).unwrap_or_else(|err| {
        error!("status json error: {}", err);
        MetaStatus {
            code: Some(status.as_u16()),
            message: Some(String::from_utf8_lossy(bytes).into_owned()),
            ..Default::default()
        }
    });
    ClientError::Status {
        code: status,
        status: api_status,
    }
}

#[cfg(test)]
mod test {

    use std::collections::BTreeMap;

    use http::StatusCode;

    use super::{request_uri, status_error, TransportConfig};
    use crate::{ApiRequest, ClientError};

    #[test]
    fn test_request_uri() {
        let request = ApiRequest::get("/api/v1/namespaces/ns/secrets/db");
        let uri = request_uri("https://api.cluster:6443/", &request).expect("uri");
        assert_eq!(
            uri.to_string(),
            "https://api.cluster:6443/api/v1/namespaces/ns/secrets/db"
        );

        let mut query = BTreeMap::new();
        query.insert("limit".to_owned(), "5".to_owned());
        query.insert("labelSelector".to_owned(), "web".to_owned());
        let request = ApiRequest::get("/apis/route.openshift.io/v1/namespaces/ns/routes")
            .with_query(query);
        let uri = request_uri("https://api.cluster:6443", &request).expect("uri");
        assert_eq!(uri.query(), Some("labelSelector=web&limit=5"));
    }

    #[test]
    fn test_config() {
        let config: TransportConfig =
            serde_json::from_str(r#"{"host":"https://api.cluster:6443","token":"abc"}"#)
                .expect("config");
        assert_eq!(
            config,
            TransportConfig::new("https://api.cluster:6443").set_token("abc")
        );
    }

    #[test]
    fn test_status_error() {
        let err = status_error(
            StatusCode::NOT_FOUND,
            br#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"routes \"web\" not found","reason":"NotFound","code":404}"#,
        );
        assert!(err.not_found());
        match err {
            ClientError::Status { code, status } => {
                assert_eq!(code, StatusCode::NOT_FOUND);
                assert_eq!(status.code, Some(404));
                assert_eq!(status.reason.as_deref(), Some("NotFound"));
                assert_eq!(status.message.as_deref(), Some("routes \"web\" not found"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_status_error_from_html() {
        let err = status_error(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert_eq!(err.status_code(), Some(StatusCode::BAD_GATEWAY));
        match err {
            ClientError::Status { status, .. } => {
                assert_eq!(status.code, Some(502));
                assert_eq!(status.message.as_deref(), Some("<html>bad gateway</html>"));
                assert!(status.reason.is_none());
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
