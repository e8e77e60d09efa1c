use std::collections::BTreeMap;
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::io::{AsyncRead, AsyncReadExt, Cursor};
use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use http::{Method, StatusCode};

use crate::ClientError;

pub const APPLICATION_JSON: &str = "application/json";

pub type ResponseBody = Pin<Box<dyn AsyncRead + Send>>;

/// One round trip as handed to the transport.
/// `path` is relative to the API server root and always starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new<P: Into<String>>(method: Method, path: P) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        Self {
            method,
            path: path.into(),
            query: BTreeMap::new(),
            headers,
            body: None,
        }
    }

    pub fn get<P: Into<String>>(path: P) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post<P: Into<String>>(path: P) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put<P: Into<String>>(path: P) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete<P: Into<String>>(path: P) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = query;
        self
    }
}

/// Status and unread body of a response
pub struct ApiResponse {
    pub status: StatusCode,
    body: ResponseBody,
}

impl fmt::Debug for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ApiResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl ApiResponse {
    pub fn new<R>(status: StatusCode, body: R) -> Self
    where
        R: AsyncRead + Send + 'static,
    {
        Self {
            status,
            body: Box::pin(body),
        }
    }

    pub fn from_bytes<B: Into<Bytes>>(status: StatusCode, bytes: B) -> Self {
        Self::new(status, Cursor::new(bytes.into()))
    }

    /// drain the body
    pub async fn read_body(mut self) -> Result<Vec<u8>, ClientError> {
        let mut buffer = Vec::new();
        self.body.read_to_end(&mut buffer).await?;
        Ok(buffer)
    }
}

/// Performs one HTTP round trip against the API server.
///
/// Implementations own the base URL, credentials and TLS. Whether a non-2xx
/// status is turned into an error is up to the implementation; the client
/// decodes whatever body comes back.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

#[async_trait]
impl<T> HttpTransport for Arc<T>
where
    T: HttpTransport + ?Sized,
{
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        (**self).request(request).await
    }
}

#[cfg(test)]
mod test {

    use fluvio_future::test_async;
    use http::header::CONTENT_TYPE;
    use http::{Method, StatusCode};

    use super::{ApiRequest, ApiResponse};
    use crate::ClientError;

    #[test]
    fn test_request_defaults() {
        let request = ApiRequest::put("/api/v1/namespaces/ns/secrets/db");
        assert_eq!(request.method, Method::PUT);
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
    }

    #[test_async]
    async fn test_read_body() -> Result<(), ClientError> {
        let response = ApiResponse::from_bytes(StatusCode::OK, r#"{"kind":"Secret"}"#);
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.read_body().await?, br#"{"kind":"Secret"}"#.to_vec());
        Ok(())
    }
}
