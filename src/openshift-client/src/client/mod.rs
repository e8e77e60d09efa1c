mod build;
mod cron_job;
mod deploy;
mod image;
mod route;
mod secret;
mod service;
mod storage;

use serde_json::Value;
use tracing::debug;
use tracing::error;
use tracing::trace;

use openshift_types::options::{DeleteOptions, ListOptions};
use openshift_types::{InputK8Obj, Spec};

use crate::uri::{item_uri, items_uri};
use crate::{ApiRequest, ClientError, HttpTransport};

/// Resource client bound to one namespace.
///
/// Every operation is a single round trip through the transport. The decoded
/// response body is returned as is, status codes are left to the transport.
#[derive(Debug)]
pub struct OpenShiftClient<T> {
    transport: T,
    namespace: String,
}

impl<T> OpenShiftClient<T>
where
    T: HttpTransport,
{
    pub fn new<N: Into<String>>(transport: T, namespace: N) -> Self {
        Self {
            transport,
            namespace: namespace.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// send request and decode whatever json comes back
    async fn handle_request(&self, request: ApiRequest) -> Result<Value, ClientError> {
        trace!("{} {}", request.method, request.path);
        let response = self.transport.request(request).await?;
        let status = response.status;
        let buffer = response.read_body().await?;
        trace!(%status, "response: {}", String::from_utf8_lossy(&buffer));

        serde_json::from_slice(&buffer).map_err(|err| {
            error!("json error: {}", err);
            error!("source: {}", String::from_utf8_lossy(&buffer));
            err.into()
        })
    }

    /// POST descriptor to the collection of its kind
    pub async fn create_item<S>(&self, value: &InputK8Obj<S>) -> Result<Value, ClientError>
    where
        S: Spec,
    {
        let path = items_uri::<S>(&self.namespace);
        debug!("creating {}: '{}' at {}", S::label(), value.name(), path);
        let body = value.to_json()?;
        trace!("create {} raw: {}", S::label(), body);

        self.handle_request(ApiRequest::post(path).with_body(body))
            .await
    }

    /// PUT descriptor to the item named by its metadata
    pub async fn replace_item<S>(&self, value: &InputK8Obj<S>) -> Result<Value, ClientError>
    where
        S: Spec,
    {
        let path = item_uri::<S>(&self.namespace, value.name());
        debug!("replacing {}: '{}' at {}", S::label(), value.name(), path);
        let body = value.to_json()?;
        trace!("replace {} raw: {}", S::label(), body);

        self.handle_request(ApiRequest::put(path).with_body(body))
            .await
    }

    pub async fn retrieve_item<S>(&self, name: &str) -> Result<Value, ClientError>
    where
        S: Spec,
    {
        let path = item_uri::<S>(&self.namespace, name);
        debug!("retrieving {}: '{}' at {}", S::label(), name, path);
        self.handle_request(ApiRequest::get(path)).await
    }

    pub async fn delete_item<S>(&self, name: &str) -> Result<Value, ClientError>
    where
        S: Spec,
    {
        self.delete_item_with_option::<S>(name, None).await
    }

    /// delete, sending `options` as body when present
    pub async fn delete_item_with_option<S>(
        &self,
        name: &str,
        options: Option<DeleteOptions>,
    ) -> Result<Value, ClientError>
    where
        S: Spec,
    {
        let path = item_uri::<S>(&self.namespace, name);
        debug!("deleting {}: '{}' at {}", S::label(), name, path);
        let mut request = ApiRequest::delete(path);
        if let Some(options) = options {
            let body = serde_json::to_string(&options)?;
            trace!("delete {} options: {}", S::label(), body);
            request = request.with_body(body);
        }
        self.handle_request(request).await
    }

    /// list items of a kind, optionally narrowed by selectors
    pub async fn retrieve_items<S>(&self, options: Option<ListOptions>) -> Result<Value, ClientError>
    where
        S: Spec,
    {
        let path = items_uri::<S>(&self.namespace);
        debug!("retrieving {} items at {}", S::label(), path);
        let query = options.map(|opt| opt.to_query()).unwrap_or_default();
        self.handle_request(ApiRequest::get(path).with_query(query))
            .await
    }
}
