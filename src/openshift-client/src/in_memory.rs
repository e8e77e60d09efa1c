use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;
use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use tracing::trace;

use crate::{ApiRequest, ApiResponse, ClientError, HttpTransport};

const EMPTY_OBJECT: &str = "{}";

#[derive(Debug)]
enum Reply {
    Body(StatusCode, Bytes),
    Failure(String),
}

/// Transport that records every request and answers from a queue of canned
/// replies. With nothing queued it answers `200 {}`.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    requests: Mutex<Vec<ApiRequest>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with<B: Into<Bytes>>(&self, body: B) {
        self.respond_with_status(StatusCode::OK, body);
    }

    pub fn respond_with_status<B: Into<Bytes>>(&self, status: StatusCode, body: B) {
        lock(&self.replies).push_back(Reply::Body(status, body.into()));
    }

    /// next request fails before reaching the server
    pub fn fail_with<M: Into<String>>(&self, message: M) {
        lock(&self.replies).push_back(Reply::Failure(message.into()));
    }

    /// requests received so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        lock(&self.requests).last().cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl HttpTransport for InMemoryTransport {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        trace!("in memory {} {}", request.method, request.path);
        lock(&self.requests).push(request);

        let reply = lock(&self.replies).pop_front();
        match reply {
            Some(Reply::Body(status, body)) => Ok(ApiResponse::from_bytes(status, body)),
            Some(Reply::Failure(message)) => Err(anyhow!(message).into()),
            None => Ok(ApiResponse::from_bytes(StatusCode::OK, EMPTY_OBJECT)),
        }
    }
}

#[cfg(test)]
mod test {

    use fluvio_future::test_async;
    use http::StatusCode;

    use super::InMemoryTransport;
    use crate::{ApiRequest, ClientError, HttpTransport};

    #[test_async]
    async fn test_replies_in_order() -> Result<(), ClientError> {
        let transport = InMemoryTransport::new();
        transport.respond_with_status(StatusCode::CREATED, r#"{"kind":"Route"}"#);
        transport.fail_with("connection reset");

        let first = transport.request(ApiRequest::get("/a")).await?;
        assert_eq!(first.status, StatusCode::CREATED);
        assert_eq!(first.read_body().await?, br#"{"kind":"Route"}"#.to_vec());

        let second = transport.request(ApiRequest::get("/b")).await;
        assert!(matches!(second, Err(ClientError::Transport(_))));

        let third = transport.request(ApiRequest::delete("/c")).await?;
        assert_eq!(third.read_body().await?, b"{}".to_vec());

        let paths: Vec<String> = transport
            .requests()
            .into_iter()
            .map(|request| request.path)
            .collect();
        assert_eq!(paths, vec!["/a", "/b", "/c"]);
        Ok(())
    }
}
