use std::io::Error as IoError;

use http::header::InvalidHeaderValue;
use http::uri::InvalidUri;
use http::Error as HttpError;
use http::StatusCode;
use thiserror::Error;

use openshift_types::MetaStatus;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
    #[error("IO error: {0}")]
    IoError(#[from] IoError),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("query string error: {0}")]
    QueryError(#[from] serde_qs::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] HttpError),
    #[error("invalid uri: {0}")]
    InvalidUri(#[from] InvalidUri),
    #[error("invalid header value: {0}")]
    InvalidHttpHeader(#[from] InvalidHeaderValue),
    #[cfg(feature = "hyper")]
    #[error("hyper error: {0}")]
    HyperError(#[from] hyper::Error),
    #[error("api server returned {code}: {status}")]
    Status { code: StatusCode, status: MetaStatus },
}

impl ClientError {
    /// status code when the failure came back from the API server
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn not_found(&self) -> bool {
        self.status_code() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod test {

    use http::StatusCode;

    use openshift_types::MetaStatus;

    use super::ClientError;

    #[test]
    fn test_not_found() {
        let err = ClientError::Status {
            code: StatusCode::NOT_FOUND,
            status: MetaStatus {
                reason: Some("NotFound".to_owned()),
                message: Some("routes \"web\" not found".to_owned()),
                ..Default::default()
            },
        };
        assert!(err.not_found());
        assert_eq!(
            err.to_string(),
            "api server returned 404 Not Found: NotFound: routes \"web\" not found"
        );

        let err: ClientError = anyhow::anyhow!("connection refused").into();
        assert!(!err.not_found());
        assert_eq!(err.to_string(), "connection refused");
    }
}
