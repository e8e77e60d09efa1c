mod client;
mod error;
mod in_memory;
mod transport;

#[cfg(feature = "hyper")]
mod hyper;

pub mod uri;

pub use self::client::OpenShiftClient;
pub use self::error::ClientError;
pub use self::in_memory::InMemoryTransport;
pub use self::transport::{ApiRequest, ApiResponse, HttpTransport, ResponseBody, APPLICATION_JSON};

#[cfg(feature = "hyper")]
pub use self::hyper::{HyperClient, HyperTransport, TransportConfig};

pub use openshift_types as types;

pub mod http {
    pub use ::http::header;
    pub use ::http::Method;
    pub use ::http::StatusCode;
}
