mod crd;
mod metadata;
pub mod api;
pub mod options;
#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "openshift")]
pub mod openshift;
#[cfg(feature = "batch")]
pub mod batch;

pub use self::crd::*;
pub use self::metadata::*;
pub use self::spec_def::*;

mod spec_def {

    use std::fmt::Debug;

    use serde::de::DeserializeOwned;
    use serde::Deserialize;
    use serde::Serialize;

    use super::Crd;

    pub trait Header:
        Sized + Debug + Clone + Default + Serialize + DeserializeOwned + Send + Sync
    {
    }

    /// Kind specific part of a resource descriptor
    pub trait Spec:
        Sized + Debug + Clone + Default + Serialize + DeserializeOwned + Send + Sync
    {
        /// top level fields that live next to `metadata` instead of under `spec`
        type Header: Header;

        /// return api table entry for this kind
        fn metadata() -> &'static Crd;

        fn label() -> &'static str {
            Self::metadata().names.kind
        }

        fn kind() -> String {
            Self::metadata().names.kind.to_owned()
        }

        /// kinds without a `spec` object (Secret) return true so it is not serialized
        fn is_empty(&self) -> bool {
            false
        }
    }

    #[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
    pub struct DefaultHeader {}

    impl Header for DefaultHeader {}
}
