//!
//! # API resource definition
//!
//! Group, version and names of a resource kind as served by the API server
//!
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Crd {
    pub group: &'static str,
    pub version: &'static str,
    pub names: CrdNames,
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CrdNames {
    pub kind: &'static str,
    pub plural: &'static str,
    pub singular: &'static str,
}

pub const CORE_GROUP: &str = "core";

impl Crd {
    /// true if kind is served under `/api` instead of `/apis/{group}`
    pub fn is_core(&self) -> bool {
        self.group == CORE_GROUP
    }
}
