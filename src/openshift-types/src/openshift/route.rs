use serde::Deserialize;
use serde::Serialize;

use crate::api::ROUTE_API;
use crate::Crd;
use crate::DefaultHeader;
use crate::InputK8Obj;
use crate::InputObjectMeta;
use crate::LabelProvider;
use crate::Spec;

pub type Route = InputK8Obj<RouteSpec>;

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "RouteTargetReference::is_empty")]
    pub to: RouteTargetReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wildcard_policy: Option<WildcardPolicy>,
}

impl Spec for RouteSpec {
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &ROUTE_API
    }
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteTargetReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl RouteTargetReference {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.name.is_none() && self.weight.is_none()
    }
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct TlsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination: Option<TlsTermination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure_edge_termination_policy: Option<InsecureEdgeTerminationPolicy>,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TlsTermination {
    Edge,
    Passthrough,
    Reencrypt,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Clone, Copy)]
pub enum InsecureEdgeTerminationPolicy {
    Allow,
    Redirect,
    #[serde(rename = "None")]
    Disabled,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Clone, Copy)]
pub enum WildcardPolicy {
    #[serde(rename = "None")]
    Disabled,
    Subdomain,
}

/// Chained construction of a [`Route`].
///
/// Every setter takes the builder by value and hands it back, so calls can be
/// made in any order; setting a field twice keeps the last value. Nothing is
/// validated here, the API server does that on create.
///
/// ```
/// use openshift_types::openshift::route::{RouteBuilder, TlsTermination};
///
/// let route = RouteBuilder::create()
///     .set_name("site-route")
///     .set_host("site.example.com")
///     .set_termination(TlsTermination::Edge)
///     .set_to_kind("Service")
///     .set_to_name("site-service")
///     .set_to_weight(50)
///     .build();
/// assert_eq!(route.name(), "site-route");
/// ```
#[derive(Debug, Clone)]
pub struct RouteBuilder {
    route: Route,
}

impl RouteBuilder {
    /// builder with every field unset
    pub fn create() -> Self {
        Self {
            route: InputK8Obj::new(RouteSpec::default(), InputObjectMeta::default()),
        }
    }

    pub fn set_name<S: Into<String>>(mut self, name: S) -> Self {
        self.route.metadata.name = name.into();
        self
    }

    pub fn set_labels<T: ToString>(mut self, labels: Vec<(T, T)>) -> Self {
        self.route.metadata = self.route.metadata.set_labels(labels);
        self
    }

    pub fn set_host<S: Into<String>>(mut self, host: S) -> Self {
        self.route.spec.host = Some(host.into());
        self
    }

    pub fn set_path<S: Into<String>>(mut self, path: S) -> Self {
        self.route.spec.path = Some(path.into());
        self
    }

    pub fn set_insecure_edge_termination_policy(
        mut self,
        policy: InsecureEdgeTerminationPolicy,
    ) -> Self {
        self.tls().insecure_edge_termination_policy = Some(policy);
        self
    }

    pub fn set_termination(mut self, termination: TlsTermination) -> Self {
        self.tls().termination = Some(termination);
        self
    }

    pub fn set_to_kind<S: Into<String>>(mut self, kind: S) -> Self {
        self.route.spec.to.kind = Some(kind.into());
        self
    }

    pub fn set_to_name<S: Into<String>>(mut self, name: S) -> Self {
        self.route.spec.to.name = Some(name.into());
        self
    }

    pub fn set_to_weight(mut self, weight: u32) -> Self {
        self.route.spec.to.weight = Some(weight);
        self
    }

    pub fn set_wildcard_policy(mut self, policy: WildcardPolicy) -> Self {
        self.route.spec.wildcard_policy = Some(policy);
        self
    }

    pub fn build(self) -> Route {
        self.route
    }

    fn tls(&mut self) -> &mut TlsConfig {
        self.route.spec.tls.get_or_insert_with(TlsConfig::default)
    }
}

impl From<RouteBuilder> for Route {
    fn from(builder: RouteBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::{InsecureEdgeTerminationPolicy, RouteBuilder, TlsTermination, WildcardPolicy};

    #[test]
    fn test_route_body() {
        let route = RouteBuilder::create()
            .set_name("site-route")
            .set_host("site.example.com")
            .set_path("")
            .set_insecure_edge_termination_policy(InsecureEdgeTerminationPolicy::Allow)
            .set_termination(TlsTermination::Edge)
            .set_to_kind("Service")
            .set_to_name("site-service")
            .set_to_weight(50)
            .set_wildcard_policy(WildcardPolicy::Disabled)
            .build();

        assert_eq!(
            route.to_json().expect("json"),
            r#"{"kind":"Route","metadata":{"name":"site-route"},"spec":{"host":"site.example.com","path":"","to":{"kind":"Service","name":"site-service","weight":50},"tls":{"termination":"edge","insecureEdgeTerminationPolicy":"Allow"},"wildcardPolicy":"None"}}"#
        );
    }

    #[test]
    fn test_empty_route() {
        let route = RouteBuilder::create().build();
        assert_eq!(
            serde_json::to_value(&route).expect("json"),
            json!({"kind": "Route", "metadata": {"name": ""}, "spec": {}})
        );
    }

    #[test]
    fn test_last_value_wins() {
        let first = RouteBuilder::create()
            .set_to_weight(10)
            .set_host("a.example.com")
            .set_name("one")
            .set_host("b.example.com")
            .set_to_weight(90)
            .set_termination(TlsTermination::Passthrough)
            .set_termination(TlsTermination::Reencrypt)
            .build();

        assert_eq!(first.name(), "one");
        assert_eq!(first.spec.host.as_deref(), Some("b.example.com"));
        assert_eq!(first.spec.to.weight, Some(90));
        assert_eq!(
            first.spec.tls.as_ref().and_then(|tls| tls.termination),
            Some(TlsTermination::Reencrypt)
        );
        assert!(first
            .spec
            .tls
            .as_ref()
            .and_then(|tls| tls.insecure_edge_termination_policy)
            .is_none());
    }

    #[test]
    fn test_create_starts_empty() {
        let _used = RouteBuilder::create()
            .set_name("used")
            .set_host("used.example.com")
            .build();

        let fresh = RouteBuilder::create().build();
        assert_eq!(fresh.name(), "");
        assert_eq!(fresh.spec, Default::default());
        assert!(fresh.metadata.labels.is_empty());
    }

    #[test]
    fn test_route_decode() {
        let route: super::Route = serde_json::from_value(json!({
            "kind": "Route",
            "apiVersion": "route.openshift.io/v1",
            "metadata": { "name": "r" },
            "spec": { "host": "h", "to": { "kind": "Service", "name": "s", "weight": 100 }, "wildcardPolicy": "None" },
            "status": { "ingress": [] }
        }))
        .expect("route");
        assert_eq!(route.spec.to.weight, Some(100));
        assert_eq!(route.spec.wildcard_policy, Some(WildcardPolicy::Disabled));
    }
}
