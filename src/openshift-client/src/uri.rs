//! Resource paths relative to the API server root.
//!
//! Core kinds live under `/api/{version}`, everything else under
//! `/apis/{group}/{version}`. The namespace is always a path segment.

use openshift_types::api::ResourceKind;
use openshift_types::{Crd, Spec};

/// generate prefix for given crd
/// if crd group is core then /api is used otherwise /apis + group
pub fn prefix_path(crd: &Crd, namespace: &str) -> String {
    let api_prefix = if crd.is_core() {
        "api".to_owned()
    } else {
        format!("apis/{}", crd.group)
    };

    format!(
        "/{}/{}/namespaces/{}/{}",
        api_prefix, crd.version, namespace, crd.names.plural
    )
}

/// collection path, target of create and list
pub fn items_path(crd: &Crd, namespace: &str) -> String {
    prefix_path(crd, namespace)
}

/// single item path, target of get, replace and delete
pub fn item_path(crd: &Crd, namespace: &str, name: &str) -> String {
    format!("{}/{}", prefix_path(crd, namespace), name)
}

pub fn resolve(kind: ResourceKind, namespace: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => item_path(kind.crd(), namespace, name),
        None => items_path(kind.crd(), namespace),
    }
}

pub fn items_uri<S: Spec>(namespace: &str) -> String {
    items_path(S::metadata(), namespace)
}

pub fn item_uri<S: Spec>(namespace: &str, name: &str) -> String {
    item_path(S::metadata(), namespace, name)
}

#[cfg(test)]
mod test {

    use openshift_types::api::ResourceKind;
    use openshift_types::core::secret::SecretSpec;
    use openshift_types::openshift::route::RouteSpec;

    use super::{item_uri, items_uri, resolve};

    #[test]
    fn test_core_paths() {
        assert_eq!(
            resolve(ResourceKind::Secret, "namespace1", None),
            "/api/v1/namespaces/namespace1/secrets"
        );
        assert_eq!(
            resolve(ResourceKind::Service, "ns", Some("web")),
            "/api/v1/namespaces/ns/services/web"
        );
        assert_eq!(
            resolve(ResourceKind::PersistentVolumeClaim, "ns", Some("files")),
            "/api/v1/namespaces/ns/persistentvolumeclaims/files"
        );
    }

    #[test]
    fn test_group_paths() {
        assert_eq!(
            resolve(ResourceKind::Route, "ns", Some("web")),
            "/apis/route.openshift.io/v1/namespaces/ns/routes/web"
        );
        assert_eq!(
            resolve(ResourceKind::DeploymentConfig, "ns", None),
            "/apis/apps.openshift.io/v1/namespaces/ns/deploymentconfigs"
        );
        assert_eq!(
            resolve(ResourceKind::BuildConfig, "ns", None),
            "/apis/build.openshift.io/v1/namespaces/ns/buildconfigs"
        );
        assert_eq!(
            resolve(ResourceKind::ImageStream, "ns", Some("site")),
            "/apis/image.openshift.io/v1/namespaces/ns/imagestreams/site"
        );
        assert_eq!(
            resolve(ResourceKind::ImageStreamTag, "ns", Some("site:master")),
            "/apis/image.openshift.io/v1/namespaces/ns/imagestreamtags/site:master"
        );
        assert_eq!(
            resolve(ResourceKind::CronJob, "ns", Some("cron")),
            "/apis/batch/v1/namespaces/ns/cronjobs/cron"
        );
    }

    #[test]
    fn test_item_extends_collection() {
        for kind in ResourceKind::ALL {
            let items = resolve(kind, "ns", None);
            let item = resolve(kind, "ns", Some("name1"));
            assert_eq!(item, format!("{items}/name1"));
            assert_eq!(resolve(kind, "ns", Some("name1")), item);
        }
    }

    #[test]
    fn test_spec_paths() {
        assert_eq!(
            items_uri::<SecretSpec>("ns"),
            resolve(ResourceKind::Secret, "ns", None)
        );
        assert_eq!(
            item_uri::<RouteSpec>("ns", "web"),
            resolve(ResourceKind::Route, "ns", Some("web"))
        );
    }
}
