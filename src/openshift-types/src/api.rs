//! Group, version and path segment of every resource kind the client knows.
//! New kinds are added here and referenced from their `Spec` impl.

use std::fmt;

use crate::{Crd, CrdNames, CORE_GROUP};

pub const IMAGE_GROUP: &str = "image.openshift.io";
pub const ROUTE_GROUP: &str = "route.openshift.io";
pub const APPS_GROUP: &str = "apps.openshift.io";
pub const BUILD_GROUP: &str = "build.openshift.io";
pub const BATCH_GROUP: &str = "batch";
pub const V1: &str = "v1";

pub const SECRET_API: Crd = Crd {
    group: CORE_GROUP,
    version: V1,
    names: CrdNames {
        kind: "Secret",
        plural: "secrets",
        singular: "secret",
    },
};

pub const SERVICE_API: Crd = Crd {
    group: CORE_GROUP,
    version: V1,
    names: CrdNames {
        kind: "Service",
        plural: "services",
        singular: "service",
    },
};

pub const PERSISTENT_VOLUME_CLAIM_API: Crd = Crd {
    group: CORE_GROUP,
    version: V1,
    names: CrdNames {
        kind: "PersistentVolumeClaim",
        plural: "persistentvolumeclaims",
        singular: "persistentvolumeclaim",
    },
};

pub const IMAGE_STREAM_API: Crd = Crd {
    group: IMAGE_GROUP,
    version: V1,
    names: CrdNames {
        kind: "ImageStream",
        plural: "imagestreams",
        singular: "imagestream",
    },
};

pub const IMAGE_STREAM_TAG_API: Crd = Crd {
    group: IMAGE_GROUP,
    version: V1,
    names: CrdNames {
        kind: "ImageStreamTag",
        plural: "imagestreamtags",
        singular: "imagestreamtag",
    },
};

pub const ROUTE_API: Crd = Crd {
    group: ROUTE_GROUP,
    version: V1,
    names: CrdNames {
        kind: "Route",
        plural: "routes",
        singular: "route",
    },
};

pub const DEPLOYMENT_CONFIG_API: Crd = Crd {
    group: APPS_GROUP,
    version: V1,
    names: CrdNames {
        kind: "DeploymentConfig",
        plural: "deploymentconfigs",
        singular: "deploymentconfig",
    },
};

pub const BUILD_CONFIG_API: Crd = Crd {
    group: BUILD_GROUP,
    version: V1,
    names: CrdNames {
        kind: "BuildConfig",
        plural: "buildconfigs",
        singular: "buildconfig",
    },
};

pub const CRON_JOB_API: Crd = Crd {
    group: BATCH_GROUP,
    version: V1,
    names: CrdNames {
        kind: "CronJob",
        plural: "cronjobs",
        singular: "cronjob",
    },
};

/// Resource kinds addressable through the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Secret,
    Service,
    PersistentVolumeClaim,
    ImageStream,
    ImageStreamTag,
    Route,
    DeploymentConfig,
    BuildConfig,
    CronJob,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 9] = [
        Self::Secret,
        Self::Service,
        Self::PersistentVolumeClaim,
        Self::ImageStream,
        Self::ImageStreamTag,
        Self::Route,
        Self::DeploymentConfig,
        Self::BuildConfig,
        Self::CronJob,
    ];

    pub fn crd(&self) -> &'static Crd {
        match self {
            Self::Secret => &SECRET_API,
            Self::Service => &SERVICE_API,
            Self::PersistentVolumeClaim => &PERSISTENT_VOLUME_CLAIM_API,
            Self::ImageStream => &IMAGE_STREAM_API,
            Self::ImageStreamTag => &IMAGE_STREAM_TAG_API,
            Self::Route => &ROUTE_API,
            Self::DeploymentConfig => &DEPLOYMENT_CONFIG_API,
            Self::BuildConfig => &BUILD_CONFIG_API,
            Self::CronJob => &CRON_JOB_API,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.crd().names.kind)
    }
}
