//! Structured identifiers accepted by `resolve`.

use serde::{Deserialize, Serialize};

use super::Typed;

/// Sentinel meaning "fan out across every known value of this dimension".
pub const OPTION_ALL: &str = "all";

fn option_all() -> String {
    OPTION_ALL.to_string()
}

fn default_namespace() -> String {
    "default".to_string()
}

/// Instance by id, optionally scoped to an account and region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceId {
    pub id: String,
    #[serde(default = "option_all")]
    pub region: String,
    #[serde(default = "option_all")]
    pub account: String,
}

impl Typed for InstanceId {
    const TYPE_URL: &'static str = "type.googleapis.com/lookout.resolver.aws.v1.InstanceID";
}

/// Autoscaling group by name, optionally scoped to an account and region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoscalingGroupName {
    pub name: String,
    #[serde(default = "option_all")]
    pub region: String,
    #[serde(default = "option_all")]
    pub account: String,
}

impl Typed for AutoscalingGroupName {
    const TYPE_URL: &'static str =
        "type.googleapis.com/lookout.resolver.aws.v1.AutoscalingGroupName";
}

/// Pod by name within a namespace, optionally scoped to one clientset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodId {
    pub name: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "option_all")]
    pub clientset: String,
}

impl Typed for PodId {
    const TYPE_URL: &'static str = "type.googleapis.com/lookout.resolver.k8s.v1.PodID";
}

/// Every identifier shape a resolver can dispatch on.
///
/// Serialized with an `@type` tag carrying the identifier's type URL, so a
/// request body names the input schema it was built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum Identifier {
    #[serde(rename = "type.googleapis.com/lookout.resolver.aws.v1.InstanceID")]
    InstanceId(InstanceId),

    #[serde(rename = "type.googleapis.com/lookout.resolver.aws.v1.AutoscalingGroupName")]
    AutoscalingGroupName(AutoscalingGroupName),

    #[serde(rename = "type.googleapis.com/lookout.resolver.k8s.v1.PodID")]
    PodId(PodId),
}

impl Identifier {
    /// Type URL of the input schema this identifier was built from.
    pub fn type_url(&self) -> &'static str {
        match self {
            Self::InstanceId(_) => InstanceId::TYPE_URL,
            Self::AutoscalingGroupName(_) => AutoscalingGroupName::TYPE_URL,
            Self::PodId(_) => PodId::TYPE_URL,
        }
    }
}

impl From<InstanceId> for Identifier {
    fn from(id: InstanceId) -> Self {
        Self::InstanceId(id)
    }
}

impl From<AutoscalingGroupName> for Identifier {
    fn from(name: AutoscalingGroupName) -> Self {
        Self::AutoscalingGroupName(name)
    }
}

impl From<PodId> for Identifier {
    fn from(id: PodId) -> Self {
        Self::PodId(id)
    }
}
