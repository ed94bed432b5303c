//! Reference domain objects produced by the bundled resolvers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Typed;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceState {
    Pending,
    #[default]
    Running,
    Stopping,
    Stopped,
    ShuttingDown,
    Terminated,
}

/// Compute instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub instance_id: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub availability_zone: String,
    #[serde(default)]
    pub instance_type: String,
    #[serde(default)]
    pub state: InstanceState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launched_at: Option<DateTime<Utc>>,
}

impl Typed for Instance {
    const TYPE_URL: &'static str = "type.googleapis.com/lookout.aws.ec2.v1.Instance";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSize {
    pub min: u32,
    pub max: u32,
    pub desired: u32,
}

/// Autoscaling group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoscalingGroup {
    pub name: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub zones: Vec<String>,
    #[serde(default)]
    pub size: GroupSize,
}

impl Typed for AutoscalingGroup {
    const TYPE_URL: &'static str = "type.googleapis.com/lookout.aws.ec2.v1.AutoscalingGroup";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PodState {
    Pending,
    #[default]
    Running,
    Succeeded,
    Failed,
    Unknown,
}

/// Kubernetes pod.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub clientset: String,
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub state: PodState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_ip: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl Typed for Pod {
    const TYPE_URL: &'static str = "type.googleapis.com/lookout.k8s.v1.Pod";
}
