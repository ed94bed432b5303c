//! Kubernetes resources: pods across every configured clientset.

mod client;
mod resolver;

pub use client::ClusterClient;
pub use resolver::{parse_pod_query, K8sResolver};

use crate::models::PodId;
use crate::schema::{FieldDescriptor, InputSchema, SchemaDescriptor};

/// Dynamic option source filled with every configured clientset.
pub const CLIENTSETS_SOURCE: &str = "clientsets";

impl InputSchema for PodId {
    fn descriptor() -> SchemaDescriptor {
        SchemaDescriptor::new()
            .display_name("Pod ID")
            .searchable()
            .field(
                FieldDescriptor::text("name")
                    .display_name("Name")
                    .required()
                    .placeholder("envoy-7d9c6b5f4-x2x9z"),
            )
            .field(
                FieldDescriptor::text("namespace")
                    .display_name("Namespace")
                    .required()
                    .default_value("default"),
            )
            .field(
                FieldDescriptor::options("clientset")
                    .display_name("Clientset")
                    .required()
                    .dynamic(CLIENTSETS_SOURCE)
                    .include_all(),
            )
    }
}
