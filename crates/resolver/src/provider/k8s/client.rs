//! Cluster boundary used by the Kubernetes resolver.

use async_trait::async_trait;

use crate::errors::ResolverError;
use crate::models::Pod;

/// Read-only access to workloads in one clientset at a time.
///
/// A clientset is a configured connection to one cluster.
#[async_trait]
pub trait ClusterClient: Send + Sync + 'static {
    /// Names of every configured clientset.
    fn clientsets(&self) -> Vec<String>;

    /// Pods named `name` in `namespace` of `clientset`.
    async fn describe_pods(
        &self,
        clientset: &str,
        namespace: &str,
        name: &str,
    ) -> Result<Vec<Pod>, ResolverError>;
}
