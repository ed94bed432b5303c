//! Cloud provider boundary used by the AWS resolver.

use async_trait::async_trait;

use crate::errors::ResolverError;
use crate::models::{AutoscalingGroup, Instance};
use crate::resolver::Topology;

/// Read-only access to compute resources in one account/region at a time.
///
/// Every call is scoped to a single account/region pair; fanning out across
/// pairs is the resolver's job. Implementations report backend failures as
/// [`ResolverError::Provider`] so they surface as partial failures.
#[async_trait]
pub trait CloudClient: Send + Sync + 'static {
    /// Known accounts and the regions each one is present in.
    fn topology(&self) -> Topology;

    /// Instances in `account`/`region` whose id is in `ids`.
    ///
    /// Ids that do not exist there are omitted from the result.
    async fn describe_instances(
        &self,
        account: &str,
        region: &str,
        ids: &[String],
    ) -> Result<Vec<Instance>, ResolverError>;

    /// Autoscaling groups in `account`/`region` whose name is in `names`.
    async fn describe_autoscaling_groups(
        &self,
        account: &str,
        region: &str,
        names: &[String],
    ) -> Result<Vec<AutoscalingGroup>, ResolverError>;
}
