//! Resolver for EC2 instances and autoscaling groups.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::client::CloudClient;
use super::query::{parse_autoscaling_group_query, parse_instance_query};
use super::{ACCOUNTS_SOURCE, REGIONS_SOURCE};
use crate::context::RequestContext;
use crate::errors::ResolverError;
use crate::fanout::{FanoutAggregator, FanoutResult};
use crate::models::{
    AutocompleteResult, AutoscalingGroup, AutoscalingGroupName, Identifier, Instance, InstanceId,
    Results, Typed, TypedObject,
};
use crate::resolver::{autocomplete_with, Resolver, SearchIndex, Topology};
use crate::schema::{SchemaMap, SchemaSetBuilder};

const RESOLVER_ID: &str = "aws";

/// Resolves compute resources across every known account and region.
///
/// Each lookup fans out one task per account/region pair selected by the
/// request, so a single slow or failing region only costs a partial failure.
pub struct AwsResolver<C: CloudClient> {
    client: Arc<C>,
    topology: Topology,
    schemas: SchemaMap,
    search_index: Option<Arc<dyn SearchIndex>>,
}

impl<C: CloudClient> AwsResolver<C> {
    /// Build the resolver, hydrating region and account options from the
    /// client's topology.
    pub fn new(client: Arc<C>) -> Self {
        let topology = client.topology();
        let schemas = build_schemas(&topology, false);
        Self {
            client,
            topology,
            schemas,
            search_index: None,
        }
    }

    /// Delegate autocomplete to `index` and advertise it on searchable schemas.
    pub fn with_search_index(mut self, index: Arc<dyn SearchIndex>) -> Self {
        self.schemas = build_schemas(&self.topology, true);
        self.search_index = Some(index);
        self
    }

    async fn instances(
        &self,
        ctx: &RequestContext,
        account: &str,
        region: &str,
        ids: Vec<String>,
        limit: usize,
    ) -> Result<Results, ResolverError> {
        let mut fanout = FanoutAggregator::<TypedObject>::new(ctx);

        for target in self.topology.targets(account, region) {
            let client = self.client.clone();
            let ids = ids.clone();
            fanout.spawn(async move {
                let instances = client
                    .describe_instances(&target.account, &target.region, &ids)
                    .await?;
                instances
                    .iter()
                    .map(TypedObject::pack)
                    .collect::<FanoutResult<TypedObject>>()
            });
        }

        debug!(
            "Looking up instances {:?} in {} account/region pairs",
            ids,
            fanout.tasks()
        );
        Ok(fanout.results(limit).await.into())
    }

    async fn autoscaling_groups(
        &self,
        ctx: &RequestContext,
        account: &str,
        region: &str,
        names: Vec<String>,
        limit: usize,
    ) -> Result<Results, ResolverError> {
        let mut fanout = FanoutAggregator::<TypedObject>::new(ctx);

        for target in self.topology.targets(account, region) {
            let client = self.client.clone();
            let names = names.clone();
            fanout.spawn(async move {
                let groups = client
                    .describe_autoscaling_groups(&target.account, &target.region, &names)
                    .await?;
                groups
                    .iter()
                    .map(TypedObject::pack)
                    .collect::<FanoutResult<TypedObject>>()
            });
        }

        debug!(
            "Looking up autoscaling groups {:?} in {} account/region pairs",
            names,
            fanout.tasks()
        );
        Ok(fanout.results(limit).await.into())
    }

    fn unsupported(want: &str) -> ResolverError {
        ResolverError::UnsupportedType {
            resolver: RESOLVER_ID.to_string(),
            type_url: want.to_string(),
        }
    }
}

fn build_schemas(topology: &Topology, autocomplete: bool) -> SchemaMap {
    SchemaSetBuilder::new()
        .add::<Instance, InstanceId>()
        .add::<AutoscalingGroup, AutoscalingGroupName>()
        .hydrate(REGIONS_SOURCE, &topology.regions())
        .hydrate(ACCOUNTS_SOURCE, &topology.accounts())
        .autocomplete(autocomplete)
        .build()
}

#[async_trait]
impl<C: CloudClient> Resolver for AwsResolver<C> {
    fn id(&self) -> &'static str {
        RESOLVER_ID
    }

    fn schemas(&self) -> &SchemaMap {
        &self.schemas
    }

    async fn resolve(
        &self,
        ctx: &RequestContext,
        want: &str,
        input: &Identifier,
        limit: usize,
    ) -> Result<Results, ResolverError> {
        match input {
            Identifier::InstanceId(id) if want == Instance::TYPE_URL => {
                self.instances(ctx, &id.account, &id.region, vec![id.id.clone()], limit)
                    .await
            }
            Identifier::AutoscalingGroupName(group) if want == AutoscalingGroup::TYPE_URL => {
                self.autoscaling_groups(
                    ctx,
                    &group.account,
                    &group.region,
                    vec![group.name.clone()],
                    limit,
                )
                .await
            }
            other if want == Instance::TYPE_URL || want == AutoscalingGroup::TYPE_URL => {
                Err(ResolverError::UnexpectedInput {
                    want: want.to_string(),
                    input: other.type_url().to_string(),
                })
            }
            _ => Err(Self::unsupported(want)),
        }
    }

    async fn search(
        &self,
        ctx: &RequestContext,
        want: &str,
        query: &str,
        limit: usize,
    ) -> Result<Results, ResolverError> {
        if want == Instance::TYPE_URL {
            let parsed = parse_instance_query(query)?;
            self.instances(ctx, &parsed.account, &parsed.region, vec![parsed.name], limit)
                .await
        } else if want == AutoscalingGroup::TYPE_URL {
            let parsed = parse_autoscaling_group_query(query)?;
            self.autoscaling_groups(
                ctx,
                &parsed.account,
                &parsed.region,
                vec![parsed.name],
                limit,
            )
            .await
        } else {
            Err(Self::unsupported(want))
        }
    }

    async fn autocomplete(
        &self,
        ctx: &RequestContext,
        want: &str,
        search: &str,
        limit: usize,
        case_sensitive: bool,
    ) -> Result<Vec<AutocompleteResult>, ResolverError> {
        autocomplete_with(
            self.search_index.as_ref(),
            ctx,
            want,
            search,
            limit,
            case_sensitive,
        )
        .await
    }
}
