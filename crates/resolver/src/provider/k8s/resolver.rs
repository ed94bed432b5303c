//! Resolver for Kubernetes pods.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::client::ClusterClient;
use super::CLIENTSETS_SOURCE;
use crate::context::RequestContext;
use crate::errors::ResolverError;
use crate::fanout::{FanoutAggregator, FanoutResult};
use crate::models::{
    AutocompleteResult, Identifier, Pod, PodId, Results, Typed, TypedObject, OPTION_ALL,
};
use crate::resolver::{autocomplete_with, expand_clientsets, Resolver, SearchIndex};
use crate::schema::{SchemaMap, SchemaSetBuilder};

const RESOLVER_ID: &str = "k8s";
const DEFAULT_NAMESPACE: &str = "default";

/// Parse a pod query into an identifier.
///
/// Accepted forms: `clientset/namespace/name`, `namespace/name` (every
/// clientset), and `name` (every clientset, `default` namespace).
pub fn parse_pod_query(query: &str) -> Result<PodId, ResolverError> {
    let query = query.trim();
    let segments: Vec<&str> = query.split('/').collect();
    if segments
        .iter()
        .any(|s| s.is_empty() || s.chars().any(char::is_whitespace))
    {
        return Err(invalid_pod_query(query));
    }

    let (clientset, namespace, name) = match segments.as_slice() {
        [clientset, namespace, name] => (*clientset, *namespace, *name),
        [namespace, name] => (OPTION_ALL, *namespace, *name),
        [name] => (OPTION_ALL, DEFAULT_NAMESPACE, *name),
        _ => return Err(invalid_pod_query(query)),
    };

    Ok(PodId {
        name: name.to_string(),
        namespace: namespace.to_string(),
        clientset: clientset.to_string(),
    })
}

fn invalid_pod_query(query: &str) -> ResolverError {
    ResolverError::InvalidQuery {
        query: query.to_string(),
        reason: "expected 'clientset/namespace/name', 'namespace/name' or 'name'".to_string(),
    }
}

/// Resolves pods across every configured clientset.
pub struct K8sResolver<C: ClusterClient> {
    client: Arc<C>,
    clientsets: Vec<String>,
    schemas: SchemaMap,
    search_index: Option<Arc<dyn SearchIndex>>,
}

impl<C: ClusterClient> K8sResolver<C> {
    pub fn new(client: Arc<C>) -> Self {
        let clientsets = client.clientsets();
        let schemas = build_schemas(&clientsets, false);
        Self {
            client,
            clientsets,
            schemas,
            search_index: None,
        }
    }

    /// Delegate autocomplete to `index` and advertise it on searchable schemas.
    pub fn with_search_index(mut self, index: Arc<dyn SearchIndex>) -> Self {
        self.schemas = build_schemas(&self.clientsets, true);
        self.search_index = Some(index);
        self
    }

    async fn pods(
        &self,
        ctx: &RequestContext,
        pod: &PodId,
        limit: usize,
    ) -> Result<Results, ResolverError> {
        let mut fanout = FanoutAggregator::<TypedObject>::new(ctx);

        for clientset in expand_clientsets(&self.clientsets, &pod.clientset) {
            let client = self.client.clone();
            let namespace = pod.namespace.clone();
            let name = pod.name.clone();
            fanout.spawn(async move {
                let pods = client.describe_pods(&clientset, &namespace, &name).await?;
                pods.iter()
                    .map(TypedObject::pack)
                    .collect::<FanoutResult<TypedObject>>()
            });
        }

        debug!(
            "Looking up pod {}/{} in {} clientsets",
            pod.namespace,
            pod.name,
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

fn build_schemas(clientsets: &[String], autocomplete: bool) -> SchemaMap {
    SchemaSetBuilder::new()
        .add::<Pod, PodId>()
        .hydrate(CLIENTSETS_SOURCE, clientsets)
        .autocomplete(autocomplete)
        .build()
}

#[async_trait]
impl<C: ClusterClient> Resolver for K8sResolver<C> {
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
        if want != Pod::TYPE_URL {
            return Err(Self::unsupported(want));
        }
        match input {
            Identifier::PodId(pod) => self.pods(ctx, pod, limit).await,
            other => Err(ResolverError::UnexpectedInput {
                want: want.to_string(),
                input: other.type_url().to_string(),
            }),
        }
    }

    async fn search(
        &self,
        ctx: &RequestContext,
        want: &str,
        query: &str,
        limit: usize,
    ) -> Result<Results, ResolverError> {
        if want != Pod::TYPE_URL {
            return Err(Self::unsupported(want));
        }
        let pod = parse_pod_query(query)?;
        self.pods(ctx, &pod, limit).await
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

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::errors::Code;
    use crate::models::{InstanceId, PodState};
    use crate::schema::FieldKind;

    struct MockCluster {
        pods: BTreeMap<String, Vec<Pod>>,
        down: Vec<String>,
    }

    fn pod(clientset: &str, namespace: &str, name: &str) -> Pod {
        Pod {
            name: name.to_string(),
            namespace: namespace.to_string(),
            clientset: clientset.to_string(),
            cluster: format!("{}-cluster", clientset),
            state: PodState::Running,
            pod_ip: Some("10.0.0.7".to_string()),
            node_ip: None,
            labels: BTreeMap::new(),
        }
    }

    fn cluster() -> Arc<MockCluster> {
        let mut pods = BTreeMap::new();
        pods.insert(
            "prod-east".to_string(),
            vec![pod("prod-east", "default", "envoy"), pod("prod-east", "mesh", "envoy")],
        );
        pods.insert("prod-west".to_string(), vec![pod("prod-west", "default", "envoy")]);
        pods.insert("staging".to_string(), vec![]);
        Arc::new(MockCluster {
            pods,
            down: vec!["staging".to_string()],
        })
    }

    #[async_trait]
    impl ClusterClient for MockCluster {
        fn clientsets(&self) -> Vec<String> {
            self.pods.keys().cloned().collect()
        }

        async fn describe_pods(
            &self,
            clientset: &str,
            namespace: &str,
            name: &str,
        ) -> Result<Vec<Pod>, ResolverError> {
            if self.down.iter().any(|c| c == clientset) {
                return Err(ResolverError::provider(
                    "k8s",
                    Code::Unavailable,
                    format!("clientset {} unreachable", clientset),
                ));
            }
            Ok(self
                .pods
                .get(clientset)
                .into_iter()
                .flatten()
                .filter(|p| p.namespace == namespace && p.name == name)
                .cloned()
                .collect())
        }
    }

    #[test]
    fn test_parse_pod_query_forms() {
        let full = parse_pod_query("prod-east/mesh/envoy").unwrap();
        assert_eq!(full.clientset, "prod-east");
        assert_eq!(full.namespace, "mesh");
        assert_eq!(full.name, "envoy");

        let namespaced = parse_pod_query("mesh/envoy").unwrap();
        assert_eq!(namespaced.clientset, "all");
        assert_eq!(namespaced.namespace, "mesh");

        let bare = parse_pod_query("envoy").unwrap();
        assert_eq!(bare.clientset, "all");
        assert_eq!(bare.namespace, "default");
    }

    #[test]
    fn test_parse_pod_query_rejects_malformed() {
        for query in ["", "a/b/c/d", "mesh//envoy", "my pod"] {
            let error = parse_pod_query(query).unwrap_err();
            assert_eq!(error.code(), Code::InvalidArgument, "query {:?}", query);
        }
    }

    #[tokio::test]
    async fn test_resolve_fans_out_over_clientsets() {
        let resolver = K8sResolver::new(cluster());
        let input = Identifier::PodId(PodId {
            name: "envoy".to_string(),
            namespace: "default".to_string(),
            clientset: "all".to_string(),
        });

        let results = resolver
            .resolve(&RequestContext::new(), Pod::TYPE_URL, &input, 0)
            .await
            .unwrap();

        assert_eq!(results.objects.len(), 2);
        assert_eq!(results.partial_failures.len(), 1);
        assert_eq!(results.partial_failures[0].code, Code::Unavailable);
    }

    #[tokio::test]
    async fn test_search_single_clientset() {
        let resolver = K8sResolver::new(cluster());

        let results = resolver
            .search(&RequestContext::new(), Pod::TYPE_URL, "prod-east/mesh/envoy", 0)
            .await
            .unwrap();

        assert_eq!(results.objects.len(), 1);
        assert!(results.partial_failures.is_empty());
        let found: Pod = results.objects[0].unpack().unwrap();
        assert_eq!(found.namespace, "mesh");
    }

    #[tokio::test]
    async fn test_rejects_foreign_input() {
        let resolver = K8sResolver::new(cluster());
        let input = Identifier::InstanceId(InstanceId {
            id: "i-1".to_string(),
            region: "all".to_string(),
            account: "all".to_string(),
        });

        let error = resolver
            .resolve(&RequestContext::new(), Pod::TYPE_URL, &input, 0)
            .await
            .unwrap_err();
        assert_eq!(error.code(), Code::Internal);
    }

    #[test]
    fn test_clientset_options_hydrated() {
        let resolver = K8sResolver::new(cluster());
        let schema = &resolver.schemas()[Pod::TYPE_URL][0];

        match &schema.field("clientset").unwrap().kind {
            FieldKind::Options(options) => {
                assert_eq!(options.options.len(), 3);
                assert_eq!(options.dynamic_source.as_deref(), Some(CLIENTSETS_SOURCE));
            }
            other => panic!("Expected option field, got {:?}", other),
        }
        assert!(schema.error.is_none());
    }
}
