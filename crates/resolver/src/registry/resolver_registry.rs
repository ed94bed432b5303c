//! Resolver registry for orchestrating resource resolvers.
//!
//! The registry is the single entry point for every lookup. It handles:
//! - Resolver selection based on declared output and input schemas
//! - Merging results and partial failures across resolvers
//! - Applying the request limit and the error-decision rule
//! - Post-processing schemas before they are handed to clients
//! - Diagnostic tracking for debugging resolver selection

use std::sync::Arc;

use log::{debug, warn};

use super::{LookupDiagnostics, ResponseAccumulator, SkipReason};
use crate::context::RequestContext;
use crate::errors::ResolverError;
use crate::models::{AutocompleteResult, Identifier, Results, OPTION_ALL};
use crate::resolver::{is_all, Resolver, SearchIndex};
use crate::schema::{validate_schema, FieldKind, FieldOption, Schema};

/// Display name of the synthetic "every value" option.
const ALL_OPTION_DISPLAY_NAME: &str = "All";

/// Resolver registry for orchestrating lookups.
pub struct ResolverRegistry {
    resolvers: Vec<Arc<dyn Resolver>>,
    search_index: Option<Arc<dyn SearchIndex>>,
}

impl ResolverRegistry {
    /// Create a new resolver registry.
    ///
    /// Resolvers are consulted in the order given.
    pub fn new(resolvers: Vec<Arc<dyn Resolver>>) -> Self {
        Self {
            resolvers,
            search_index: None,
        }
    }

    /// Attach a search index.
    ///
    /// With an index present every schema advertises autocomplete.
    pub fn with_search_index(mut self, index: Arc<dyn SearchIndex>) -> Self {
        self.search_index = Some(index);
        self
    }

    pub fn resolvers(&self) -> &[Arc<dyn Resolver>] {
        &self.resolvers
    }

    pub fn has_search_index(&self) -> bool {
        self.search_index.is_some()
    }

    /// Resolve `want` from a structured identifier.
    ///
    /// Every resolver declaring a schema for `want` whose type URL matches the
    /// identifier is consulted in turn. Failures inside a resolver arrive as
    /// partial failures; an error returned by the resolver itself aborts the
    /// whole request.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Request scope
    /// * `want` - Output type URL
    /// * `have` - Structured identifier
    /// * `limit` - Maximum number of results, 0 for unbounded
    pub async fn resolve(
        &self,
        ctx: &RequestContext,
        want: &str,
        have: &Identifier,
        limit: u32,
    ) -> Result<Results, ResolverError> {
        let limit = limit as usize;
        let input = have.type_url();
        let mut accumulator = ResponseAccumulator::new(limit);
        let mut diagnostics = LookupDiagnostics::new();

        for resolver in &self.resolvers {
            let Some(schemas) = resolver.schemas().get(want) else {
                diagnostics.record_skip(resolver.id(), SkipReason::OutputTypeNotDeclared);
                continue;
            };

            // A resolver is asked once even if several of its schemas match.
            let Some(schema) = schemas.iter().find(|schema| schema.type_url == input) else {
                diagnostics.record_skip(
                    resolver.id(),
                    SkipReason::InputTypeMismatch {
                        input: input.to_string(),
                    },
                );
                continue;
            };
            diagnostics.record_searched(&schema.type_url);

            debug!(
                "Resolving '{}' from '{}' with resolver '{}'",
                want,
                input,
                resolver.id()
            );

            match resolver.resolve(ctx, want, have, limit).await {
                Ok(results) => {
                    diagnostics.record_results(
                        resolver.id(),
                        results.objects.len(),
                        results.partial_failures.len(),
                    );
                    accumulator.push(results);
                }
                Err(e) => {
                    warn!("Resolver '{}' failed to resolve '{}': {}", resolver.id(), want, e);
                    diagnostics.record_error(resolver.id(), e.to_string());
                    debug!("Resolve diagnostics: {}", diagnostics.summary());
                    return Err(e);
                }
            }
        }

        accumulator.truncate();
        debug!(
            "Resolve consulted {} resolvers: {}",
            diagnostics.consulted(),
            diagnostics.summary()
        );
        accumulator.finish(want, diagnostics.into_searched())
    }

    /// Search for `want` with a free-text query.
    ///
    /// Every resolver declaring `want` is consulted. Only its searchable
    /// schemas are recorded for the error message, even when they return
    /// nothing.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        want: &str,
        query: &str,
        limit: u32,
    ) -> Result<Results, ResolverError> {
        let limit = limit as usize;
        let mut accumulator = ResponseAccumulator::new(limit);
        let mut diagnostics = LookupDiagnostics::new();

        for resolver in &self.resolvers {
            let Some(schemas) = resolver.schemas().get(want) else {
                diagnostics.record_skip(resolver.id(), SkipReason::OutputTypeNotDeclared);
                continue;
            };

            for schema in schemas.iter().filter(|schema| schema.searchable) {
                diagnostics.record_searched(&schema.type_url);
            }

            debug!(
                "Searching '{}' for '{}' with resolver '{}'",
                want,
                query,
                resolver.id()
            );

            match resolver.search(ctx, want, query, limit).await {
                Ok(results) => {
                    diagnostics.record_results(
                        resolver.id(),
                        results.objects.len(),
                        results.partial_failures.len(),
                    );
                    accumulator.push(results);
                }
                Err(e) => {
                    warn!("Resolver '{}' failed to search '{}': {}", resolver.id(), want, e);
                    diagnostics.record_error(resolver.id(), e.to_string());
                    debug!("Search diagnostics: {}", diagnostics.summary());
                    return Err(e);
                }
            }
        }

        accumulator.truncate();
        debug!(
            "Search consulted {} resolvers: {}",
            diagnostics.consulted(),
            diagnostics.summary()
        );
        accumulator.finish(want, diagnostics.into_searched())
    }

    /// Typeahead suggestions for `want`.
    ///
    /// Resolvers are asked in order and the first ones served win: once
    /// `limit` suggestions are collected the remaining resolvers are not
    /// consulted. `limit == 0` collects from every resolver.
    pub async fn autocomplete(
        &self,
        ctx: &RequestContext,
        want: &str,
        search: &str,
        limit: u64,
        case_sensitive: bool,
    ) -> Result<Vec<AutocompleteResult>, ResolverError> {
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let mut suggestions = Vec::new();

        for resolver in &self.resolvers {
            if !resolver.schemas().contains_key(want) {
                continue;
            }
            if limit > 0 && suggestions.len() >= limit {
                break;
            }

            let remaining = if limit > 0 {
                limit - suggestions.len()
            } else {
                0
            };
            let found = resolver
                .autocomplete(ctx, want, search, remaining, case_sensitive)
                .await?;
            suggestions.extend(found);
        }

        if limit > 0 {
            suggestions.truncate(limit);
        }
        Ok(suggestions)
    }

    /// Input schemas accepted for `type_url`, across all resolvers.
    ///
    /// Returned schemas are copies; the registered ones are never modified.
    /// Each copy is post-processed:
    /// 1. autocomplete is enabled when a search index is attached
    /// 2. options without a display name show their value
    /// 3. an "All" option is prepended to fields that ask for one and have
    ///    more than one real option
    /// 4. the schema is validated again
    pub fn object_schemas(&self, type_url: &str) -> Vec<Schema> {
        let mut schemas: Vec<Schema> = self
            .resolvers
            .iter()
            .filter_map(|resolver| resolver.schemas().get(type_url))
            .flatten()
            .cloned()
            .collect();

        for schema in &mut schemas {
            if self.search_index.is_some() {
                schema.autocomplete_enabled = true;
            }

            for field in &mut schema.fields {
                let FieldKind::Options(options) = &mut field.kind else {
                    continue;
                };

                for option in &mut options.options {
                    if option.display_name.is_empty() {
                        option.display_name = option.value.clone();
                    }
                }

                let real = options
                    .options
                    .iter()
                    .filter(|option| !is_all(&option.value))
                    .count();
                let has_all = real < options.options.len();
                if options.include_all_option && real > 1 && !has_all {
                    options
                        .options
                        .insert(0, FieldOption::new(ALL_OPTION_DISPLAY_NAME, OPTION_ALL));
                }
            }

            validate_schema(schema);
        }

        schemas
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::errors::{Code, Status};
    use crate::models::{InstanceId, PodId, Typed, TypedObject};
    use crate::resolver::InMemorySearchIndex;
    use crate::schema::{Field, OptionField, SchemaMap, TextField};

    const WANT: &str = "type.googleapis.com/test.Instance";

    type Outcome = Box<dyn Fn() -> Result<Results, ResolverError> + Send + Sync>;

    struct MockResolver {
        id: &'static str,
        schemas: SchemaMap,
        outcome: Outcome,
        suggestions: Vec<AutocompleteResult>,
        calls: AtomicUsize,
    }

    impl MockResolver {
        fn new(id: &'static str, schemas: Vec<Schema>, outcome: Outcome) -> Self {
            let mut map = SchemaMap::new();
            map.insert(WANT.to_string(), schemas);
            Self {
                id,
                schemas: map,
                outcome,
                suggestions: Vec::new(),
                calls: AtomicUsize::new(0),
            }
        }

        fn with_suggestions(mut self, ids: &[&str]) -> Self {
            self.suggestions = ids
                .iter()
                .map(|id| AutocompleteResult::new(*id, *id))
                .collect();
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Resolver for MockResolver {
        fn id(&self) -> &'static str {
            self.id
        }

        fn schemas(&self) -> &SchemaMap {
            &self.schemas
        }

        async fn resolve(
            &self,
            _ctx: &RequestContext,
            _want: &str,
            _input: &Identifier,
            _limit: usize,
        ) -> Result<Results, ResolverError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }

        async fn search(
            &self,
            _ctx: &RequestContext,
            _want: &str,
            _query: &str,
            _limit: usize,
        ) -> Result<Results, ResolverError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }

        async fn autocomplete(
            &self,
            _ctx: &RequestContext,
            _want: &str,
            _search: &str,
            limit: usize,
            _case_sensitive: bool,
        ) -> Result<Vec<AutocompleteResult>, ResolverError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let take = if limit > 0 { limit } else { usize::MAX };
            Ok(self.suggestions.iter().take(take).cloned().collect())
        }
    }

    fn schema(type_url: &str, searchable: bool) -> Schema {
        Schema {
            type_url: type_url.to_string(),
            display_name: type_url.rsplit('.').next().unwrap_or(type_url).to_string(),
            searchable,
            autocomplete_enabled: false,
            fields: vec![Field {
                name: "id".to_string(),
                display_name: "ID".to_string(),
                required: true,
                kind: FieldKind::Text(TextField::default()),
            }],
            error: None,
        }
    }

    fn region_schema(values: &[&str], include_all: bool) -> Schema {
        let mut schema = schema(InstanceId::TYPE_URL, true);
        schema.fields.push(Field {
            name: "region".to_string(),
            display_name: "Region".to_string(),
            required: true,
            kind: FieldKind::Options(OptionField {
                options: values.iter().map(|v| FieldOption::new("", *v)).collect(),
                include_all_option: include_all,
                dynamic_source: Some("regions".to_string()),
            }),
        });
        schema
    }

    fn objects(ids: &[&str]) -> Vec<TypedObject> {
        ids.iter()
            .map(|id| TypedObject {
                type_url: WANT.to_string(),
                value: json!({ "instanceId": id }),
            })
            .collect()
    }

    fn found(ids: &'static [&'static str]) -> Outcome {
        Box::new(move || Ok(Results::new(objects(ids), vec![])))
    }

    fn failed(n: usize) -> Outcome {
        Box::new(move || {
            Ok(Results::new(
                vec![],
                (0..n)
                    .map(|i| Status::new(Code::Unavailable, format!("region-{} down", i)))
                    .collect(),
            ))
        })
    }

    fn instance() -> Identifier {
        Identifier::InstanceId(InstanceId {
            id: "i-1".to_string(),
            region: "all".to_string(),
            account: "all".to_string(),
        })
    }

    fn options(schema: &Schema, field: &str) -> Vec<FieldOption> {
        match &schema.field(field).map(|f| &f.kind) {
            Some(FieldKind::Options(options)) => options.options.clone(),
            _ => panic!("field '{}' is not an option field", field),
        }
    }

    #[tokio::test]
    async fn test_resolve_merges_matching_resolvers() {
        let aws = Arc::new(MockResolver::new(
            "aws",
            vec![schema(InstanceId::TYPE_URL, true)],
            found(&["i-1"]),
        ));
        let mirror = Arc::new(MockResolver::new(
            "mirror",
            vec![schema(InstanceId::TYPE_URL, true)],
            found(&["i-1b"]),
        ));
        let k8s = Arc::new(MockResolver::new(
            "k8s",
            vec![schema(PodId::TYPE_URL, true)],
            found(&["pod"]),
        ));
        let registry = ResolverRegistry::new(vec![aws.clone(), k8s.clone(), mirror.clone()]);

        let results = registry
            .resolve(&RequestContext::new(), WANT, &instance(), 0)
            .await
            .unwrap();

        assert_eq!(results.objects, objects(&["i-1", "i-1b"]));
        assert_eq!(aws.calls(), 1);
        assert_eq!(mirror.calls(), 1);
        assert_eq!(k8s.calls(), 0);
    }

    #[tokio::test]
    async fn test_resolve_asks_resolver_once_for_duplicate_schemas() {
        let aws = Arc::new(MockResolver::new(
            "aws",
            vec![
                schema(InstanceId::TYPE_URL, true),
                schema(InstanceId::TYPE_URL, false),
            ],
            found(&["i-1"]),
        ));
        let registry = ResolverRegistry::new(vec![aws.clone()]);

        let results = registry
            .resolve(&RequestContext::new(), WANT, &instance(), 0)
            .await
            .unwrap();
        assert_eq!(results.objects.len(), 1);
        assert_eq!(aws.calls(), 1);
    }

    #[tokio::test]
    async fn test_resolve_limit_drops_failures() {
        let broken = Arc::new(MockResolver::new(
            "broken",
            vec![schema(InstanceId::TYPE_URL, true)],
            failed(2),
        ));
        let aws = Arc::new(MockResolver::new(
            "aws",
            vec![schema(InstanceId::TYPE_URL, true)],
            found(&["i-1", "i-2", "i-3"]),
        ));
        let registry = ResolverRegistry::new(vec![broken, aws]);

        let results = registry
            .resolve(&RequestContext::new(), WANT, &instance(), 2)
            .await
            .unwrap();
        assert_eq!(results.objects, objects(&["i-1", "i-2"]));
        assert!(results.partial_failures.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_results_keep_failures_below_limit() {
        let broken = Arc::new(MockResolver::new(
            "broken",
            vec![schema(InstanceId::TYPE_URL, true)],
            failed(1),
        ));
        let aws = Arc::new(MockResolver::new(
            "aws",
            vec![schema(InstanceId::TYPE_URL, true)],
            found(&["i-1"]),
        ));
        let registry = ResolverRegistry::new(vec![broken, aws]);

        let results = registry
            .resolve(&RequestContext::new(), WANT, &instance(), 5)
            .await
            .unwrap();
        assert_eq!(results.objects.len(), 1);
        assert_eq!(results.partial_failures.len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_only_failures_is_failed_precondition() {
        let broken = Arc::new(MockResolver::new(
            "broken",
            vec![schema(InstanceId::TYPE_URL, true)],
            failed(3),
        ));
        let registry = ResolverRegistry::new(vec![broken]);

        let error = registry
            .resolve(&RequestContext::new(), WANT, &instance(), 1)
            .await
            .unwrap_err();

        assert_eq!(error.code(), Code::FailedPrecondition);
        assert_eq!(error.details().len(), 3);
        assert_eq!(
            error.to_string(),
            format!(
                "did not find '{}' with searched schemas '{}', encountered 3 errors",
                WANT,
                InstanceId::TYPE_URL
            )
        );
    }

    #[tokio::test]
    async fn test_resolve_nothing_is_not_found() {
        let empty = Arc::new(MockResolver::new(
            "empty",
            vec![schema(InstanceId::TYPE_URL, true)],
            found(&[]),
        ));
        let registry = ResolverRegistry::new(vec![empty]);

        let error = registry
            .resolve(&RequestContext::new(), WANT, &instance(), 0)
            .await
            .unwrap_err();
        assert_eq!(error.code(), Code::NotFound);
        assert!(error.to_string().contains(InstanceId::TYPE_URL));

        let error = registry
            .resolve(&RequestContext::new(), "type.googleapis.com/test.Bucket", &instance(), 0)
            .await
            .unwrap_err();
        assert_eq!(error.code(), Code::NotFound);
        assert!(error.to_string().ends_with("searched schemas ''"));
    }

    #[tokio::test]
    async fn test_resolver_error_aborts_request() {
        let invalid = Arc::new(MockResolver::new(
            "invalid",
            vec![schema(InstanceId::TYPE_URL, true)],
            Box::new(|| {
                Err(ResolverError::InvalidQuery {
                    query: "a/b/c/d".to_string(),
                    reason: "too many segments".to_string(),
                })
            }),
        ));
        let after = Arc::new(MockResolver::new(
            "after",
            vec![schema(InstanceId::TYPE_URL, true)],
            found(&["i-1"]),
        ));
        let registry = ResolverRegistry::new(vec![invalid, after.clone()]);

        let error = registry
            .search(&RequestContext::new(), WANT, "a/b/c/d", 0)
            .await
            .unwrap_err();
        assert_eq!(error.code(), Code::InvalidArgument);
        assert_eq!(after.calls(), 0);
    }

    #[tokio::test]
    async fn test_search_consults_every_resolver_declaring_want() {
        let hidden = Arc::new(MockResolver::new(
            "hidden",
            vec![schema(PodId::TYPE_URL, false)],
            found(&["pod"]),
        ));
        let registry = ResolverRegistry::new(vec![hidden.clone()]);

        let results = registry
            .search(&RequestContext::new(), WANT, "pod", 0)
            .await
            .unwrap();

        assert_eq!(hidden.calls(), 1);
        assert_eq!(results.objects, objects(&["pod"]));
    }

    #[tokio::test]
    async fn test_search_records_only_searchable_schemas() {
        let hidden = Arc::new(MockResolver::new(
            "hidden",
            vec![schema(PodId::TYPE_URL, false)],
            found(&[]),
        ));
        let aws = Arc::new(MockResolver::new(
            "aws",
            vec![
                schema(InstanceId::TYPE_URL, true),
                schema("type.googleapis.com/test.InstanceName", true),
            ],
            found(&[]),
        ));
        let registry = ResolverRegistry::new(vec![hidden.clone(), aws.clone()]);

        let error = registry
            .search(&RequestContext::new(), WANT, "i-404", 0)
            .await
            .unwrap_err();

        assert_eq!(hidden.calls(), 1);
        assert_eq!(aws.calls(), 1);
        assert_eq!(error.code(), Code::NotFound);
        assert!(error.to_string().ends_with(&format!(
            "searched schemas '{},type.googleapis.com/test.InstanceName'",
            InstanceId::TYPE_URL
        )));
    }

    #[tokio::test]
    async fn test_autocomplete_first_served_until_cap() {
        let first = Arc::new(
            MockResolver::new("first", vec![schema(InstanceId::TYPE_URL, true)], found(&[]))
                .with_suggestions(&["a", "b"]),
        );
        let second = Arc::new(
            MockResolver::new("second", vec![schema(InstanceId::TYPE_URL, true)], found(&[]))
                .with_suggestions(&["c", "d"]),
        );
        let third = Arc::new(
            MockResolver::new("third", vec![schema(InstanceId::TYPE_URL, true)], found(&[]))
                .with_suggestions(&["e"]),
        );
        let registry = ResolverRegistry::new(vec![first, second, third.clone()]);
        let ctx = RequestContext::new();

        let capped = registry.autocomplete(&ctx, WANT, "", 3, false).await.unwrap();
        let ids: Vec<_> = capped.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(third.calls(), 0);

        let unbounded = registry.autocomplete(&ctx, WANT, "", 0, false).await.unwrap();
        assert_eq!(unbounded.len(), 5);
    }

    #[tokio::test]
    async fn test_autocomplete_default_is_unavailable() {
        struct Plain(SchemaMap);

        #[async_trait]
        impl Resolver for Plain {
            fn id(&self) -> &'static str {
                "plain"
            }

            fn schemas(&self) -> &SchemaMap {
                &self.0
            }

            async fn resolve(
                &self,
                _ctx: &RequestContext,
                _want: &str,
                _input: &Identifier,
                _limit: usize,
            ) -> Result<Results, ResolverError> {
                Ok(Results::default())
            }

            async fn search(
                &self,
                _ctx: &RequestContext,
                _want: &str,
                _query: &str,
                _limit: usize,
            ) -> Result<Results, ResolverError> {
                Ok(Results::default())
            }
        }

        let mut schemas = SchemaMap::new();
        schemas.insert(WANT.to_string(), vec![schema(InstanceId::TYPE_URL, true)]);
        let registry = ResolverRegistry::new(vec![Arc::new(Plain(schemas))]);

        let error = registry
            .autocomplete(&RequestContext::new(), WANT, "i-", 10, false)
            .await
            .unwrap_err();
        assert_eq!(error.code(), Code::FailedPrecondition);
    }

    #[test]
    fn test_object_schemas_prepends_all_option() {
        let aws = Arc::new(MockResolver::new(
            "aws",
            vec![region_schema(&["us-1", "us-2"], true)],
            found(&[]),
        ));
        let registry = ResolverRegistry::new(vec![aws]);

        let schemas = registry.object_schemas(WANT);
        let regions = options(&schemas[0], "region");
        assert_eq!(
            regions,
            vec![
                FieldOption::new("All", "all"),
                FieldOption::new("us-1", "us-1"),
                FieldOption::new("us-2", "us-2"),
            ]
        );

        // Registered schemas are untouched, so a second call is identical.
        assert_eq!(registry.object_schemas(WANT), schemas);
        assert!(schemas[0].error.is_none());
    }

    #[test]
    fn test_object_schemas_single_option_gets_no_all() {
        let aws = Arc::new(MockResolver::new(
            "aws",
            vec![region_schema(&["us-1"], true)],
            found(&[]),
        ));
        let registry = ResolverRegistry::new(vec![aws]);

        let regions = options(&registry.object_schemas(WANT)[0], "region");
        assert_eq!(regions, vec![FieldOption::new("us-1", "us-1")]);
    }

    #[test]
    fn test_object_schemas_without_include_all() {
        let aws = Arc::new(MockResolver::new(
            "aws",
            vec![region_schema(&["us-1", "us-2"], false)],
            found(&[]),
        ));
        let registry = ResolverRegistry::new(vec![aws]);

        let regions = options(&registry.object_schemas(WANT)[0], "region");
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn test_object_schemas_reports_empty_required_options() {
        let aws = Arc::new(MockResolver::new(
            "aws",
            vec![region_schema(&[], true)],
            found(&[]),
        ));
        let registry = ResolverRegistry::new(vec![aws]);

        let schemas = registry.object_schemas(WANT);
        let error = schemas[0].error.as_ref().unwrap();
        assert_eq!(error.code, Code::OutOfRange);
    }

    #[test]
    fn test_object_schemas_autocomplete_follows_index() {
        let resolvers: Vec<Arc<dyn Resolver>> = vec![Arc::new(MockResolver::new(
            "aws",
            vec![schema(InstanceId::TYPE_URL, true)],
            found(&[]),
        ))];

        let plain = ResolverRegistry::new(resolvers.clone());
        assert!(!plain.object_schemas(WANT)[0].autocomplete_enabled);

        let indexed = ResolverRegistry::new(resolvers)
            .with_search_index(Arc::new(InMemorySearchIndex::new()));
        assert!(indexed.has_search_index());
        assert!(indexed.object_schemas(WANT)[0].autocomplete_enabled);
    }

    #[test]
    fn test_object_schemas_spans_resolvers() {
        let aws = Arc::new(MockResolver::new(
            "aws",
            vec![schema(InstanceId::TYPE_URL, true)],
            found(&[]),
        ));
        let k8s = Arc::new(MockResolver::new(
            "k8s",
            vec![schema(PodId::TYPE_URL, true)],
            found(&[]),
        ));
        let registry = ResolverRegistry::new(vec![aws, k8s]);

        assert_eq!(registry.object_schemas(WANT).len(), 2);
        assert!(registry.object_schemas("type.googleapis.com/none").is_empty());
    }
}
