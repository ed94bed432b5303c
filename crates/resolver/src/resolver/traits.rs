//! Resolver trait definition.
//!
//! This module defines the `Resolver` trait that every resource domain
//! (cloud provider, container orchestrator, ...) implements.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::errors::ResolverError;
use crate::models::{AutocompleteResult, Identifier, Results};
use crate::schema::SchemaMap;

/// Trait for resource resolvers.
///
/// Implement this trait to make a new resource domain resolvable. The
/// registry uses [`schemas`](Self::schemas) to decide which resolvers can
/// answer a request, so a resolver is only ever asked for output types it
/// declared.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use lookout_resolver::resolver::Resolver;
///
/// struct BucketResolver {
///     schemas: SchemaMap,
/// }
///
/// #[async_trait]
/// impl Resolver for BucketResolver {
///     fn id(&self) -> &'static str {
///         "buckets"
///     }
///
///     fn schemas(&self) -> &SchemaMap {
///         &self.schemas
///     }
///
///     // ... implement resolve, search and autocomplete
/// }
/// ```
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Unique identifier for this resolver, used in logs and diagnostics.
    fn id(&self) -> &'static str;

    /// Output type URL -> input schemas accepted for it.
    ///
    /// Built once at construction (including dynamic option hydration) and
    /// never mutated while serving requests.
    fn schemas(&self) -> &SchemaMap;

    /// Look up `want` by structured identifier.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Request scope; cancellation and deadline propagate from here
    /// * `want` - Output type URL
    /// * `input` - Identifier matching one of the schemas declared for `want`
    /// * `limit` - Maximum number of results, 0 for unbounded
    ///
    /// # Returns
    ///
    /// Results and partial failures. An identifier variant the resolver does
    /// not dispatch on is [`ResolverError::UnexpectedInput`].
    async fn resolve(
        &self,
        ctx: &RequestContext,
        want: &str,
        input: &Identifier,
        limit: usize,
    ) -> Result<Results, ResolverError>;

    /// Look up `want` by free-text query.
    ///
    /// A query the resolver cannot parse is [`ResolverError::InvalidQuery`].
    async fn search(
        &self,
        ctx: &RequestContext,
        want: &str,
        query: &str,
        limit: usize,
    ) -> Result<Results, ResolverError>;

    /// Typeahead suggestions for `want`.
    ///
    /// Default implementation returns
    /// [`ResolverError::AutocompleteUnavailable`].
    async fn autocomplete(
        &self,
        _ctx: &RequestContext,
        want: &str,
        _search: &str,
        _limit: usize,
        _case_sensitive: bool,
    ) -> Result<Vec<AutocompleteResult>, ResolverError> {
        Err(ResolverError::AutocompleteUnavailable(want.to_string()))
    }
}
