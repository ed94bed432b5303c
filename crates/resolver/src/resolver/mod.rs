//! The resolver capability and the helpers concrete resolvers share.
//!
//! This module contains:
//! - The [`Resolver`] trait every resource domain implements
//! - [`Topology`] and [`expand_clientsets`] for choosing fan-out targets
//! - The [`SearchIndex`] capability autocomplete is delegated to

mod search_index;
mod topology;
mod traits;

use std::sync::Arc;

pub use search_index::{InMemorySearchIndex, SearchIndex};
pub use topology::{expand_clientsets, is_all, Target, Topology};
pub use traits::Resolver;

use crate::context::RequestContext;
use crate::errors::ResolverError;
use crate::models::AutocompleteResult;

/// Delegate autocomplete to `index`, or fail with `FailedPrecondition` when
/// the resolver was built without one.
pub async fn autocomplete_with(
    index: Option<&Arc<dyn SearchIndex>>,
    ctx: &RequestContext,
    want: &str,
    search: &str,
    limit: usize,
    case_sensitive: bool,
) -> Result<Vec<AutocompleteResult>, ResolverError> {
    match index {
        Some(index) => {
            index
                .autocomplete(ctx, want, search, limit, case_sensitive)
                .await
        }
        None => Err(ResolverError::AutocompleteUnavailable(want.to_string())),
    }
}
