//! Search index capability used for autocomplete.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::errors::ResolverError;
use crate::models::AutocompleteResult;

/// External full-text index over known resources.
///
/// Resolvers delegate autocomplete here. A resolver without an index answers
/// autocomplete with [`ResolverError::AutocompleteUnavailable`].
#[async_trait]
pub trait SearchIndex: Send + Sync {
    async fn autocomplete(
        &self,
        ctx: &RequestContext,
        type_url: &str,
        search: &str,
        limit: usize,
        case_sensitive: bool,
    ) -> Result<Vec<AutocompleteResult>, ResolverError>;
}

/// In-process index matching on substrings of ids and labels.
#[derive(Clone, Debug, Default)]
pub struct InMemorySearchIndex {
    entries: BTreeMap<String, Vec<AutocompleteResult>>,
}

impl InMemorySearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, type_url: impl Into<String>, entry: AutocompleteResult) {
        self.entries.entry(type_url.into()).or_default().push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn matches(candidate: &str, search: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        candidate.contains(search)
    } else {
        candidate.to_lowercase().contains(&search.to_lowercase())
    }
}

#[async_trait]
impl SearchIndex for InMemorySearchIndex {
    async fn autocomplete(
        &self,
        _ctx: &RequestContext,
        type_url: &str,
        search: &str,
        limit: usize,
        case_sensitive: bool,
    ) -> Result<Vec<AutocompleteResult>, ResolverError> {
        let Some(entries) = self.entries.get(type_url) else {
            return Ok(Vec::new());
        };

        let matched = entries
            .iter()
            .filter(|entry| {
                matches(&entry.id, search, case_sensitive)
                    || matches(&entry.label, search, case_sensitive)
            })
            .cloned();

        Ok(if limit > 0 {
            matched.take(limit).collect()
        } else {
            matched.collect()
        })
    }
}
