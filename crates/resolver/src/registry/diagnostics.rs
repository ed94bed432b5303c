//! Per-request ledger of which resolvers were consulted and why.

/// Why a resolver was not consulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The resolver declares no schemas for the requested output type.
    OutputTypeNotDeclared,

    /// None of the resolver's schemas accept the request's input type.
    InputTypeMismatch { input: String },
}

/// Record of a single resolver during a request.
#[derive(Clone, Debug)]
pub struct ResolverAttempt {
    pub resolver_id: &'static str,
    pub skipped: Option<SkipReason>,
    pub error: Option<String>,
    pub results: usize,
    pub partial_failures: usize,
}

/// Ledger of resolver attempts plus the schemas that were searched.
#[derive(Clone, Debug, Default)]
pub struct LookupDiagnostics {
    pub attempts: Vec<ResolverAttempt>,
    searched: Vec<String>,
}

impl LookupDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_skip(&mut self, resolver_id: &'static str, reason: SkipReason) {
        self.attempts.push(ResolverAttempt {
            resolver_id,
            skipped: Some(reason),
            error: None,
            results: 0,
            partial_failures: 0,
        });
    }

    pub fn record_error(&mut self, resolver_id: &'static str, error: String) {
        self.attempts.push(ResolverAttempt {
            resolver_id,
            skipped: None,
            error: Some(error),
            results: 0,
            partial_failures: 0,
        });
    }

    pub fn record_results(
        &mut self,
        resolver_id: &'static str,
        results: usize,
        partial_failures: usize,
    ) {
        self.attempts.push(ResolverAttempt {
            resolver_id,
            skipped: None,
            error: None,
            results,
            partial_failures,
        });
    }

    /// Note a schema as searched. Duplicates are ignored.
    pub fn record_searched(&mut self, type_url: &str) {
        if !self.searched.iter().any(|s| s == type_url) {
            self.searched.push(type_url.to_string());
        }
    }

    /// Schemas searched so far, in the order they were first recorded.
    pub fn searched(&self) -> &[String] {
        &self.searched
    }

    pub fn into_searched(self) -> Vec<String> {
        self.searched
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        self.attempts
            .iter()
            .map(|a| {
                if let Some(skip) = &a.skipped {
                    format!("{}: SKIPPED ({:?})", a.resolver_id, skip)
                } else if let Some(err) = &a.error {
                    format!("{}: ERROR ({})", a.resolver_id, err)
                } else {
                    format!(
                        "{}: {} results, {} failures",
                        a.resolver_id, a.results, a.partial_failures
                    )
                }
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Number of resolvers actually consulted.
    pub fn consulted(&self) -> usize {
        self.attempts.iter().filter(|a| a.skipped.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_summary() {
        let mut diag = LookupDiagnostics::new();
        diag.record_skip("k8s", SkipReason::OutputTypeNotDeclared);
        diag.record_error("aws", "invalid query".to_string());
        diag.record_results("gcp", 2, 1);

        let summary = diag.summary();
        assert!(summary.contains("k8s: SKIPPED"));
        assert!(summary.contains("aws: ERROR (invalid query)"));
        assert!(summary.contains("gcp: 2 results, 1 failures"));
        assert_eq!(diag.consulted(), 2);
    }

    #[test]
    fn test_searched_schemas_are_deduplicated() {
        let mut diag = LookupDiagnostics::new();
        diag.record_searched("InstanceID");
        diag.record_searched("InstanceName");
        diag.record_searched("InstanceID");

        assert_eq!(diag.searched(), &["InstanceID", "InstanceName"]);
        assert_eq!(diag.into_searched().len(), 2);
    }
}
