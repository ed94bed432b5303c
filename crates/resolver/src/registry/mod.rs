//! Resolver registry module.
//!
//! This module provides the layer that fans one request out to every
//! resolver able to answer it, including:
//! - Resolver selection by output type and input schema
//! - Result accumulation, truncation, and the error-decision rule
//! - Schema post-processing for clients
//! - Diagnostics on which resolvers were consulted

mod accumulator;
mod diagnostics;
mod resolver_registry;

pub use accumulator::ResponseAccumulator;
pub use diagnostics::{LookupDiagnostics, ResolverAttempt, SkipReason};
pub use resolver_registry::ResolverRegistry;
