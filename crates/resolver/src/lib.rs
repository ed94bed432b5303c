//! Lookout Resolver Crate
//!
//! This crate provides the resource resolution framework behind the Lookout
//! control plane: a uniform way to look up resources spread across many
//! cloud accounts, regions, and Kubernetes clusters.
//!
//! # Overview
//!
//! The resolver crate supports:
//! - Pluggable resolvers, one per resource domain
//! - Self-describing input schemas clients can render as lookup forms
//! - Concurrent fan-out across accounts, regions, and clientsets with
//!   partial-failure reporting and early exit once enough results arrived
//! - Free-text search and autocomplete alongside structured lookups
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |     Request      |  (want, identifier | query, limit)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | ResolverRegistry |  (selects resolvers by schema, merges, error rule)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |     Resolver     |  (AWS, Kubernetes, ...)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | FanoutAggregator |  (one task per account/region or clientset)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  Provider client |  (CloudClient, ClusterClient)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Resolver`] - Capability implemented per resource domain
//! - [`ResolverRegistry`] - Entry point fanning a request out to resolvers
//! - [`FanoutAggregator`] - Concurrent fan-out / fan-in of lookup tasks
//! - [`Schema`] - Input schema description published to clients
//! - [`Identifier`] - Structured input accepted by `resolve`
//! - [`Results`] - Objects plus partial failures
//! - [`RequestContext`] - Cancellation and deadline scope of one request

pub mod context;
pub mod errors;
pub mod fanout;
pub mod models;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod schema;

pub use context::RequestContext;
pub use errors::{Code, ResolverError, Status};
pub use fanout::{FanoutAggregator, FanoutOutcome, FanoutResult, FanoutTask};
pub use models::{
    AutocompleteResult, AutoscalingGroup, AutoscalingGroupName, Identifier, Instance, InstanceId,
    Pod, PodId, Results, Typed, TypedObject, OPTION_ALL,
};
pub use provider::{AwsResolver, CloudClient, ClusterClient, Inventory, K8sResolver};
pub use registry::{LookupDiagnostics, ResolverRegistry, ResponseAccumulator, SkipReason};
pub use resolver::{InMemorySearchIndex, Resolver, SearchIndex, Target, Topology};
pub use schema::{InputSchema, Schema, SchemaMap, SchemaSetBuilder};
