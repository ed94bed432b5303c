//! Data models for the resolver crate.
//!
//! This module contains:
//! - [`Typed`] and [`TypedObject`]: type URL identity and packed domain objects
//! - [`Identifier`]: the structured inputs accepted by `resolve`
//! - [`Results`] and [`AutocompleteResult`]: uniform return values
//! - Reference domain objects ([`Instance`], [`AutoscalingGroup`], [`Pod`])

mod identifier;
mod resources;
mod results;
mod typed;

pub use identifier::{AutoscalingGroupName, Identifier, InstanceId, PodId, OPTION_ALL};
pub use resources::{AutoscalingGroup, GroupSize, Instance, InstanceState, Pod, PodState};
pub use results::{AutocompleteResult, Results};
pub use typed::{Typed, TypedObject};
