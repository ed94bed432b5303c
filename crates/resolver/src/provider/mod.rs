//! Reference resolvers and the provider boundaries they fan out over.
//!
//! This module contains:
//! - [`AwsResolver`] over a [`CloudClient`] (instances, autoscaling groups)
//! - [`K8sResolver`] over a [`ClusterClient`] (pods)
//! - [`Inventory`], a file-backed implementation of both clients
//!
//! # Architecture
//!
//! Resolvers never talk to a backend directly. They expand a request into
//! account/region pairs (or clientsets), run one fan-out task per pair, and
//! leave the actual calls to the client. Swapping the static inventory for
//! live SDK clients only means implementing the two client traits.

pub mod aws;
pub mod inventory;
pub mod k8s;

pub use aws::{AwsResolver, CloudClient};
pub use inventory::{Inventory, InventoryError};
pub use k8s::{ClusterClient, K8sResolver};
