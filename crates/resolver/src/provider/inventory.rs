//! Static resource inventory loaded from a JSON file.
//!
//! Serves as both [`CloudClient`] and [`ClusterClient`] so the resolvers can
//! run without live cloud credentials. Regions and clientsets can be flagged
//! `unavailable` (or given an artificial latency) to exercise partial-failure
//! handling end to end.
//!
//! ```json
//! {
//!   "accounts": [
//!     { "name": "prod", "regions": [
//!       { "name": "us-east-1", "instances": [{ "instanceId": "i-0abc" }] },
//!       { "name": "eu-west-1", "unavailable": true }
//!     ] }
//!   ],
//!   "clientsets": [
//!     { "name": "prod-east", "cluster": "k8s-prod-east", "pods": [{ "name": "envoy" }] }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aws::CloudClient;
use super::k8s::ClusterClient;
use crate::errors::{Code, ResolverError};
use crate::models::{AutocompleteResult, AutoscalingGroup, Instance, Pod, Typed};
use crate::resolver::{InMemorySearchIndex, Topology};

const CLOUD_PROVIDER: &str = "inventory/aws";
const CLUSTER_PROVIDER: &str = "inventory/k8s";

/// Errors raised while loading an inventory.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Failed to read inventory '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse inventory: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    #[serde(default)]
    pub accounts: Vec<AccountInventory>,
    #[serde(default)]
    pub clientsets: Vec<ClientsetInventory>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInventory {
    pub name: String,
    #[serde(default)]
    pub regions: Vec<RegionInventory>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionInventory {
    pub name: String,
    /// Every call against this region fails with `UNAVAILABLE`.
    #[serde(default)]
    pub unavailable: bool,
    /// Artificial delay applied to every call, in milliseconds.
    #[serde(default)]
    pub latency_ms: u64,
    #[serde(default)]
    pub instances: Vec<Instance>,
    #[serde(default)]
    pub autoscaling_groups: Vec<AutoscalingGroup>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsetInventory {
    pub name: String,
    /// Cluster the clientset connects to. Defaults to the clientset name.
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub unavailable: bool,
    #[serde(default)]
    pub latency_ms: u64,
    #[serde(default)]
    pub pods: Vec<Pod>,
}

impl Inventory {
    /// Load an inventory from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| InventoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let inventory = Self::from_json(&contents)?;
        info!(
            "Loaded inventory from {}: {} accounts, {} clientsets",
            path.display(),
            inventory.accounts.len(),
            inventory.clientsets.len()
        );
        Ok(inventory)
    }

    /// Parse an inventory, filling in the location fields each resource
    /// inherits from where it is listed.
    pub fn from_json(json: &str) -> Result<Self, InventoryError> {
        let mut inventory: Self = serde_json::from_str(json)?;
        inventory.normalize();
        Ok(inventory)
    }

    fn normalize(&mut self) {
        for account in &mut self.accounts {
            for region in &mut account.regions {
                for instance in &mut region.instances {
                    instance.account = account.name.clone();
                    instance.region = region.name.clone();
                }
                for group in &mut region.autoscaling_groups {
                    group.account = account.name.clone();
                    group.region = region.name.clone();
                }
            }
        }

        for clientset in &mut self.clientsets {
            if clientset.cluster.is_empty() {
                clientset.cluster = clientset.name.clone();
            }
            for pod in &mut clientset.pods {
                pod.clientset = clientset.name.clone();
                pod.cluster = clientset.cluster.clone();
                if pod.namespace.is_empty() {
                    pod.namespace = "default".to_string();
                }
            }
        }
    }

    /// Index every resource for autocomplete.
    ///
    /// Suggestion ids are fully qualified queries (`account/region/id`,
    /// `clientset/namespace/name`) so they can be fed back into search.
    pub fn search_index(&self) -> InMemorySearchIndex {
        let mut index = InMemorySearchIndex::new();

        for account in &self.accounts {
            for region in &account.regions {
                let scope = format!("{}/{}", account.name, region.name);
                for instance in &region.instances {
                    index.insert(
                        Instance::TYPE_URL,
                        AutocompleteResult::new(
                            format!("{}/{}", scope, instance.instance_id),
                            format!("{} ({})", instance.instance_id, scope),
                        ),
                    );
                }
                for group in &region.autoscaling_groups {
                    index.insert(
                        AutoscalingGroup::TYPE_URL,
                        AutocompleteResult::new(
                            format!("{}/{}", scope, group.name),
                            format!("{} ({})", group.name, scope),
                        ),
                    );
                }
            }
        }

        for clientset in &self.clientsets {
            for pod in &clientset.pods {
                index.insert(
                    Pod::TYPE_URL,
                    AutocompleteResult::new(
                        format!("{}/{}/{}", clientset.name, pod.namespace, pod.name),
                        format!("{} ({}/{})", pod.name, clientset.name, pod.namespace),
                    ),
                );
            }
        }

        debug!("Built search index with {} entries", index.len());
        index
    }

    fn region(&self, account: &str, region: &str) -> Result<&RegionInventory, ResolverError> {
        self.accounts
            .iter()
            .filter(|a| a.name == account)
            .flat_map(|a| a.regions.iter())
            .find(|r| r.name == region)
            .ok_or_else(|| {
                ResolverError::provider(
                    CLOUD_PROVIDER,
                    Code::NotFound,
                    format!("unknown region '{}' in account '{}'", region, account),
                )
            })
    }

    async fn reach_region(
        &self,
        account: &str,
        region: &str,
    ) -> Result<&RegionInventory, ResolverError> {
        let inventory = self.region(account, region)?;
        simulate_latency(inventory.latency_ms).await;
        if inventory.unavailable {
            return Err(ResolverError::provider(
                CLOUD_PROVIDER,
                Code::Unavailable,
                format!("region '{}' of account '{}' is unavailable", region, account),
            ));
        }
        Ok(inventory)
    }
}

async fn simulate_latency(latency_ms: u64) {
    if latency_ms > 0 {
        tokio::time::sleep(Duration::from_millis(latency_ms)).await;
    }
}

#[async_trait]
impl CloudClient for Inventory {
    fn topology(&self) -> Topology {
        let mut topology = Topology::new();
        for account in &self.accounts {
            topology.add_account(
                account.name.clone(),
                account.regions.iter().map(|r| r.name.clone()),
            );
        }
        topology
    }

    async fn describe_instances(
        &self,
        account: &str,
        region: &str,
        ids: &[String],
    ) -> Result<Vec<Instance>, ResolverError> {
        let inventory = self.reach_region(account, region).await?;
        Ok(inventory
            .instances
            .iter()
            .filter(|instance| ids.contains(&instance.instance_id))
            .cloned()
            .collect())
    }

    async fn describe_autoscaling_groups(
        &self,
        account: &str,
        region: &str,
        names: &[String],
    ) -> Result<Vec<AutoscalingGroup>, ResolverError> {
        let inventory = self.reach_region(account, region).await?;
        Ok(inventory
            .autoscaling_groups
            .iter()
            .filter(|group| names.contains(&group.name))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ClusterClient for Inventory {
    fn clientsets(&self) -> Vec<String> {
        self.clientsets.iter().map(|c| c.name.clone()).collect()
    }

    async fn describe_pods(
        &self,
        clientset: &str,
        namespace: &str,
        name: &str,
    ) -> Result<Vec<Pod>, ResolverError> {
        let inventory = self
            .clientsets
            .iter()
            .find(|c| c.name == clientset)
            .ok_or_else(|| {
                ResolverError::provider(
                    CLUSTER_PROVIDER,
                    Code::NotFound,
                    format!("unknown clientset '{}'", clientset),
                )
            })?;

        simulate_latency(inventory.latency_ms).await;
        if inventory.unavailable {
            return Err(ResolverError::provider(
                CLUSTER_PROVIDER,
                Code::Unavailable,
                format!("clientset '{}' is unavailable", clientset),
            ));
        }

        Ok(inventory
            .pods
            .iter()
            .filter(|pod| pod.namespace == namespace && pod.name == name)
            .cloned()
            .collect())
    }
}
