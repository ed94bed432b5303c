use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use lookout_resolver::{
    AwsResolver, Inventory, K8sResolver, Resolver, ResolverRegistry, SearchIndex,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub registry: ResolverRegistry,
    /// Deadline for the lookups behind one request.
    pub lookup_timeout: Duration,
}

pub fn init_tracing() {
    let log_format = std::env::var("LOOKOUT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let inventory = Inventory::from_path(&config.inventory_path).with_context(|| {
        format!(
            "Failed to load inventory from {}",
            config.inventory_path.display()
        )
    })?;
    let inventory = Arc::new(inventory);

    let index: Arc<dyn SearchIndex> = Arc::new(inventory.search_index());
    let resolvers: Vec<Arc<dyn Resolver>> = vec![
        Arc::new(AwsResolver::new(inventory.clone()).with_search_index(index.clone())),
        Arc::new(K8sResolver::new(inventory).with_search_index(index.clone())),
    ];
    let registry = ResolverRegistry::new(resolvers).with_search_index(index);
    for resolver in registry.resolvers() {
        tracing::info!(
            "Registered resolver '{}' for {} output types",
            resolver.id(),
            resolver.schemas().len()
        );
    }

    Ok(Arc::new(AppState {
        registry,
        lookup_timeout: config.lookup_timeout(),
    }))
}
