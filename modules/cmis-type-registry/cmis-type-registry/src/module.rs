//! Module declaration for the CMIS Type Registry module.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use cmis_type_registry_sdk::TypeRegistryClient;
use tracing::{debug, info, warn};

use crate::config::TypeRegistryConfig;
use crate::domain::service::TypeRegistryService;
use crate::local_client::TypeRegistryLocalClient;

/// CMIS Type Registry module.
///
/// `init` builds and populates the registry, then publishes it. From that
/// point on the registry is only reachable through the read-only client
/// returned by [`client`](Self::client).
#[derive(Default)]
pub struct TypeRegistryModule {
    client: ArcSwapOption<TypeRegistryLocalClient>,
}

impl Clone for TypeRegistryModule {
    fn clone(&self) -> Self {
        Self {
            client: ArcSwapOption::new(self.client.load_full()),
        }
    }
}

impl TypeRegistryModule {
    /// Creates an uninitialized module.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the registry, registers the configured types, and publishes it.
    ///
    /// Configured types that the registry rejects are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the module has already been initialized, including
    /// by a concurrent `init` that published first.
    pub fn init(&self, cfg: &TypeRegistryConfig) -> anyhow::Result<()> {
        info!("Initializing cmis_type_registry module");

        if self.is_initialized() {
            anyhow::bail!("cmis_type_registry module is already initialized");
        }

        debug!(
            default_max_items_types = cfg.default_max_items_types,
            default_depth_types = cfg.default_depth_types,
            configured_types = cfg.types.len(),
            "Loaded cmis_type_registry config"
        );

        let mut service = TypeRegistryService::new();
        let added = service.add_types(&cfg.types);
        if added < cfg.types.len() {
            warn!(
                rejected = cfg.types.len() - added,
                "Configured types were rejected"
            );
        }
        let type_count = service.type_ids().len();

        let client = Arc::new(TypeRegistryLocalClient::new(Arc::new(service), cfg));
        let previous = self
            .client
            .compare_and_swap(&None::<Arc<TypeRegistryLocalClient>>, Some(client));
        if previous.is_some() {
            anyhow::bail!("cmis_type_registry module is already initialized");
        }

        info!("CMIS type registry published with {type_count} types");
        Ok(())
    }

    /// Returns `true` once `init` has published the registry.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.client.load().is_some()
    }

    /// Returns the read-only client over the published registry.
    ///
    /// # Errors
    ///
    /// Returns an error if `init` has not run yet.
    pub fn client(&self) -> anyhow::Result<Arc<dyn TypeRegistryClient>> {
        let client = self
            .client
            .load_full()
            .ok_or_else(|| anyhow::anyhow!("Type registry not initialized"))?;
        Ok(client)
    }
}
