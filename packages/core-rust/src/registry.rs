use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;

use crate::error::{BridgeError, BridgeResult};
use crate::traits::BridgeAdapter;
use crate::types::Parameters;

/// Constructs a fresh, unconfigured adapter.
pub type AdapterFactory = Arc<dyn Fn() -> Box<dyn BridgeAdapter> + Send + Sync>;

// ---------------------------------------------------------------------------
// AdapterRegistry
// ---------------------------------------------------------------------------

/// Registry of adapter variants available to a host.
///
/// Hosts register one factory per backend variant at composition time and
/// later call [`create`](AdapterRegistry::create) to obtain a configured,
/// initialized instance. Registering a name twice replaces the factory but
/// keeps its original position in [`names`](AdapterRegistry::names).
pub struct AdapterRegistry {
    /// Name-based lookup: adapter name -> factory.
    by_name: DashMap<&'static str, AdapterFactory>,
    /// Registration order for deterministic listing.
    order: RwLock<Vec<&'static str>>,
}

impl AdapterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_name: DashMap::new(),
            order: RwLock::new(Vec::new()),
        }
    }

    /// Register a factory under `name`.
    pub fn register<F>(&self, name: &'static str, factory: F)
    where
        F: Fn() -> Box<dyn BridgeAdapter> + Send + Sync + 'static,
    {
        if self.by_name.insert(name, Arc::new(factory)).is_none() {
            self.order.write().push(name);
        }
    }

    /// Whether a factory is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered adapter names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.order.read().clone()
    }

    /// Build an adapter and run it through configure and initialize.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::UnknownAdapter`] if `name` is not registered,
    /// or whatever the adapter's `configure()` / `initialize()` returns.
    pub fn create(&self, name: &str, options: &Parameters) -> BridgeResult<Arc<dyn BridgeAdapter>> {
        let factory = self
            .by_name
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| BridgeError::UnknownAdapter {
                name: name.to_string(),
            })?;

        let mut adapter = factory();
        adapter.configure(options)?;
        adapter.initialize()?;
        tracing::debug!(
            adapter = adapter.name(),
            version = adapter.version(),
            "bridge adapter initialized"
        );
        Ok(Arc::from(adapter))
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
