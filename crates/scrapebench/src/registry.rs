//! Adapter registration and lookup.
//!
//! Registration order is significant: it fixes the order implementations
//! appear in rankings when means are equal and the order pairs are planned,
//! which keeps reports deterministic across runs.

use crate::adapter::LibraryAdapter;
use crate::adapters::{DomQueryAdapter, ReqwestAdapter, ScraperAdapter, TlAdapter, UreqAdapter};
use crate::types::Operation;
use crate::{Error, Result};
use std::sync::Arc;

/// Validate an implementation name before registration.
///
/// # Rules
///
/// - Name cannot be empty
/// - Name cannot contain whitespace
///
/// # Errors
///
/// Returns [`Error::Config`] if the name is invalid.
fn validate_adapter_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Config("implementation name cannot be empty".to_string()));
    }

    if name.contains(char::is_whitespace) {
        return Err(Error::Config(format!(
            "implementation name '{}' cannot contain whitespace",
            name
        )));
    }

    Ok(())
}

/// Ordered registry of the implementations under comparison.
pub struct AdapterRegistry {
    adapters: Vec<Arc<dyn LibraryAdapter>>,
}

impl AdapterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { adapters: Vec::new() }
    }

    /// Create a registry with every bundled adapter registered.
    pub fn with_default_adapters() -> Self {
        let mut registry = Self::new();

        // Static set with unique names; registration cannot fail here.
        for adapter in [
            Arc::new(ScraperAdapter::new()) as Arc<dyn LibraryAdapter>,
            Arc::new(TlAdapter::new()),
            Arc::new(DomQueryAdapter::new()),
            Arc::new(ReqwestAdapter::new()),
            Arc::new(UreqAdapter::new()),
        ] {
            let _ = registry.register(adapter);
        }

        registry
    }

    /// Register an adapter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the name is invalid or already taken.
    pub fn register(&mut self, adapter: Arc<dyn LibraryAdapter>) -> Result<()> {
        validate_adapter_name(adapter.name())?;

        if self.get(adapter.name()).is_some() {
            return Err(Error::Config(format!(
                "implementation '{}' is already registered",
                adapter.name()
            )));
        }

        tracing::debug!(implementation = adapter.name(), version = %adapter.version(), "registered adapter");
        self.adapters.push(adapter);
        Ok(())
    }

    /// Look up an adapter by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn LibraryAdapter>> {
        self.adapters.iter().find(|a| a.name() == name).cloned()
    }

    /// Names of all registered adapters, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.adapters.iter().map(|a| a.name().to_string()).collect()
    }

    /// All adapters declaring support for `operation`, in registration order.
    pub fn supporting(&self, operation: Operation) -> Vec<Arc<dyn LibraryAdapter>> {
        self.adapters
            .iter()
            .filter(|a| a.supports(operation))
            .cloned()
            .collect()
    }

    /// Get count of registered adapters
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
