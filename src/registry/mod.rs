//! Template registry module.
//!
//! Thread-safe storage of named messaging-template handles. The number of
//! registered templates drives the startup health-wiring decision.

mod error;

pub use error::RegistryError;

use crate::template::MessagePuller;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry of named messaging templates.
///
/// # Examples
///
/// ```
/// use sentinel::registry::TemplateRegistry;
/// use sentinel::template::InMemoryTemplate;
/// use std::sync::Arc;
///
/// let registry = TemplateRegistry::new();
/// registry
///     .register("default", Arc::new(InMemoryTemplate::new()))
///     .unwrap();
/// assert_eq!(registry.count(), 1);
/// ```
pub struct TemplateRegistry {
    templates: DashMap<String, Arc<dyn MessagePuller>>,
}

impl TemplateRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Register a template under a name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateTemplate` if the name is taken.
    pub fn register(
        &self,
        name: &str,
        template: Arc<dyn MessagePuller>,
    ) -> Result<(), RegistryError> {
        if self.templates.contains_key(name) {
            return Err(RegistryError::DuplicateTemplate(name.to_string()));
        }
        self.templates.insert(name.to_string(), template);
        Ok(())
    }

    /// Get a template handle by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn MessagePuller>, RegistryError> {
        self.templates
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| RegistryError::TemplateNotFound(name.to_string()))
    }

    /// Registered template names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.templates.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Number of registered templates.
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// Snapshot of all templates keyed by name, in name order.
    ///
    /// This is the shape the wiring decision consumes.
    pub fn snapshot(&self) -> BTreeMap<String, Arc<dyn MessagePuller>> {
        self.templates
            .iter()
            .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
            .collect()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}
