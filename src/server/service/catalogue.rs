use schema::registry::{self, SchemaEntry};
use schema::{ErrorDetails, SchemaError};
use serde_json::Value;

use crate::server::error::AppError;

/// Lists registry schemas and validates payloads against them.
pub struct SchemaService;

impl SchemaService {
    pub fn new() -> Self {
        Self
    }

    /// Lists every registered schema, sorted by name.
    pub fn list(&self) -> Vec<&'static SchemaEntry> {
        let mut entries: Vec<_> = registry::entries().iter().collect();
        entries.sort_unstable_by_key(|entry| entry.name);
        entries
    }

    /// Validates a payload against the schema registered as `name`.
    ///
    /// A payload that fails to conform is a successful check, not an error.
    ///
    /// # Returns
    /// - `Ok(None)` - The payload conforms
    /// - `Ok(Some(ErrorDetails))` - Tree of every failure found
    /// - `Err(AppError::NotFound)` - No schema has this name
    pub fn validate(&self, name: &str, payload: &Value) -> Result<Option<ErrorDetails>, AppError> {
        match registry::validate_json(name, payload) {
            Ok(()) => Ok(None),
            Err(err @ SchemaError::UnknownSchema(_)) => Err(AppError::NotFound(err.to_string())),
            Err(err) => {
                tracing::debug!("Payload rejected by {}: {}", name, err);
                Ok(Some(err.details()))
            }
        }
    }
}

impl Default for SchemaService {
    fn default() -> Self {
        Self::new()
    }
}
