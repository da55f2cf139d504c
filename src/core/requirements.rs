// src/core/requirements.rs
use crate::error::ValidationError;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Lookup contract for required-parameter declarations.
///
/// How declarations get attached to a handler is out of band (macro, loaded
/// metadata file, hand registration); the core only relies on this lookup
/// being synchronous and total. Entries come back as raw metadata values and
/// are validated by the hook before use.
pub trait RequirementRegistry: Send + Sync {
    /// Ordered requirement entries declared for `handler` on the named state,
    /// or `None` when nothing was declared. Order matters: the first unmet
    /// entry is the one prompted for.
    fn lookup_required(&self, state_name: &str, handler: &str) -> Option<Vec<Value>>;
}

/// In-memory requirement registry, keyed by (state name, handler name).
#[derive(Debug, Clone, Default)]
pub struct DeclarationRegistry {
    declarations: HashMap<(String, String), Vec<Value>>,
}

impl DeclarationRegistry {
    pub fn new() -> Self {
        Self {
            declarations: HashMap::new(),
        }
    }

    /// Declare the parameters `handler` on `state_name` needs before it may
    /// run. Entries are stored as given; validation happens at lookup use.
    pub fn declare(
        &mut self,
        state_name: impl Into<String>,
        handler: impl Into<String>,
        entries: Vec<Value>,
    ) {
        let key = (state_name.into(), handler.into());
        if self.declarations.contains_key(&key) {
            warn!(
                "Requirements for '{}#{}' already declared, overwriting",
                key.0, key.1
            );
        }
        self.declarations.insert(key, entries);
    }

    /// Convenience for the common all-strings case.
    pub fn declare_params(
        &mut self,
        state_name: impl Into<String>,
        handler: impl Into<String>,
        params: &[&str],
    ) {
        let entries = params.iter().map(|p| Value::String(p.to_string())).collect();
        self.declare(state_name, handler, entries);
    }
}

impl RequirementRegistry for DeclarationRegistry {
    fn lookup_required(&self, state_name: &str, handler: &str) -> Option<Vec<Value>> {
        let entries = self
            .declarations
            .get(&(state_name.to_string(), handler.to_string()))?;
        debug!(
            "Retrieved requirement declarations for {}#{}: {:?}",
            state_name, handler, entries
        );
        Some(entries.clone())
    }
}

/// Validate raw declaration entries down to parameter names.
///
/// Anything other than a string is a broken declaration and fails fatally,
/// before any entity is checked.
pub fn parameter_names(handler: &str, entries: &[Value]) -> Result<Vec<String>, ValidationError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::String(name) => Ok(name.clone()),
            other => Err(ValidationError::Declaration {
                handler: handler.to_string(),
                index,
                value: other.clone(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_declared() {
        let mut registry = DeclarationRegistry::new();
        registry.declare_params("MainState", "transferIntent", &["amount", "receiver"]);

        let entries = registry.lookup_required("MainState", "transferIntent").unwrap();
        assert_eq!(entries, vec![json!("amount"), json!("receiver")]);
    }

    #[test]
    fn test_lookup_undeclared() {
        let registry = DeclarationRegistry::new();
        assert!(registry.lookup_required("MainState", "helpIntent").is_none());
    }

    #[test]
    fn test_declare_overwrites() {
        let mut registry = DeclarationRegistry::new();
        registry.declare_params("MainState", "transferIntent", &["amount"]);
        registry.declare_params("MainState", "transferIntent", &["receiver"]);

        let entries = registry.lookup_required("MainState", "transferIntent").unwrap();
        assert_eq!(entries, vec![json!("receiver")]);
    }

    #[test]
    fn test_parameter_names_all_strings() {
        let names = parameter_names("transferIntent", &[json!("amount"), json!("receiver")]).unwrap();
        assert_eq!(names, vec!["amount", "receiver"]);
    }

    #[test]
    fn test_parameter_names_rejects_non_string() {
        let err = parameter_names("transferIntent", &[json!("amount"), json!(42)]).unwrap_err();
        match err {
            ValidationError::Declaration { handler, index, value } => {
                assert_eq!(handler, "transferIntent");
                assert_eq!(index, 1);
                assert_eq!(value, json!(42));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
