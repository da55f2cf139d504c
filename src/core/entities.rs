// src/core/entities.rs
use serde_json::Value;
use std::collections::HashMap;

/// Entities extracted from the current turn's input.
///
/// Owned by the surrounding framework and rebuilt per request; this crate
/// only reads it. Values are kept as raw JSON since extraction backends
/// disagree on typing.
#[derive(Debug, Clone, Default)]
pub struct EntityDictionary {
    store: HashMap<String, Value>,
}

impl EntityDictionary {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    /// Record an extracted entity, replacing any earlier value for the name.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    /// Whether the current turn supplied a value for the given parameter.
    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    /// Full view of the turn's entities, for diagnostics.
    pub fn store(&self) -> &HashMap<String, Value> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contains_and_get() {
        let mut entities = EntityDictionary::new();
        entities.set("amount", json!("10"));

        assert!(entities.contains("amount"));
        assert!(!entities.contains("receiver"));
        assert_eq!(entities.get("amount"), Some(&json!("10")));
        assert_eq!(entities.get("receiver"), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut entities = EntityDictionary::new();
        entities.set("amount", json!("10"));
        entities.set("amount", json!("20"));

        assert_eq!(entities.get("amount"), Some(&json!("20")));
        assert_eq!(entities.store().len(), 1);
    }
}
