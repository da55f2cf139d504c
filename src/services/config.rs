// src/services/config.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_prompt_state() -> String {
    "PromptState".to_string()
}

fn default_context_key() -> String {
    "entities:currentPrompt".to_string()
}

/// Deployment-level settings for the validation component.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ValidationsConfig {
    /// Name of the generic prompt state the machine is redirected to when a
    /// required entity is missing. The host application must register a state
    /// under this name.
    #[serde(default = "default_prompt_state")]
    pub prompt_state: String,

    /// Session key holding the pending continuation record. One slot per
    /// session; a later suspension overwrites an earlier one.
    #[serde(default = "default_context_key")]
    pub context_key: String,

    /// Entity type -> parameter names, used to generate the prompt state's
    /// generic answer utterances ("{{number}}", "{{givenName}}", ...).
    #[serde(default)]
    pub entities: BTreeMap<String, Vec<String>>,
}

impl Default for ValidationsConfig {
    fn default() -> Self {
        Self {
            prompt_state: default_prompt_state(),
            context_key: default_context_key(),
            entities: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidationsConfig::default();
        assert_eq!(config.prompt_state, "PromptState");
        assert_eq!(config.context_key, "entities:currentPrompt");
        assert!(config.entities.is_empty());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ValidationsConfig =
            serde_json::from_str(r#"{ "prompt_state": "CollectState" }"#).unwrap();
        assert_eq!(config.prompt_state, "CollectState");
        assert_eq!(config.context_key, "entities:currentPrompt");
    }
}
