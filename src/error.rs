// src/error.rs
use thiserror::Error;

/// Errors surfaced by the validation core.
///
/// Per-turn conditions (a missing entity) are never reported through this
/// type; they travel through the hook's suspension continuation. Everything
/// here is operator-facing: broken declarations, incomplete wiring, or a
/// failing backend.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required-parameter declaration contains a non-string entry.
    /// Broken handler metadata, not bad user input.
    #[error("invalid requirement declaration for handler '{handler}': entry #{index} ({value}) is not a string")]
    Declaration {
        handler: String,
        index: usize,
        value: serde_json::Value,
    },

    /// The generic prompt state was never registered with the machine.
    #[error("tried to transition to generic prompt state '{0}', but it is not registered with the conversation machine")]
    MissingState(String),

    /// The continuation record could not be written to the session store.
    #[error("failed to persist prompt context")]
    Storage(#[source] anyhow::Error),

    /// The machine rejected the redirect to the prompt state.
    #[error("failed to redirect to prompt state")]
    Transition(#[source] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_declaration_message_names_offending_entry() {
        let err = ValidationError::Declaration {
            handler: "transferIntent".to_string(),
            index: 1,
            value: json!(42),
        };
        assert_eq!(
            err.to_string(),
            "invalid requirement declaration for handler 'transferIntent': entry #1 (42) is not a string"
        );
    }

    #[test]
    fn test_missing_state_message_names_state() {
        let err = ValidationError::MissingState("PromptState".to_string());
        assert!(err.to_string().contains("'PromptState'"));
        assert!(err.to_string().contains("not registered"));
    }

    #[test]
    fn test_storage_keeps_source() {
        use std::error::Error as _;

        let err = ValidationError::Storage(anyhow::anyhow!("backend unavailable"));
        assert_eq!(
            err.source().unwrap().to_string(),
            "backend unavailable"
        );
    }
}
