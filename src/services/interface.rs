// src/services/interface.rs
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Intents every conversational state understands, independent of what the
/// user actually said. This is the full signal set host pipelines dispatch
/// on; the validation core itself only ever emits `Invoke`, which runs a
/// state's entry handler on the next scheduling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenericIntent {
    Invoke,
    Unanswered,
    Help,
    Cancel,
    Stop,
}

/// Position of a hook in the dispatch pipeline. Passed through the hook
/// unchanged; the pipeline uses it to route the continuation result.
/// [`BeforeIntentHook`](crate::core::hook::BeforeIntentHook) is only ever
/// registered at `BeforeIntent`; the other position exists so hosts can key
/// their hook tables off one enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookMode {
    BeforeIntent,
    AfterIntent,
}

/// The slice of a conversational state the validation core needs to see:
/// whether a given intent handler is present on it at all. Dispatching the
/// handler stays with the state machine.
pub trait ConversationState: Send + Sync {
    fn has_handler(&self, handler: &str) -> bool;
}

/// Handle to the conversation state machine, as consumed by this crate.
#[async_trait]
pub trait Transitionable: Send + Sync {
    /// Whether a state with the given name is registered.
    fn state_exists(&self, state_name: &str) -> bool;

    /// Redirect the conversation to the given state; the state's handler for
    /// `intent` runs on the next scheduling step.
    async fn redirect_to(&self, state_name: &str, intent: GenericIntent) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generic_intent_wire_names() {
        // Hosts route on these names; renaming a variant is a breaking change.
        let signals = [
            (GenericIntent::Invoke, "invoke"),
            (GenericIntent::Unanswered, "unanswered"),
            (GenericIntent::Help, "help"),
            (GenericIntent::Cancel, "cancel"),
            (GenericIntent::Stop, "stop"),
        ];
        for (signal, name) in signals {
            assert_eq!(serde_json::to_value(signal).unwrap(), json!(name));
            assert_eq!(
                serde_json::from_value::<GenericIntent>(json!(name)).unwrap(),
                signal
            );
        }
    }
}
