// src/core/prompt.rs
use crate::error::ValidationError;
use crate::services::config::ValidationsConfig;
use crate::services::interface::{GenericIntent, Transitionable};
use crate::services::session::SessionStore;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Everything the prompt state needs to resume the suspended call: which
/// handler was about to run, which state owns it, and which entity is still
/// missing. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuationRecord {
    pub intent: String,
    pub state: String,
    pub needed_entity: String,
}

impl ContinuationRecord {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a record previously written by [`Prompt::prompt`]. Used by
    /// the prompt state when it picks the suspension back up.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// One-shot suspension of the current turn: persists a [`ContinuationRecord`]
/// under the session's prompt slot, then redirects the machine to the generic
/// prompt state. Built per intercepted call by a [`PromptFactory`].
pub struct Prompt {
    machine: Arc<dyn Transitionable>,
    session: Arc<dyn SessionStore>,
    intent: String,
    state_name: String,
    prompt_state: String,
    context_key: String,
}

impl Prompt {
    /// Suspend the current turn to collect `entity`.
    ///
    /// The context write strictly precedes the redirect; if the write fails
    /// the redirect is not attempted, so the machine never sits in the prompt
    /// state without resumption data behind it.
    pub async fn prompt(&self, entity: &str) -> Result<(), ValidationError> {
        self.save_to_context(entity).await?;
        self.switch_state_for_retrieval().await
    }

    /// Write the continuation record into the session's prompt slot,
    /// overwriting any prior pending prompt.
    async fn save_to_context(&self, entity: &str) -> Result<(), ValidationError> {
        let record = ContinuationRecord {
            intent: self.intent.clone(),
            state: self.state_name.clone(),
            needed_entity: entity.to_string(),
        };
        let serialized = record.to_json().map_err(ValidationError::Storage)?;

        debug!(
            "Saving prompt context for '{}' to session key '{}'",
            entity, self.context_key
        );
        self.session
            .set(&self.context_key, &serialized)
            .await
            .map_err(ValidationError::Storage)
    }

    /// Redirect to the generic prompt state so it can retrieve the entity on
    /// the next scheduling step.
    async fn switch_state_for_retrieval(&self) -> Result<(), ValidationError> {
        if !self.machine.state_exists(&self.prompt_state) {
            return Err(ValidationError::MissingState(self.prompt_state.clone()));
        }
        self.machine
            .redirect_to(&self.prompt_state, GenericIntent::Invoke)
            .await
            .map_err(ValidationError::Transition)
    }
}

/// Binds a [`Prompt`] to the call currently being intercepted. Pure
/// construction; nothing here touches the session or the machine.
pub trait PromptFactory: Send + Sync {
    fn build(
        &self,
        intent: &str,
        state_name: &str,
        machine: Arc<dyn Transitionable>,
        session: Arc<dyn SessionStore>,
        args: &[Value],
    ) -> Prompt;
}

/// Factory using the deployment's [`ValidationsConfig`] for the prompt state
/// name and the session slot key.
#[derive(Debug, Clone, Default)]
pub struct DefaultPromptFactory {
    config: ValidationsConfig,
}

impl DefaultPromptFactory {
    pub fn new(config: ValidationsConfig) -> Self {
        Self { config }
    }
}

impl PromptFactory for DefaultPromptFactory {
    fn build(
        &self,
        intent: &str,
        state_name: &str,
        machine: Arc<dyn Transitionable>,
        session: Arc<dyn SessionStore>,
        _args: &[Value],
    ) -> Prompt {
        Prompt {
            machine,
            session,
            intent: intent.to_string(),
            state_name: state_name.to_string(),
            prompt_state: self.config.prompt_state.clone(),
            context_key: self.config.context_key.clone(),
        }
    }
}
