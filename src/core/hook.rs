// src/core/hook.rs
use crate::core::entities::EntityDictionary;
use crate::core::prompt::PromptFactory;
use crate::core::requirements::{parameter_names, RequirementRegistry};
use crate::error::ValidationError;
use crate::services::interface::{ConversationState, HookMode, Transitionable};
use crate::services::session::SessionStore;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Runs before every intent handler: if the handler declared required
/// parameters and one of them is missing from the current turn's entities,
/// the call is suspended via a [`Prompt`](crate::core::prompt::Prompt)
/// instead of executed.
///
/// Request-scoped; the pipeline constructs one hook per turn around that
/// turn's entity dictionary and session.
pub struct BeforeIntentHook {
    entities: Arc<EntityDictionary>,
    registry: Arc<dyn RequirementRegistry>,
    prompt_factory: Arc<dyn PromptFactory>,
    session: Arc<dyn SessionStore>,
}

impl BeforeIntentHook {
    pub fn new(
        entities: Arc<EntityDictionary>,
        registry: Arc<dyn RequirementRegistry>,
        prompt_factory: Arc<dyn PromptFactory>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            entities,
            registry,
            prompt_factory,
            session,
        }
    }

    /// Decide whether the handler may run.
    ///
    /// Exactly one of the two continuations fires per call: `on_proceed` when
    /// every declared parameter is present (or nothing was declared), or
    /// `on_suspend` with the first missing parameter in declared order.
    ///
    /// When suspending, the continuation record is persisted and the redirect
    /// issued before `on_suspend` fires. If persistence or the redirect
    /// fails, `on_suspend` still fires so the pipeline sees a consistent
    /// decision, and the failure is then returned to the caller rather than
    /// swallowed.
    ///
    /// `mode` and `args` belong to the dispatch pipeline and are passed
    /// through untouched.
    #[allow(clippy::too_many_arguments)]
    pub async fn execute<P, S>(
        &self,
        on_proceed: P,
        on_suspend: S,
        _mode: HookMode,
        state: &dyn ConversationState,
        state_name: &str,
        intent: &str,
        machine: Arc<dyn Transitionable>,
        args: &[Value],
    ) -> Result<(), ValidationError>
    where
        P: FnOnce(),
        S: FnOnce(&str),
    {
        let needed = self.needed_parameters(state, state_name, intent)?;

        let missing = needed.iter().find(|p| !self.entities.contains(p));
        let Some(missing) = missing.map(String::as_str) else {
            // All declared parameters present (or none declared): continue
            // processing normally.
            on_proceed();
            return Ok(());
        };

        debug!(
            "Missing entity '{}' in entity store: {:?}",
            missing,
            self.entities.store()
        );

        let prompt =
            self.prompt_factory
                .build(intent, state_name, machine, self.session.clone(), args);
        let result = prompt.prompt(missing).await;

        // Suspension is signaled on both outcomes; a persistence or
        // transition failure must not leave the pipeline without a decision,
        // but it must not be swallowed either.
        on_suspend(missing);
        result
    }

    /// Requirement list for the targeted handler. A handler that does not
    /// exist on the state, or has no declaration, simply needs nothing;
    /// downstream dispatch deals with missing methods.
    fn needed_parameters(
        &self,
        state: &dyn ConversationState,
        state_name: &str,
        intent: &str,
    ) -> Result<Vec<String>, ValidationError> {
        if !state.has_handler(intent) {
            return Ok(Vec::new());
        }

        match self.registry.lookup_required(state_name, intent) {
            Some(entries) => parameter_names(intent, &entries),
            None => Ok(Vec::new()),
        }
    }
}
