// src/core/utterances.rs
use crate::services::config::ValidationsConfig;
use std::collections::HashMap;

/// Intent the prompt state answers missing-entity replies with.
pub const ANSWER_PROMPT_INTENT: &str = "answerPromptIntent";

/// Generates the prompt state's generic answer utterances from the
/// configured entity types: one "{{type}}" template per type, so a bare
/// answer like "ten" or "Alex" matches whatever entity is currently being
/// collected.
#[derive(Debug, Clone, Default)]
pub struct UtteranceTemplateService {
    config: ValidationsConfig,
}

impl UtteranceTemplateService {
    pub fn new(config: ValidationsConfig) -> Self {
        Self { config }
    }

    /// Utterance templates to merge into the given language's training data.
    /// The templates are language-independent placeholders, so every language
    /// receives the same set; ordering follows the entity type names.
    pub fn get_utterances_for(&self, _language: &str) -> HashMap<String, Vec<String>> {
        let templates: Vec<String> = self
            .config
            .entities
            .keys()
            .map(|entity_type| format!("{{{{{}}}}}", entity_type))
            .collect();

        let mut utterances = HashMap::new();
        if !templates.is_empty() {
            utterances.insert(ANSWER_PROMPT_INTENT.to_string(), templates);
        }
        utterances
    }
}
