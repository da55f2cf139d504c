// src/lib.rs

// ============================================================================
// Modules
// ============================================================================

pub mod core;
pub mod error;
pub mod services;

// ============================================================================
// Public exports
// ============================================================================

pub use core::entities::EntityDictionary;
pub use core::hook::BeforeIntentHook;
pub use core::prompt::{ContinuationRecord, DefaultPromptFactory, Prompt, PromptFactory};
pub use core::requirements::{DeclarationRegistry, RequirementRegistry};
pub use core::utterances::UtteranceTemplateService;
pub use error::ValidationError;
pub use services::config::ValidationsConfig;
pub use services::interface::{ConversationState, GenericIntent, HookMode, Transitionable};
pub use services::session::{InMemorySessionStore, SessionStore};
