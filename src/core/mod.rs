// src/core/mod.rs
pub mod entities;
pub mod hook;
pub mod prompt;
pub mod requirements;
pub mod utterances;
