// src/services/mod.rs
pub mod config;
pub mod interface;
pub mod session;
