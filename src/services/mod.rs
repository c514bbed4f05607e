// src/services/mod.rs
pub mod chat_session;
pub mod ollama;
