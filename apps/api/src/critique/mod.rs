// Résumé roasting: prompt building, reply parsing, demo fallback and the HTTP handlers.
// All model calls go through llm_client::CompletionProvider.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod randomness;
pub mod service;
