// HR advisory pipeline: three persona agents run in sequence over one request.
// Implements: category parsing, per-role template selection, role agents, orchestration, run history.
// All model calls go through llm_client::TextGenerator: nothing here talks HTTP to the model.

pub mod agents;
pub mod category;
pub mod handlers;
pub mod history;
pub mod input;
pub mod orchestrator;
pub mod prompts;
pub mod selector;
