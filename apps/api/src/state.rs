use std::sync::Arc;

use crate::config::Config;
use crate::interview::questions::QuestionGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing here is mutated after startup; every request is scored independently.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable question source. Default: LlmQuestionGenerator, which falls back
    /// to the fixed question set whenever the completion API is unavailable.
    pub question_generator: Arc<dyn QuestionGenerator>,
}
