// Interview Answer Scorer, question sources, and the Interview API.
// scoring.rs and feedback.rs are pure; question generation is the only I/O.

pub mod feedback;
pub mod handlers;
pub mod hesitation;
pub mod models;
pub mod prompts;
pub mod questions;
pub mod scoring;
