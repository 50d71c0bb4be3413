pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::interview::handlers as interview;
use crate::quiz::handlers as quiz;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Multipart framing and other form fields on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resume/analyze", post(resume::handle_analyze))
        .route("/api/v1/resume/upload", post(resume::handle_upload))
        // Interview API
        .route(
            "/api/v1/interview/questions",
            post(interview::handle_generate_questions),
        )
        .route("/api/v1/interview/bank", get(interview::handle_question_bank))
        .route("/api/v1/interview/score", post(interview::handle_score))
        // Quiz API
        .route("/api/v1/quiz", get(quiz::handle_get_quiz))
        .route("/api/v1/quiz/submit", post(quiz::handle_submit_quiz))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
