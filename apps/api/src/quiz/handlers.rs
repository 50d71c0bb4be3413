//! Axum route handlers for the technical quiz.

use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::quiz::{grade_quiz, public_questions, PublicQuizQuestion, QuizResult};

#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    /// One answer per question, in order. Empty string = timed out.
    pub answers: Vec<String>,
}

/// GET /api/v1/quiz
pub async fn handle_get_quiz() -> Json<Vec<PublicQuizQuestion>> {
    Json(public_questions())
}

/// POST /api/v1/quiz/submit
pub async fn handle_submit_quiz(
    Json(request): Json<SubmitQuizRequest>,
) -> Result<Json<QuizResult>, AppError> {
    let result = grade_quiz(&request.answers)?;
    info!("Quiz graded: {}/{}", result.score, result.total);
    Ok(Json(result))
}
