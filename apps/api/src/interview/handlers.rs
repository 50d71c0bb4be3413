//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::interview::models::{Answer, AnswerAnalysis, Category, InterviewReport};
use crate::interview::questions::{question_bank, GeneratedQuestions, QuestionBank};
use crate::interview::scoring::{score_answers, score_answers_with, ScoringFormula};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub resume_text: String,
}

/// One completed answer as submitted by the question-flow UI.
/// `hesitations` is omitted for typed answers and counted from the text.
#[derive(Debug, Deserialize)]
pub struct SubmittedAnswer {
    pub question: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub text: String,
    pub duration: f64,
    pub confidence: f64,
    pub hesitations: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<SubmittedAnswer>,
    #[serde(default)]
    pub formula: ScoringFormula,
}

impl SubmittedAnswer {
    fn into_answer(self, index: usize) -> Result<Answer, AppError> {
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(AppError::Validation(format!(
                "answers[{index}].confidence must be between 0 and 1"
            )));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(AppError::Validation(format!(
                "answers[{index}].duration must be a non-negative number of seconds"
            )));
        }

        let analysis = match self.hesitations {
            Some(hesitations) => AnswerAnalysis {
                text: self.text,
                hesitations,
                duration: self.duration,
                confidence: self.confidence,
            },
            None => AnswerAnalysis::from_transcript(self.text, self.duration, self.confidence),
        };

        Ok(Answer {
            question: self.question,
            category: self.category,
            analysis,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/questions
///
/// Generates resume-tailored questions, or the default set when generation
/// is unavailable.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GeneratedQuestions>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let generated = state
        .question_generator
        .generate(&request.resume_text)
        .await;
    Ok(Json(generated))
}

/// GET /api/v1/interview/bank
pub async fn handle_question_bank() -> Json<QuestionBank> {
    Json(question_bank())
}

/// POST /api/v1/interview/score
///
/// Scores a completed interview and returns per-category scores with feedback.
pub async fn handle_score(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<InterviewReport>, AppError> {
    let answers = request
        .answers
        .into_iter()
        .enumerate()
        .map(|(index, answer)| answer.into_answer(index))
        .collect::<Result<Vec<_>, _>>()?;

    let report = match request.formula {
        ScoringFormula::Standard => score_answers(&answers),
        legacy => score_answers_with(&answers, legacy),
    };
    info!(
        "Interview scored: {} answers, hr={} technical={} overall={}",
        answers.len(),
        report.hr_score,
        report.technical_score,
        report.overall_score
    );

    Ok(Json(report))
}
