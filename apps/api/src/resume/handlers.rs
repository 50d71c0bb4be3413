//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::resume::analyzer::{analyze, ResumeAnalysis};
use crate::resume::extract::{detect_kind, extract_text};
use crate::resume::rating::{rate, AtsRating};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: ResumeAnalysis,
    pub rating: AtsRating,
    /// Whether the score clears the configured quiz threshold.
    pub quiz_unlocked: bool,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_name: Option<String>,
    pub extracted_chars: usize,
    #[serde(flatten)]
    pub result: AnalyzeResponse,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/analyze
///
/// Scores already-extracted resume text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    Ok(Json(build_response(&request.text, state.config.quiz_unlock_score)))
}

/// POST /api/v1/resume/upload
///
/// Accepts a multipart upload with a single `file` field (PDF or plain text),
/// extracts its text, and scores it. Undecodable documents are rejected.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(multipart_error)?;

        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        if bytes.len() > state.config.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "Uploaded file is {} bytes; the limit is {} bytes",
                bytes.len(),
                state.config.max_upload_bytes
            )));
        }

        let kind = detect_kind(&bytes, file_name.as_deref(), content_type.as_deref())?;
        let text = tokio::task::spawn_blocking(move || extract_text(&bytes, kind))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Text extraction task failed: {e}")))??;

        info!(
            "Extracted {} chars from {:?} ({:?})",
            text.chars().count(),
            file_name,
            kind
        );

        return Ok(Json(UploadResponse {
            file_name,
            extracted_chars: text.chars().count(),
            result: build_response(&text, state.config.quiz_unlock_score),
        }));
    }

    Err(AppError::Validation(format!(
        "Multipart body must contain a '{FILE_FIELD}' field"
    )))
}

fn build_response(text: &str, quiz_unlock_score: u32) -> AnalyzeResponse {
    let analysis = analyze(text);
    info!(
        "Resume analyzed: is_resume={} score={}/100",
        analysis.is_resume, analysis.score
    );
    let rating = rate(analysis.score);
    let quiz_unlocked = analysis.score >= quiz_unlock_score;
    AnalyzeResponse {
        analysis,
        rating,
        quiz_unlocked,
    }
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_unlocked_at_threshold() {
        let text = "Resume\nSkills: Rust\nEducation: State University\nExperience at Initech";
        let score = analyze(text).score;
        assert!(build_response(text, score).quiz_unlocked);
        assert!(!build_response(text, score + 1).quiz_unlocked);
    }

    #[test]
    fn test_non_resume_never_unlocks_nonzero_threshold() {
        let response = build_response("hello world", 40);
        assert!(!response.analysis.is_resume);
        assert!(!response.quiz_unlocked);
        assert_eq!(response.rating.band, crate::resume::rating::AtsBand::Poor);
    }
}
