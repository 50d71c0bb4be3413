//! Interview Answer Scorer.
//!
//! Per-answer score (standard formula):
//! - confidence × 40, rounded (0 – 40)
//! - duration: 30 inside 30–120 s; (d / 30) × 30 below; (120 / d) × 30 above, rounded (0 – 30)
//! - hesitation penalty: min(hesitations × 10, 30)
//! - clamped to 0 – 100, and forced to 0 for blank text or a recording under 5 s
//!
//! Category scores are the rounded mean of their answers; a category with no
//! answers scores 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::interview::feedback::generate_feedback;
use crate::interview::models::{Answer, AnswerAnalysis, Category, CategoryScore, InterviewReport};

const CONFIDENCE_POINTS: f64 = 40.0;
const DURATION_POINTS: f64 = 30.0;
const MAX_HESITATION_PENALTY: u32 = 30;

const OPTIMAL_MIN_SECS: f64 = 30.0;
const OPTIMAL_MAX_SECS: f64 = 120.0;
/// Recordings shorter than this are treated as unanswered.
const NO_ANSWER_SECS: f64 = 5.0;

/// Which weight set to score with. `Legacy` reproduces the earlier fixtures:
/// penalty 5 per hesitation, and a flat 30 / 15 duration split at 10–120 s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFormula {
    #[default]
    Standard,
    Legacy,
}

/// Scores a single answer on a 0 – 100 scale.
pub fn score_answer(analysis: &AnswerAnalysis, formula: ScoringFormula) -> u32 {
    match formula {
        ScoringFormula::Standard => standard_score(analysis),
        ScoringFormula::Legacy => legacy_score(analysis),
    }
}

fn standard_score(analysis: &AnswerAnalysis) -> u32 {
    if analysis.text.trim().is_empty() || analysis.duration < NO_ANSWER_SECS {
        return 0;
    }

    let confidence = (analysis.confidence * CONFIDENCE_POINTS).round();
    let duration = duration_points(analysis.duration);
    let penalty = hesitation_penalty(analysis.hesitations, 10);

    clamp_score(confidence + duration - penalty)
}

fn legacy_score(analysis: &AnswerAnalysis) -> u32 {
    let confidence = (analysis.confidence * CONFIDENCE_POINTS).round();
    let duration = if analysis.duration > 10.0 && analysis.duration < OPTIMAL_MAX_SECS {
        DURATION_POINTS
    } else {
        15.0
    };
    let penalty = hesitation_penalty(analysis.hesitations, 5);

    clamp_score(confidence + duration - penalty)
}

fn duration_points(duration: f64) -> f64 {
    if (OPTIMAL_MIN_SECS..=OPTIMAL_MAX_SECS).contains(&duration) {
        DURATION_POINTS
    } else if duration > 0.0 && duration < OPTIMAL_MIN_SECS {
        (duration / OPTIMAL_MIN_SECS * DURATION_POINTS).round()
    } else if duration > OPTIMAL_MAX_SECS {
        (OPTIMAL_MAX_SECS / duration * DURATION_POINTS).round()
    } else {
        0.0
    }
}

fn hesitation_penalty(hesitations: u32, per_hesitation: u32) -> f64 {
    hesitations
        .saturating_mul(per_hesitation)
        .min(MAX_HESITATION_PENALTY) as f64
}

/// NaN inputs collapse to 0.
fn clamp_score(raw: f64) -> u32 {
    raw.clamp(0.0, 100.0) as u32
}

/// Scores a full interview with the standard formula.
pub fn score_answers(answers: &[Answer]) -> InterviewReport {
    score_answers_with(answers, ScoringFormula::Standard)
}

pub fn score_answers_with(answers: &[Answer], formula: ScoringFormula) -> InterviewReport {
    let mut totals: BTreeMap<&Category, (u32, usize)> = BTreeMap::new();

    for answer in answers {
        let score = score_answer(&answer.analysis, formula);
        let entry = totals.entry(&answer.category).or_insert((0, 0));
        entry.0 += score;
        entry.1 += 1;
    }

    let category_scores: Vec<CategoryScore> = totals
        .iter()
        .map(|(category, (sum, count))| CategoryScore {
            category: (*category).clone(),
            score: mean(*sum, *count),
            answers: *count,
        })
        .collect();

    let score_for = |wanted: &Category| {
        category_scores
            .iter()
            .find(|c| &c.category == wanted)
            .map(|c| c.score)
            .unwrap_or(0)
    };
    let hr_score = score_for(&Category::Hr);
    let technical_score = score_for(&Category::Technical);
    let overall_score = ((hr_score + technical_score) as f64 / 2.0).round() as u32;

    let feedback = generate_feedback(answers, hr_score, technical_score);

    InterviewReport {
        hr_score,
        technical_score,
        overall_score,
        category_scores,
        feedback,
    }
}

/// Rounded mean with the divisor floored at 1.
fn mean(sum: u32, count: usize) -> u32 {
    let divisor = count.max(1) as f64;
    (sum as f64 / divisor).round().min(100.0) as u32
}
