use crate::interview::models::Answer;

const PASSING_CATEGORY_SCORE: u32 = 50;
/// Answers shorter than this count as "very brief" for feedback purposes.
const BRIEF_ANSWER_SECS: f64 = 10.0;
const CONFIDENT_THRESHOLD: f64 = 0.7;
const MAX_HESITATIONS_PER_ANSWER: u32 = 2;
const DETAILED_MIN_SECS: f64 = 30.0;
const CONCISE_MAX_SECS: f64 = 120.0;

/// Builds ordered, qualitative feedback for an interview. Every applicable item
/// is included; the STAR-method reminder always closes the list.
pub fn generate_feedback(answers: &[Answer], hr_score: u32, technical_score: u32) -> Vec<String> {
    let mut feedback = Vec::new();

    if hr_score < PASSING_CATEGORY_SCORE || technical_score < PASSING_CATEGORY_SCORE {
        feedback.push("Significant improvement needed in interview responses".to_string());
    }

    let brief_or_empty = answers
        .iter()
        .filter(|a| a.analysis.text.trim().is_empty() || a.analysis.duration < BRIEF_ANSWER_SECS)
        .count();
    if brief_or_empty > 0 {
        feedback.push(format!(
            "{brief_or_empty} question(s) received no response or very brief responses"
        ));
    }

    // Averages are undefined for an empty interview; skip them.
    if !answers.is_empty() {
        let count = answers.len() as f64;

        let avg_confidence = answers.iter().map(|a| a.analysis.confidence).sum::<f64>() / count;
        if avg_confidence < CONFIDENT_THRESHOLD {
            feedback.push("Work on speaking more confidently and clearly".to_string());
        }

        let total_hesitations: u64 = answers.iter().map(|a| u64::from(a.analysis.hesitations)).sum();
        if total_hesitations > u64::from(MAX_HESITATIONS_PER_ANSWER) * answers.len() as u64 {
            feedback.push("Reduce the use of filler words (um, uh) in your responses".to_string());
        }

        let avg_duration = answers.iter().map(|a| a.analysis.duration).sum::<f64>() / count;
        if avg_duration < DETAILED_MIN_SECS {
            feedback
                .push("Provide more detailed responses to showcase your experience".to_string());
        } else if avg_duration > CONCISE_MAX_SECS {
            feedback.push(
                "Try to be more concise in your answers while maintaining key details".to_string(),
            );
        }
    }

    feedback.push("Practice using the STAR method for behavioral questions".to_string());

    feedback
}
