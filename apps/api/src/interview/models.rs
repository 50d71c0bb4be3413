use std::fmt;

use serde::{Deserialize, Serialize};

use crate::interview::hesitation::count_hesitations;

/// Interview question category. Open-ended: unknown tags are kept as `Other`
/// and scored in their own bucket rather than being folded into a known one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Hr,
    Technical,
    Behavioral,
    Other(String),
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "hr" => Category::Hr,
            "technical" => Category::Technical,
            "behavioral" | "behavioural" => Category::Behavioral,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Category::from(tag.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Hr => f.write_str("hr"),
            Category::Technical => f.write_str("technical"),
            Category::Behavioral => f.write_str("behavioral"),
            Category::Other(tag) => f.write_str(tag),
        }
    }
}

/// Signals captured for one answer, typed or transcribed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerAnalysis {
    pub text: String,
    pub hesitations: u32,
    /// Seconds.
    pub duration: f64,
    /// 0.0 – 1.0
    pub confidence: f64,
}

impl AnswerAnalysis {
    /// Builds an analysis for an answer without a hesitation count, counting
    /// filler words in the text instead.
    pub fn from_transcript(text: impl Into<String>, duration: f64, confidence: f64) -> Self {
        let text = text.into();
        let hesitations = count_hesitations(&text);
        Self {
            text,
            hesitations,
            duration,
            confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub analysis: AnswerAnalysis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    #[serde(rename = "type")]
    pub category: Category,
}

impl InterviewQuestion {
    pub fn new(question: impl Into<String>, category: Category) -> Self {
        Self {
            question: question.into(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    /// 0 – 100, mean of the category's per-answer scores.
    pub score: u32,
    pub answers: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewReport {
    pub hr_score: u32,
    pub technical_score: u32,
    /// round((hr_score + technical_score) / 2)
    pub overall_score: u32,
    /// Every category present in the answers, in `Category` order.
    pub category_scores: Vec<CategoryScore>,
    pub feedback: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_known_tags() {
        for tag in ["hr", "technical", "behavioral"] {
            let category: Category = serde_json::from_str(&format!("\"{tag}\"")).unwrap();
            assert_eq!(serde_json::to_string(&category).unwrap(), format!("\"{tag}\""));
        }
    }

    #[test]
    fn test_category_is_case_insensitive() {
        assert_eq!(Category::from("  Technical "), Category::Technical);
        assert_eq!(Category::from("HR"), Category::Hr);
        assert_eq!(Category::from("Behavioural"), Category::Behavioral);
    }

    #[test]
    fn test_unknown_category_is_preserved() {
        let category = Category::from("System Design");
        assert_eq!(category, Category::Other("system design".to_string()));
        assert_eq!(category.to_string(), "system design");
    }

    #[test]
    fn test_answer_uses_type_field() {
        let json = r#"{
            "question": "Describe the event loop in JavaScript.",
            "type": "technical",
            "analysis": {"text": "It processes a queue", "hesitations": 1, "duration": 42.5, "confidence": 0.82}
        }"#;
        let answer: Answer = serde_json::from_str(json).unwrap();
        assert_eq!(answer.category, Category::Technical);
        assert_eq!(answer.analysis.hesitations, 1);
        assert!((answer.analysis.duration - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_transcript_counts_fillers() {
        let analysis = AnswerAnalysis::from_transcript("Um, I think, uh, yes", 12.0, 0.9);
        assert_eq!(analysis.hesitations, 2);
    }
}
