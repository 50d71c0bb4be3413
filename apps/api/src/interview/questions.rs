//! Interview question sources: the built-in bank, the fixed fallback set, and
//! resume-tailored generation through the completion API.
//!
//! `AppState` holds an `Arc<dyn QuestionGenerator>`. Generation never fails from
//! the caller's point of view: any problem reaching or reading the API yields the
//! fallback set, tagged with `source: fallback`.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::interview::models::{Category, InterviewQuestion};
use crate::interview::prompts::{QUESTION_GENERATION_PROMPT_TEMPLATE, QUESTION_GENERATION_SYSTEM};
use crate::llm_client::prompts::PLAIN_LINES_INSTRUCTION;
use crate::llm_client::LlmClient;

/// Resume text beyond this many characters is not sent to the API.
const MAX_RESUME_CHARS: usize = 12_000;

static LIST_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d+[.)]|[-*•])\s*").unwrap());
static CATEGORY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(hr|technical|behavioral)\s*:\s*").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Static question sets
// ────────────────────────────────────────────────────────────────────────────

/// Questions served when generation is unavailable.
pub fn fallback_questions() -> Vec<InterviewQuestion> {
    vec![
        InterviewQuestion::new(
            "What motivated you to apply for this position?",
            Category::Hr,
        ),
        InterviewQuestion::new("Tell me about your professional background.", Category::Hr),
        InterviewQuestion::new("What are your key technical skills?", Category::Technical),
        InterviewQuestion::new(
            "Describe a challenging project you've worked on.",
            Category::Technical,
        ),
    ]
}

/// The general-purpose practice bank, by category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    pub hr: Vec<String>,
    pub technical: Vec<String>,
    pub behavioral: Vec<String>,
}

pub fn question_bank() -> QuestionBank {
    let owned = |qs: &[&str]| qs.iter().map(|q| q.to_string()).collect();
    QuestionBank {
        hr: owned(&[
            "Tell me about yourself and your professional journey.",
            "What motivated you to apply for this position?",
            "How do you handle stress and pressure at work?",
            "Describe a situation where you had to resolve a conflict at work.",
            "Where do you see yourself in 5 years?",
            "What are your salary expectations?",
            "Why should we hire you?",
            "What are your greatest strengths and weaknesses?",
        ]),
        technical: owned(&[
            "Explain your most challenging technical project.",
            "How do you keep yourself updated with the latest technologies?",
            "Describe your experience with agile methodologies.",
            "How do you approach debugging a complex problem?",
            "What's your experience with version control systems?",
            "How do you ensure code quality in your projects?",
            "Describe a time when you had to optimize code performance.",
            "How do you handle technical disagreements in a team?",
        ]),
        behavioral: owned(&[
            "Describe a situation where you had to meet a tight deadline.",
            "How do you prioritize tasks when handling multiple projects?",
            "Tell me about a time you had to learn a new technology quickly.",
        ]),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Parsing
// ────────────────────────────────────────────────────────────────────────────

/// Parses newline-delimited completion output into questions.
///
/// - blank lines and heading lines ending in `:` are skipped
/// - list numbering (`1.`, `2)`, `-`, `*`, `•`) is stripped
/// - a leading `HR:` / `Technical:` / `Behavioral:` marker sets the category;
///   unmarked lines are HR
pub fn parse_generated_questions(raw: &str) -> Vec<InterviewQuestion> {
    raw.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.ends_with(':') {
                return None;
            }
            let line = LIST_PREFIX.replace(line, "");
            let (category, question) = match CATEGORY_MARKER.captures(&line) {
                Some(caps) => (Category::from(&caps[1]), &line[caps[0].len()..]),
                None => (Category::Hr, &line[..]),
            };
            let question = question.trim();
            (!question.is_empty()).then(|| InterviewQuestion::new(question, category))
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Generators
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSource {
    Llm,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedQuestions {
    pub questions: Vec<InterviewQuestion>,
    pub source: QuestionSource,
}

impl GeneratedQuestions {
    pub fn fallback() -> Self {
        Self {
            questions: fallback_questions(),
            source: QuestionSource::Fallback,
        }
    }
}

/// Produces interview questions tailored to a resume. Implementations recover
/// from their own failures; the fallback set is always a valid answer.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, resume_text: &str) -> GeneratedQuestions;
}

/// Always returns the fallback set. Used when generation is disabled.
pub struct StaticQuestionGenerator;

#[async_trait]
impl QuestionGenerator for StaticQuestionGenerator {
    async fn generate(&self, _resume_text: &str) -> GeneratedQuestions {
        GeneratedQuestions::fallback()
    }
}

/// Generates questions through the completion API. With no client configured
/// (missing credential) every call falls back.
pub struct LlmQuestionGenerator {
    llm: Option<LlmClient>,
}

impl LlmQuestionGenerator {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(&self, resume_text: &str) -> GeneratedQuestions {
        let Some(llm) = &self.llm else {
            warn!("OPENAI_API_KEY is not set; serving default interview questions");
            return GeneratedQuestions::fallback();
        };

        let resume_text: String = resume_text.chars().take(MAX_RESUME_CHARS).collect();
        let prompt = QUESTION_GENERATION_PROMPT_TEMPLATE.replace("{resume_text}", &resume_text);
        let system = format!("{QUESTION_GENERATION_SYSTEM} {PLAIN_LINES_INSTRUCTION}");

        match llm.call_text(&prompt, &system).await {
            Ok(raw) => {
                let questions = parse_generated_questions(&raw);
                if questions.is_empty() {
                    warn!("Question generation returned no usable lines; serving defaults");
                    return GeneratedQuestions::fallback();
                }
                info!("Generated {} interview questions", questions.len());
                GeneratedQuestions {
                    questions,
                    source: QuestionSource::Llm,
                }
            }
            Err(e) => {
                warn!("Question generation failed, serving defaults: {e}");
                GeneratedQuestions::fallback()
            }
        }
    }
}
