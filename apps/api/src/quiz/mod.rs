//! Technical quiz. A fixed multiple-choice bank graded by exact option match.
//!
//! An empty answer means the question timed out and is graded as wrong.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: &'static str,
}

pub const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        question: "What is the primary purpose of version control systems?",
        options: [
            "To track changes in code over time",
            "To make the code run faster",
            "To format code automatically",
            "To compile code into executable files",
        ],
        correct_answer: "To track changes in code over time",
    },
    QuizQuestion {
        question: "Which programming paradigm does React.js primarily follow?",
        options: [
            "Procedural Programming",
            "Object-Oriented Programming",
            "Functional Programming",
            "Declarative Programming",
        ],
        correct_answer: "Declarative Programming",
    },
    QuizQuestion {
        question: "What is the purpose of a REST API?",
        options: [
            "To style web pages",
            "To handle server-client communication",
            "To manage database connections",
            "To compile source code",
        ],
        correct_answer: "To handle server-client communication",
    },
];

/// A question as shown to the candidate, without its answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicQuizQuestion {
    pub index: usize,
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionReview {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub timed_out: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub review: Vec<QuestionReview>,
}

pub fn public_questions() -> Vec<PublicQuizQuestion> {
    QUIZ_QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, q)| PublicQuizQuestion {
            index,
            question: q.question.to_string(),
            options: q.options.iter().map(|o| o.to_string()).collect(),
        })
        .collect()
}

/// Grades answers given in question order. Missing trailing answers count as
/// timed out; extra answers are rejected.
pub fn grade_quiz(answers: &[String]) -> Result<QuizResult, AppError> {
    if answers.len() > QUIZ_QUESTIONS.len() {
        return Err(AppError::Validation(format!(
            "Received {} answers for a {}-question quiz",
            answers.len(),
            QUIZ_QUESTIONS.len()
        )));
    }

    let review: Vec<QuestionReview> = QUIZ_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let user_answer = answers.get(i).map(|a| a.trim()).unwrap_or_default();
            QuestionReview {
                question: q.question.to_string(),
                user_answer: user_answer.to_string(),
                correct_answer: q.correct_answer.to_string(),
                is_correct: user_answer == q.correct_answer,
                timed_out: user_answer.is_empty(),
            }
        })
        .collect();

    Ok(QuizResult {
        score: review.iter().filter(|r| r.is_correct).count(),
        total: QUIZ_QUESTIONS.len(),
        review,
    })
}
