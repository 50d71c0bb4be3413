// Prompt constants for interview question generation.
// Output is parsed line by line by `questions::parse_generated_questions`.

pub const QUESTION_GENERATION_SYSTEM: &str = "You are an interview question generator. \
    Generate relevant interview questions based on the resume content. \
    Focus on both technical skills and behavioral aspects.";

/// Replace `{resume_text}` before sending.
pub const QUESTION_GENERATION_PROMPT_TEMPLATE: &str = r#"Generate 4 interview questions (2 HR and 2 technical) based on this resume content.

Prefix every HR question with "HR:" and every technical question with "Technical:".
Example:
HR: What drew you from consulting into product engineering?
Technical: How did you keep p99 latency under 50ms in the payments service?

Resume content:
{resume_text}"#;
