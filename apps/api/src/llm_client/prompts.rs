// Shared prompt fragments. Each service that calls the LLM keeps its own
// prompts.rs alongside it and appends these where they apply.

/// Appended to prompts whose output is parsed line by line.
pub const PLAIN_LINES_INSTRUCTION: &str = "\
    Respond with one item per line. \
    Do NOT use markdown, numbering, headings, or blank lines. \
    Do NOT include explanations or apologies.";
