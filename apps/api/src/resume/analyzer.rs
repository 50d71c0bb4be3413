//! Resume Content Analyzer: decides whether extracted text looks like a resume and
//! computes a 0–100 ATS compatibility score with diagnostics.
//!
//! Score composition:
//! - sections: 10 points each for contact, education, experience, skills (40)
//! - keywords: matched / total × 30, kept fractional until the final rounding (30)
//! - formatting: 15 points each for proper structure and consistent formatting (30)
//!
//! Text that matches no resume indicator short-circuits to a zero score.

use serde::{Deserialize, Serialize};

use crate::resume::patterns::{
    BULLET, CAPITALIZED_COMMA, CONTACT, EDUCATION, EXPERIENCE, KEYWORDS, MONTH,
    RESUME_INDICATORS, SECTION_LABEL, SKILLS, YEAR,
};

const SECTION_POINTS: f64 = 10.0;
const KEYWORD_POINTS: f64 = 30.0;
const FORMATTING_POINTS: f64 = 15.0;
/// `has_proper_structure` needs strictly more lines than this.
const MIN_STRUCTURED_LINES: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFlags {
    pub has_contact: bool,
    pub has_education: bool,
    pub has_experience: bool,
    pub has_skills: bool,
}

impl SectionFlags {
    fn present_count(&self) -> usize {
        [
            self.has_contact,
            self.has_education,
            self.has_experience,
            self.has_skills,
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCoverage {
    pub total: usize,
    pub matched: usize,
}

impl KeywordCoverage {
    fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched as f64 / self.total as f64
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingFlags {
    pub has_proper_structure: bool,
    pub has_consistent_formatting: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub missing_fields: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Output of [`analyze`]. Built once per upload and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub is_resume: bool,
    /// 0 – 100
    pub score: u32,
    pub sections: SectionFlags,
    pub keywords: KeywordCoverage,
    pub formatting: FormattingFlags,
    pub details: AnalysisDetails,
}

/// Analyzes extracted document text. Pure and total: any input, including the
/// empty string, produces an analysis.
pub fn analyze(text: &str) -> ResumeAnalysis {
    if !looks_like_resume(text) {
        return not_a_resume();
    }

    let sections = detect_sections(text);
    let keywords = count_keywords(text);
    let formatting = check_formatting(text);

    let raw = sections.present_count() as f64 * SECTION_POINTS
        + keywords.ratio() * KEYWORD_POINTS
        + formatting_count(&formatting) as f64 * FORMATTING_POINTS;
    let score = raw.round().clamp(0.0, 100.0) as u32;

    let details = build_details(&sections, &keywords, &formatting);

    ResumeAnalysis {
        is_resume: true,
        score,
        sections,
        keywords,
        formatting,
        details,
    }
}

/// Any single indicator is enough; this is an OR gate, not a vote.
pub fn looks_like_resume(text: &str) -> bool {
    RESUME_INDICATORS.iter().any(|re| re.is_match(text))
}

fn not_a_resume() -> ResumeAnalysis {
    ResumeAnalysis {
        is_resume: false,
        score: 0,
        sections: SectionFlags::default(),
        keywords: KeywordCoverage {
            total: KEYWORDS.len(),
            matched: 0,
        },
        formatting: FormattingFlags::default(),
        details: AnalysisDetails {
            missing_fields: vec![],
            suggestions: vec![
                "This document does not appear to be a resume. Upload a resume that includes \
                 sections such as Experience, Education, and Skills."
                    .to_string(),
            ],
        },
    }
}

fn detect_sections(text: &str) -> SectionFlags {
    SectionFlags {
        has_contact: CONTACT.is_match(text),
        has_education: EDUCATION.is_match(text),
        has_experience: EXPERIENCE.is_match(text),
        has_skills: SKILLS.is_match(text),
    }
}

fn count_keywords(text: &str) -> KeywordCoverage {
    let lower = text.to_lowercase();
    KeywordCoverage {
        total: KEYWORDS.len(),
        matched: KEYWORDS.iter().filter(|kw| lower.contains(*kw)).count(),
    }
}

fn check_formatting(text: &str) -> FormattingFlags {
    let line_count = text.split('\n').count();
    FormattingFlags {
        has_proper_structure: text.contains('\n')
            && SECTION_LABEL.is_match(text)
            && line_count > MIN_STRUCTURED_LINES
            && YEAR.is_match(text),
        has_consistent_formatting: BULLET.is_match(text)
            && MONTH.is_match(text)
            && CAPITALIZED_COMMA.is_match(text),
    }
}

fn formatting_count(formatting: &FormattingFlags) -> usize {
    usize::from(formatting.has_proper_structure) + usize::from(formatting.has_consistent_formatting)
}

fn build_details(
    sections: &SectionFlags,
    keywords: &KeywordCoverage,
    formatting: &FormattingFlags,
) -> AnalysisDetails {
    let mut missing_fields = Vec::new();
    let mut suggestions = Vec::new();

    let section_advice = [
        (
            sections.has_contact,
            "Contact Information",
            "Add your email, phone number, and LinkedIn profile at the top of the resume",
        ),
        (
            sections.has_education,
            "Education",
            "Include an Education section listing your degree, institution, and graduation year",
        ),
        (
            sections.has_experience,
            "Work Experience",
            "Add a Work Experience section with job titles, companies, dates, and responsibilities",
        ),
        (
            sections.has_skills,
            "Skills",
            "List your technical skills, tools, and programming languages in a dedicated Skills section",
        ),
    ];

    for (present, field, suggestion) in section_advice {
        if !present {
            missing_fields.push(field.to_string());
            suggestions.push(suggestion.to_string());
        }
    }

    if keywords.ratio() < 0.5 {
        suggestions.push(format!(
            "Only {} of {} common resume keywords found. Describe your impact with terms like \
             leadership, optimization, and collaboration.",
            keywords.matched, keywords.total
        ));
    }

    if !formatting.has_proper_structure {
        suggestions.push(
            "Use clear section headings (e.g. \"Experience:\") on separate lines and include dates for each role"
                .to_string(),
        );
    }
    if !formatting.has_consistent_formatting {
        suggestions.push(
            "Use bullet points for achievements and a consistent date format such as \"Jan 2020 - Mar 2022\""
                .to_string(),
        );
    }

    AnalysisDetails {
        missing_fields,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESUME: &str = "John Smith - Resume
Email: john.smith@example.com | Phone: 555-0100 | Location: Austin, Texas
Summary: Senior engineer with leadership and project management experience.
Experience:
• Software Engineer, Acme Corp (Jan 2019 - Present)
- Led team development of a data platform, improved results by 40%
- Drove optimization and implementation of a new design strategy
Education:
• B.Sc. Computer Science, State University, May 2016
Skills:
- Rust, Python, programming languages, communication, collaboration
- Research, analysis, innovation, problem solving, technical achievement";

    const STRIPPED_RESUME: &str = "john smith
software engineer at acme corp building a data platform with a small team";

    #[test]
    fn test_empty_text_is_not_a_resume() {
        let analysis = analyze("");
        assert!(!analysis.is_resume);
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.sections, SectionFlags::default());
        assert_eq!(analysis.keywords.matched, 0);
    }

    #[test]
    fn test_non_resume_text_scores_zero() {
        let analysis = analyze("Grocery list:\n- eggs\n- milk\nPick up on Jan 3, 2024");
        assert!(!analysis.is_resume);
        assert_eq!(analysis.score, 0);
        assert!(!analysis.formatting.has_consistent_formatting);
        assert_eq!(analysis.details.suggestions.len(), 1);
    }

    #[test]
    fn test_full_resume_scores_maximum() {
        let analysis = analyze(FULL_RESUME);
        assert!(analysis.is_resume);
        assert_eq!(analysis.sections.present_count(), 4);
        assert_eq!(analysis.keywords.matched, analysis.keywords.total);
        assert!(analysis.formatting.has_proper_structure);
        assert!(analysis.formatting.has_consistent_formatting);
        assert_eq!(analysis.score, 100);
        assert!(analysis.details.missing_fields.is_empty());
        assert!(analysis.details.suggestions.is_empty());
    }

    #[test]
    fn test_markers_raise_score_materially() {
        let full = analyze(FULL_RESUME).score;
        let stripped = analyze(STRIPPED_RESUME).score;
        assert!(full >= 80, "full resume scored {full}");
        assert!(full > stripped + 40, "full={full} stripped={stripped}");
    }

    #[test]
    fn test_gate_passes_with_nothing_else_scores_zero() {
        let analysis = analyze("Curriculum Vitae");
        assert!(analysis.is_resume);
        assert_eq!(analysis.score, 0);
        assert_eq!(
            analysis.details.missing_fields,
            vec!["Contact Information", "Education", "Work Experience", "Skills"]
        );
    }

    #[test]
    fn test_single_indicator_is_enough() {
        let analysis = analyze("My accomplishments are listed below");
        assert!(analysis.is_resume);
    }

    #[test]
    fn test_keyword_points_are_fractional_until_final_round() {
        // "Resume" opens the gate; "team" and "design" match 2/20 keywords = 3 points.
        // "skills" matches the skills section = 10 points.
        let analysis = analyze("Resume: team design skills");
        assert_eq!(analysis.keywords.matched, 2);
        assert!(analysis.sections.has_skills);
        assert!(!analysis.sections.has_contact);
        assert_eq!(analysis.score, 13);
    }

    #[test]
    fn test_structure_requires_more_than_ten_lines() {
        let ten_lines = "Resume\nExperience: 2020\n\n\n\n\n\n\n\n";
        assert_eq!(ten_lines.split('\n').count(), 10);
        assert!(!analyze(ten_lines).formatting.has_proper_structure);

        let eleven_lines = format!("{ten_lines}\n");
        assert!(analyze(&eleven_lines).formatting.has_proper_structure);
    }

    #[test]
    fn test_structure_requires_a_year() {
        let text = "Resume\nExperience: lots\n\n\n\n\n\n\n\n\n\n";
        assert!(!analyze(text).formatting.has_proper_structure);
    }

    #[test]
    fn test_missing_section_produces_field_and_suggestion() {
        let analysis = analyze("Resume\nEmail: a@b.io\nExperience at Initech\nSkills: Rust");
        assert!(!analysis.sections.has_education);
        assert_eq!(analysis.details.missing_fields, vec!["Education"]);
        assert!(analysis
            .details
            .suggestions
            .iter()
            .any(|s| s.contains("Education section")));
    }

    #[test]
    fn test_score_and_keywords_always_bounded() {
        let inputs = [
            "",
            "cv",
            FULL_RESUME,
            STRIPPED_RESUME,
            "RESUME RESUME RESUME experience experience",
            "•••••\n\n\n\n\n\n\n\n\n\n\nResume: 1999, May, Texas,",
        ];
        for input in inputs {
            let analysis = analyze(input);
            assert!(analysis.score <= 100);
            assert!(analysis.keywords.matched <= analysis.keywords.total);
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        assert_eq!(analyze(FULL_RESUME), analyze(FULL_RESUME));
        assert_eq!(analyze(STRIPPED_RESUME), analyze(STRIPPED_RESUME));
    }
}
