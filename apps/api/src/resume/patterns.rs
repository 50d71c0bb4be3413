//! Compiled patterns behind the resume heuristics.
//!
//! Everything here is case-insensitive except the formatting patterns that look
//! for capitalised labels, which depend on case.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    // Patterns are compile-time literals covered by the tests below.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid resume pattern {pattern:?}: {e}"))
}

/// Resume-likeness gate: any single match admits the text.
pub static RESUME_INDICATORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(resume|résumé|cv|curriculum\s+vitae)\b",
        r"(?i)\b(work|professional)\s+experience\b",
        r"(?i)\b(education|qualifications?)\b",
        r"(?i)\b(skills|expertise|competencies)\b",
        r"(?i)\b(achievements|accomplishments)\b",
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
});

pub static CONTACT: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)([\w.+-]+@[\w-]+\.[\w.-]+|\b(e-?mail|phone|mobile|tel|address|linkedin|location|contact)\b)",
    )
});

pub static EDUCATION: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\b(education|university|college|degree|bachelor|master|phd|ph\.d|school|diploma|academy)\b")
});

pub static EXPERIENCE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\b(experience|employment|work\s+history|job|role|position|internship|intern|worked)\b")
});

pub static SKILLS: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\b(skills|technologies|tools|programming|languages|frameworks|proficient)\b")
});

/// A capitalised label such as `Experience:` or `Skills:`.
pub static SECTION_LABEL: Lazy<Regex> = Lazy::new(|| compile(r"\b[A-Z][a-zA-Z]+:"));

pub static YEAR: Lazy<Regex> = Lazy::new(|| compile(r"\b(19|20)\d{2}\b"));

/// Bullet markers, including the typographic bullet that PDF extraction emits.
pub static BULLET: Lazy<Regex> = Lazy::new(|| compile(r"[•▪◦●\-*]"));

pub static MONTH: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\b(jan(uary)?|feb(ruary)?|mar(ch)?|apr(il)?|may|june?|july?|aug(ust)?|sep(t(ember)?)?|oct(ober)?|nov(ember)?|dec(ember)?)\b",
    )
});

/// A capitalised word followed by a comma, e.g. `Berlin, Germany`.
pub static CAPITALIZED_COMMA: Lazy<Regex> = Lazy::new(|| compile(r"\b[A-Z][a-z]+,"));

/// Terms a resume parser expects to see somewhere in the document.
pub const KEYWORDS: &[&str] = &[
    "experience",
    "leadership",
    "management",
    "development",
    "project",
    "team",
    "communication",
    "analysis",
    "optimization",
    "implementation",
    "strategy",
    "collaboration",
    "design",
    "research",
    "achievement",
    "innovation",
    "problem solving",
    "technical",
    "results",
    "improved",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(RESUME_INDICATORS.len(), 5);
        for re in [
            &*CONTACT,
            &*EDUCATION,
            &*EXPERIENCE,
            &*SKILLS,
            &*SECTION_LABEL,
            &*YEAR,
            &*BULLET,
            &*MONTH,
            &*CAPITALIZED_COMMA,
        ] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn test_indicator_matches_curriculum_vitae() {
        assert!(RESUME_INDICATORS
            .iter()
            .any(|re| re.is_match("Curriculum Vitae of Jane Doe")));
    }

    #[test]
    fn test_contact_matches_email_address() {
        assert!(CONTACT.is_match("jane.doe+jobs@example.co.uk"));
        assert!(!CONTACT.is_match("nothing relevant here"));
    }

    #[test]
    fn test_month_does_not_match_inside_words() {
        assert!(MONTH.is_match("Started in Sept 2019"));
        assert!(MONTH.is_match("january"));
        assert!(!MONTH.is_match("marketing octopus"));
    }

    #[test]
    fn test_bullet_matches_typographic_bullet() {
        assert!(BULLET.is_match("• Shipped the thing"));
        assert!(!BULLET.is_match("Plain sentence"));
    }

    #[test]
    fn test_year_requires_four_digits() {
        assert!(YEAR.is_match("Graduated 2018"));
        assert!(!YEAR.is_match("Room 218"));
        assert!(!YEAR.is_match("Order 120189"));
    }

    #[test]
    fn test_section_label_requires_capital() {
        assert!(SECTION_LABEL.is_match("Skills: Rust"));
        assert!(!SECTION_LABEL.is_match("skills: rust"));
    }

    #[test]
    fn test_keywords_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for kw in KEYWORDS {
            assert_eq!(*kw, kw.to_lowercase());
            assert!(seen.insert(*kw), "duplicate keyword {kw}");
        }
    }
}
