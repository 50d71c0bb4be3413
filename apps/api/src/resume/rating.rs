use serde::{Deserialize, Serialize};

/// Display band for an ATS score, with the advice shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsBand {
    Excellent,
    NeedsImprovement,
    Poor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsRating {
    pub band: AtsBand,
    pub headline: String,
    pub advice: Vec<String>,
}

pub fn band_for(score: u32) -> AtsBand {
    match score {
        s if s >= 80 => AtsBand::Excellent,
        s if s >= 60 => AtsBand::NeedsImprovement,
        _ => AtsBand::Poor,
    }
}

pub fn rate(score: u32) -> AtsRating {
    let band = band_for(score);
    let (headline, advice): (&str, &[&str]) = match band {
        AtsBand::Excellent => (
            "Excellent! Your resume is well-optimized for ATS systems.",
            &[
                "Clear section headings and proper formatting detected.",
                "Good keyword optimization and content structure.",
            ],
        ),
        AtsBand::NeedsImprovement => (
            "Your resume needs some improvements for better ATS compatibility:",
            &[
                "Consider adding more industry-specific keywords.",
                "Ensure all important sections (Experience, Education, Skills) are clearly labeled.",
                "Use standard section headings for better parsing.",
            ],
        ),
        AtsBand::Poor => (
            "Your resume requires significant optimization for ATS systems:",
            &[
                "Add clear section headings for Experience, Education, and Skills.",
                "Include more relevant keywords from job descriptions.",
                "Use a simpler format with standard sections.",
                "Avoid tables, images, or complex formatting.",
            ],
        ),
    };

    AtsRating {
        band,
        headline: headline.to_string(),
        advice: advice.iter().map(|a| a.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(band_for(100), AtsBand::Excellent);
        assert_eq!(band_for(80), AtsBand::Excellent);
        assert_eq!(band_for(79), AtsBand::NeedsImprovement);
        assert_eq!(band_for(60), AtsBand::NeedsImprovement);
        assert_eq!(band_for(59), AtsBand::Poor);
        assert_eq!(band_for(0), AtsBand::Poor);
    }

    #[test]
    fn test_poor_rating_has_most_advice() {
        let poor = rate(10);
        assert!(poor.headline.contains("significant optimization"));
        assert_eq!(poor.advice.len(), 4);
        assert_eq!(rate(90).advice.len(), 2);
    }

    #[test]
    fn test_band_serializes_snake_case() {
        let json = serde_json::to_string(&AtsBand::NeedsImprovement).unwrap();
        assert_eq!(json, r#""needs_improvement""#);
    }
}
