//! Filler-word detection for answers that arrive without a hesitation count.

use once_cell::sync::Lazy;
use regex::Regex;

/// Standalone fillers: um, umm, uh, er, erm, ah, hmm, plus "you know".
static FILLER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(u+m+|u+h+|e+r+m*|a+h+|h+m+|you\s+know)\b").unwrap()
});

/// Trailing-off pauses written as an ellipsis.
static PAUSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3,}|…").unwrap());

pub fn count_hesitations(text: &str) -> u32 {
    let fillers = FILLER.find_iter(text).count();
    let pauses = PAUSE.find_iter(text).count();
    u32::try_from(fillers + pauses).unwrap_or(u32::MAX)
}
