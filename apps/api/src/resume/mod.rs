// Resume Content Analyzer and its HTTP surface.
// analyzer.rs is pure; extraction and handlers own all I/O.

pub mod analyzer;
pub mod extract;
pub mod handlers;
pub mod patterns;
pub mod rating;
