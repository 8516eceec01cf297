//! Allow-lists for the request parameters.
//!
//! Both endpoints take a free-form path segment that must name one of a small,
//! fixed set of values. This module is the single source of truth for those
//! sets and for the membership test applied to them.
//!
//! - `language`: target languages accepted by `/translate`
//! - `enhancement`: enhancement styles accepted by `/enhance`
//!
//! Matching is exact and case-sensitive: `"Spanish"` is accepted, `"spanish"`
//! and `" Spanish"` are not.

mod enhancement;
mod language;

pub use enhancement::EnhancementType;
pub use language::TargetLanguage;

/// Exact membership test against a fixed allow-list, returning the
/// position of the match.
pub fn allowed_index(candidate: &str, allowed: &[&str]) -> Option<usize> {
    allowed.iter().position(|value| *value == candidate)
}
