//! Duplicate-title heuristic.
//!
//! Two titles are considered similar when either one, lowercased, contains
//! the other. This is a warning aid only: short candidates produce false
//! positives and reworded titles produce false negatives.

use super::Issue;

/// Returns whether two titles overlap by case-insensitive substring
/// containment in either direction.
#[must_use]
pub fn titles_overlap(existing: &str, candidate: &str) -> bool {
    let existing_lower = existing.to_lowercase();
    let candidate_lower = candidate.to_lowercase();
    existing_lower.contains(&candidate_lower) || candidate_lower.contains(&existing_lower)
}

/// Returns the first issue, in list order, whose title overlaps `candidate`.
#[must_use]
pub fn find_similar_issue<'a>(issues: &'a [Issue], candidate: &str) -> Option<&'a Issue> {
    issues
        .iter()
        .find(|issue| titles_overlap(issue.title(), candidate))
}
