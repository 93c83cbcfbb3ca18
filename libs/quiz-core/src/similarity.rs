//! Lexical similarity measures over token sets and normalized strings.

use crate::text::TokenSet;

/// Jaccard similarity `|A ∩ B| / |A ∪ B|`, in `[0, 1]`.
///
/// Two empty sets score `0.0` rather than being undefined.
pub fn jaccard(a: &TokenSet, b: &TokenSet) -> f64 {
    // Iterate the smaller set for the intersection.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|token| large.contains(*token)).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// True when either normalized string contains the other.
///
/// Both strings must be non-empty; two blank fields never match.
pub fn is_substring_match(norm_a: &str, norm_b: &str) -> bool {
    if norm_a.is_empty() || norm_b.is_empty() {
        return false;
    }
    norm_a.contains(norm_b) || norm_b.contains(norm_a)
}
