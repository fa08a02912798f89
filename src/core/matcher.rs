//! Department Matching
//!
//! Maps free text to a department code. Two passes: a code substring check
//! in listing order, then a token-overlap similarity against department
//! names. Deliberately approximate: no stemming, no edit distance.

use std::collections::HashSet;

use super::data::DepartmentRecord;
use super::text::{normalize, tokenize};

/// Minimum similarity for a name match to be accepted.
pub const SIMILARITY_THRESHOLD: f64 = 0.25;

/// Token-overlap similarity between two texts.
///
/// `|A ∩ B| / max(1, max(|A|, |B|))` over the distinct tokens of each side.
pub fn similarity_score(a: &str, b: &str) -> f64 {
    let ta: HashSet<String> = tokenize(a).into_iter().collect();
    let tb: HashSet<String> = tokenize(b).into_iter().collect();

    let matches = ta.iter().filter(|t| tb.contains(*t)).count();
    let denominator = ta.len().max(tb.len()).max(1);

    matches as f64 / denominator as f64
}

/// Resolve `text` to a department code from `departments`.
///
/// Returns the first code found as a substring of the normalized text;
/// otherwise the best-scoring department name (earliest wins ties) when it
/// reaches [`SIMILARITY_THRESHOLD`].
pub fn match_department(text: &str, departments: &[DepartmentRecord]) -> Option<String> {
    let normalized = normalize(text);

    if let Some(dept) = departments
        .iter()
        .find(|d| !d.code.is_empty() && normalized.contains(d.code.as_str()))
    {
        return Some(dept.code.clone());
    }

    let mut best: Option<(&DepartmentRecord, f64)> = None;
    for dept in departments {
        let score = similarity_score(&dept.name, text);
        let best_score = best.map(|(_, s)| s).unwrap_or(0.0);
        if score > best_score {
            best = Some((dept, score));
        }
    }

    match best {
        Some((dept, score)) if score >= SIMILARITY_THRESHOLD => {
            log::debug!("Matched department {} by name (score {score:.2})", dept.code);
            Some(dept.code.clone())
        }
        _ => None,
    }
}
