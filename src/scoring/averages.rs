//! Per-category averages over a ranked score map.

use crate::types::{ScoreAverages, ScoreMap};

/// Compute the arithmetic mean of each category, the total, and the rate
/// across all score entries.
///
/// The rate is averaged on its own rather than re-derived from the average
/// total, since each rate is already a ratio. An empty map yields an
/// all-zero result.
pub fn calculate_averages(scores: &ScoreMap) -> ScoreAverages {
    if scores.is_empty() {
        return ScoreAverages::default();
    }

    let mut sums = ScoreAverages::default();
    for entry in scores.values() {
        sums.feat_bug_pr += entry.feat_bug_pr;
        sums.doc_pr += entry.doc_pr;
        sums.typo_pr += entry.typo_pr;
        sums.feat_bug_issue += entry.feat_bug_issue;
        sums.doc_issue += entry.doc_issue;
        sums.total += entry.total;
        sums.rate += entry.rate;
    }

    let count = scores.len() as f64;
    ScoreAverages {
        feat_bug_pr: sums.feat_bug_pr / count,
        doc_pr: sums.doc_pr / count,
        typo_pr: sums.typo_pr / count,
        feat_bug_issue: sums.feat_bug_issue / count,
        doc_issue: sums.doc_issue / count,
        total: sums.total / count,
        rate: sums.rate / count,
    }
}
