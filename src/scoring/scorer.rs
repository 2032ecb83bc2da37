//! Contribution scoring.
//!
//! Pure computation over an in-memory participant map: no I/O, no shared
//! state. Raw category counters are capped, attributed in priority order,
//! weighted, rated against the grand total and competition-ranked.

use std::cmp::Ordering;
use std::collections::HashMap;

use indexmap::IndexMap;

use crate::types::{ParticipantActivity, ParticipantMap, ScoreEntry, ScoreMap};

/// Weight of one attributed feature/bug pull request.
pub const FEAT_BUG_PR_WEIGHT: u32 = 3;
/// Weight of one attributed documentation pull request.
pub const DOC_PR_WEIGHT: u32 = 2;
/// Weight of one attributed typo pull request.
pub const TYPO_PR_WEIGHT: u32 = 1;
/// Weight of one attributed feature/bug issue.
pub const FEAT_BUG_ISSUE_WEIGHT: u32 = 2;
/// Weight of one attributed documentation issue.
pub const DOC_ISSUE_WEIGHT: u32 = 1;

/// Issue credit is capped at this multiple of the validated PR credit.
const ISSUE_CREDIT_RATIO: u32 = 4;
/// Doc and typo PR credit is capped at this multiple of the feature/bug
/// PR count (or of 1 when there are no feature/bug PRs).
const LOW_EFFORT_PR_RATIO: u32 = 3;

/// The portion of each raw category actually credited after capping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Attributed {
    p_fb: u32,
    p_d: u32,
    p_t: u32,
    i_fb: u32,
    i_d: u32,
}

/// Compute ranked scores for every participant.
///
/// The grand total used for the percentage `rate` is accumulated over all
/// participants before the `min_contributions` floor drops anyone, so
/// filtered-out activity still dilutes the remaining rates. `user_info`
/// relabels usernames to display names as a final step; two usernames
/// mapping to the same display name silently overwrite each other, last
/// write in input order wins.
pub fn calculate_scores(
    participants: &ParticipantMap,
    user_info: Option<&HashMap<String, String>>,
    min_contributions: u32,
) -> ScoreMap {
    // Phase 1: score each participant independently.
    let unrated: Vec<(String, ScoreEntry)> = participants
        .iter()
        .map(|(name, activity)| (name.clone(), score_participant(activity)))
        .collect();

    // Phase 2: reduce the grand total over every phase-1 entry, then
    // annotate the survivors of the contribution floor with their rate.
    let grand_total: f64 = unrated.iter().map(|(_, entry)| entry.total).sum();
    let floor = f64::from(min_contributions);

    let mut scores: ScoreMap = IndexMap::new();
    for (name, mut entry) in unrated {
        if entry.total < floor {
            continue;
        }
        entry.rate = if grand_total > 0.0 {
            // One decimal place.
            (entry.total / grand_total * 1000.0).round() / 10.0
        } else {
            0.0
        };
        let label = user_info
            .and_then(|info| info.get(&name).cloned())
            .unwrap_or(name);
        scores.insert(label, entry);
    }

    rank_descending(scores)
}

/// Score a single participant. `rate` and `rank` are left at zero; they
/// depend on the whole participant set.
fn score_participant(activity: &ParticipantActivity) -> ScoreEntry {
    let (p_fb, p_d, p_t) = pr_counts(activity);
    let (i_fb, i_d) = issue_counts(activity);
    let (p_valid, i_valid) = valid_counts(p_fb, p_d, p_t, i_fb, i_d);

    if p_fb == 0 && p_d == 0 && p_t == 0 && i_fb + i_d > 0 {
        // No PR activity at all: assume one valid PR so issue credit is
        // capped at 4, but keep the PR side of the score itself at zero.
        let i_valid = (i_fb + i_d).min(ISSUE_CREDIT_RATIO);
        let i_fb_at = i_fb.min(i_valid);
        // p_t is zero whenever this branch is taken, so this never grants
        // credit; kept as written because the intended rule is unclear.
        let p_t_at = u32::from(p_t > 0);
        return entry_from(Attributed {
            p_fb: 0,
            p_d: 0,
            p_t: p_t_at,
            i_fb: i_fb_at,
            i_d: i_valid - i_fb_at,
        });
    }

    entry_from(attributed_counts(p_fb, p_d, p_valid, i_fb, i_valid))
}

/// Extract the PR counters: (feature/bug, documentation, typo).
fn pr_counts(activity: &ParticipantActivity) -> (u32, u32, u32) {
    (
        activity.pr_enhancement + activity.pr_bug,
        activity.pr_documentation,
        activity.pr_typo,
    )
}

/// Extract the issue counters: (feature/bug, documentation).
fn issue_counts(activity: &ParticipantActivity) -> (u32, u32) {
    (
        activity.issue_enhancement + activity.issue_bug,
        activity.issue_documentation,
    )
}

/// Apply the category caps: doc/typo PRs count up to 3x the feature/bug PR
/// count (or 3 when there are none), issues up to 4x the validated PR
/// credit.
fn valid_counts(p_fb: u32, p_d: u32, p_t: u32, i_fb: u32, i_d: u32) -> (u32, u32) {
    let p_valid = p_fb + (p_d + p_t).min(LOW_EFFORT_PR_RATIO * p_fb.max(1));
    let i_valid = (i_fb + i_d).min(ISSUE_CREDIT_RATIO * p_valid);
    (p_valid, i_valid)
}

/// Allocate the validated credit greedily: feature/bug PRs first, then doc
/// PRs, then typo PRs as the remainder; feature/bug issues first, then doc
/// issues as the remainder.
fn attributed_counts(p_fb: u32, p_d: u32, p_valid: u32, i_fb: u32, i_valid: u32) -> Attributed {
    let p_fb_at = p_fb.min(p_valid);
    let p_d_at = p_d.min(p_valid - p_fb_at);
    let i_fb_at = i_fb.min(i_valid);
    Attributed {
        p_fb: p_fb_at,
        p_d: p_d_at,
        p_t: p_valid - p_fb_at - p_d_at,
        i_fb: i_fb_at,
        i_d: i_valid - i_fb_at,
    }
}

/// Weight the attributed counts into an unrated, unranked score entry.
fn entry_from(at: Attributed) -> ScoreEntry {
    let feat_bug_pr = f64::from(FEAT_BUG_PR_WEIGHT * at.p_fb);
    let doc_pr = f64::from(DOC_PR_WEIGHT * at.p_d);
    let typo_pr = f64::from(TYPO_PR_WEIGHT * at.p_t);
    let feat_bug_issue = f64::from(FEAT_BUG_ISSUE_WEIGHT * at.i_fb);
    let doc_issue = f64::from(DOC_ISSUE_WEIGHT * at.i_d);
    ScoreEntry {
        feat_bug_pr,
        doc_pr,
        typo_pr,
        feat_bug_issue,
        doc_issue,
        total: feat_bug_pr + doc_pr + typo_pr + feat_bug_issue + doc_issue,
        rate: 0.0,
        rank: 0,
    }
}

/// Sort descending by total and assign competition ranks: tied totals share
/// the rank of their first occurrence, the next distinct total resumes at
/// 1 + the number of entries strictly above it.
fn rank_descending(scores: ScoreMap) -> ScoreMap {
    let mut entries: Vec<(String, ScoreEntry)> = scores.into_iter().collect();
    // Stable sort keeps input order between equal totals.
    entries.sort_by(|a, b| {
        b.1.total
            .partial_cmp(&a.1.total)
            .unwrap_or(Ordering::Equal)
    });

    let mut ranked = IndexMap::with_capacity(entries.len());
    let mut last_total = None;
    let mut current_rank = 0;
    for (position, (name, mut entry)) in entries.into_iter().enumerate() {
        if last_total != Some(entry.total) {
            current_rank = position + 1;
            last_total = Some(entry.total);
        }
        entry.rank = current_rank;
        ranked.insert(name, entry);
    }
    ranked
}
