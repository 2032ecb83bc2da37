//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing raw participant activity and computed score entries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw activity counters for one participant.
///
/// Counters are only ever incremented during collection: one per merged pull
/// request or resolved issue, bucketed by the item's first label. A counter
/// that stays at zero simply means no credited activity in that category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantActivity {
    /// Merged pull requests labeled `enhancement`
    pub pr_enhancement: u32,
    /// Merged pull requests labeled `bug`
    pub pr_bug: u32,
    /// Merged pull requests labeled `documentation`
    pub pr_documentation: u32,
    /// Merged pull requests labeled `typo`
    pub pr_typo: u32,
    /// Resolved issues labeled `enhancement`
    pub issue_enhancement: u32,
    /// Resolved issues labeled `bug`
    pub issue_bug: u32,
    /// Resolved issues labeled `documentation`
    pub issue_documentation: u32,
}

impl ParticipantActivity {
    /// Add another activity record counter-wise, e.g. when merging the
    /// collections of several repositories into one combined report.
    pub fn merge(&mut self, other: &ParticipantActivity) {
        self.pr_enhancement += other.pr_enhancement;
        self.pr_bug += other.pr_bug;
        self.pr_documentation += other.pr_documentation;
        self.pr_typo += other.pr_typo;
        self.issue_enhancement += other.issue_enhancement;
        self.issue_bug += other.issue_bug;
        self.issue_documentation += other.issue_documentation;
    }
}

/// Participants keyed by username, in the order they were first seen.
///
/// Insertion order matters: display-name relabeling resolves collisions with
/// a last-write-wins rule over this order, and ties in the ranked output keep
/// it as well.
pub type ParticipantMap = IndexMap<String, ParticipantActivity>;

/// The computed score of one participant.
///
/// The five category values are the attributed (capped) counts multiplied by
/// their weights; `total` is their sum, `rate` the percentage of the grand
/// total across all participants (one decimal place), and `rank` the 1-based
/// competition rank where tied totals share a rank.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Weighted feature/bug pull-request score
    #[serde(rename = "feat/bug PR")]
    pub feat_bug_pr: f64,
    /// Weighted documentation pull-request score
    #[serde(rename = "document PR")]
    pub doc_pr: f64,
    /// Weighted typo pull-request score
    #[serde(rename = "typo PR")]
    pub typo_pr: f64,
    /// Weighted feature/bug issue score
    #[serde(rename = "feat/bug issue")]
    pub feat_bug_issue: f64,
    /// Weighted documentation issue score
    #[serde(rename = "document issue")]
    pub doc_issue: f64,
    /// Sum of the five category scores
    pub total: f64,
    /// Share of the grand total, in percent
    pub rate: f64,
    /// Competition rank ("1224" style)
    pub rank: usize,
}

/// Ranked score entries keyed by (possibly relabeled) participant name,
/// ordered descending by total.
pub type ScoreMap = IndexMap<String, ScoreEntry>;

/// Per-category arithmetic means over a score map, for the summary row of a
/// report. Unlike [`ScoreEntry`] there is no rank.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreAverages {
    /// Mean weighted feature/bug pull-request score
    #[serde(rename = "feat/bug PR")]
    pub feat_bug_pr: f64,
    /// Mean weighted documentation pull-request score
    #[serde(rename = "document PR")]
    pub doc_pr: f64,
    /// Mean weighted typo pull-request score
    #[serde(rename = "typo PR")]
    pub typo_pr: f64,
    /// Mean weighted feature/bug issue score
    #[serde(rename = "feat/bug issue")]
    pub feat_bug_issue: f64,
    /// Mean weighted documentation issue score
    #[serde(rename = "document issue")]
    pub doc_issue: f64,
    /// Mean total score
    pub total: f64,
    /// Mean rate, averaged independently of the totals
    pub rate: f64,
}
