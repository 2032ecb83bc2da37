//! Text-table rendering of ranked scores.

use crate::types::{ScoreAverages, ScoreMap};

/// Activity-tier marker for a participant's share of the grand total.
pub fn rate_emoji(rate: f64) -> &'static str {
    match rate {
        r if r >= 90.0 => "\u{1f31f}", // 🌟
        r if r >= 80.0 => "\u{2b50}",  // ⭐
        r if r >= 70.0 => "\u{1f3af}", // 🎯
        r if r >= 60.0 => "\u{1f3a8}", // 🎨
        r if r >= 50.0 => "\u{1f331}", // 🌱
        r if r >= 40.0 => "\u{1f340}", // 🍀
        r if r >= 30.0 => "\u{1f33f}", // 🌿
        r if r >= 20.0 => "\u{1f342}", // 🍂
        r if r >= 10.0 => "\u{1f341}", // 🍁
        _ => "\u{1f311}",              // 🌑
    }
}

/// Render the ranked score map as a fixed-width text table with the average
/// row appended.
pub fn render_table(scores: &ScoreMap, averages: &ScoreAverages) -> String {
    let name_width = scores
        .keys()
        .map(|name| name.chars().count())
        .chain(std::iter::once("participant".len()))
        .max()
        .unwrap_or(11);

    let header = format!(
        "{:>4}  {:<2}  {:<name_width$}  {:>11}  {:>11}  {:>7}  {:>14}  {:>14}  {:>7}  {:>6}",
        "rank",
        "",
        "participant",
        "feat/bug PR",
        "document PR",
        "typo PR",
        "feat/bug issue",
        "document issue",
        "total",
        "rate",
    );
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.chars().count()));
    out.push('\n');

    for (name, entry) in scores {
        out.push_str(&format!(
            "{:>4}  {:<2}  {:<name_width$}  {:>11}  {:>11}  {:>7}  {:>14}  {:>14}  {:>7}  {:>5.1}%\n",
            entry.rank,
            rate_emoji(entry.rate),
            name,
            entry.feat_bug_pr,
            entry.doc_pr,
            entry.typo_pr,
            entry.feat_bug_issue,
            entry.doc_issue,
            entry.total,
            entry.rate,
        ));
    }

    out.push_str(&format!(
        "{:>4}  {:<2}  {:<name_width$}  {:>11.1}  {:>11.1}  {:>7.1}  {:>14.1}  {:>14.1}  {:>7.1}  {:>5.1}%\n",
        "",
        "",
        "average",
        averages.feat_bug_pr,
        averages.doc_pr,
        averages.typo_pr,
        averages.feat_bug_issue,
        averages.doc_issue,
        averages.total,
        averages.rate,
    ));

    out
}
