//! Randomized checks of the scoring invariants over many participant sets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use reposcore::scoring::calculate_scores;
use reposcore::types::{ParticipantActivity, ParticipantMap};

fn random_participants(rng: &mut StdRng, count: usize) -> ParticipantMap {
    (0..count)
        .map(|index| {
            let activity = ParticipantActivity {
                pr_enhancement: rng.gen_range(0..6),
                pr_bug: rng.gen_range(0..4),
                pr_documentation: rng.gen_range(0..10),
                pr_typo: rng.gen_range(0..10),
                issue_enhancement: rng.gen_range(0..8),
                issue_bug: rng.gen_range(0..8),
                issue_documentation: rng.gen_range(0..8),
            };
            (format!("user{index:03}"), activity)
        })
        .collect()
}

#[test]
fn valid_counts_never_exceed_raw_counts() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let participants = random_participants(&mut rng, 20);
        let scores = calculate_scores(&participants, None, 0);
        for (name, activity) in &participants {
            let entry = &scores[name];
            let p_fb = activity.pr_enhancement + activity.pr_bug;
            let p_raw = p_fb + activity.pr_documentation + activity.pr_typo;
            let i_raw = activity.issue_enhancement
                + activity.issue_bug
                + activity.issue_documentation;

            let pr_credit = entry.feat_bug_pr / 3.0 + entry.doc_pr / 2.0 + entry.typo_pr;
            let issue_credit = entry.feat_bug_issue / 2.0 + entry.doc_issue;
            assert!(pr_credit <= f64::from(p_raw), "{name}: {pr_credit} > {p_raw}");
            assert!(issue_credit <= f64::from(i_raw), "{name}: {issue_credit} > {i_raw}");
        }
    }
}

#[test]
fn ranks_are_monotonic_and_shared_for_ties() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let participants = random_participants(&mut rng, 30);
        let scores = calculate_scores(&participants, None, 0);
        let entries: Vec<_> = scores.values().collect();
        for window in entries.windows(2) {
            assert!(window[0].total >= window[1].total);
            if window[0].total == window[1].total {
                assert_eq!(window[0].rank, window[1].rank);
            } else {
                assert!(window[0].rank < window[1].rank);
            }
        }
        // Competition ranking: a rank equals 1 + the number of entries
        // strictly above it.
        for entry in &entries {
            let above = entries.iter().filter(|e| e.total > entry.total).count();
            assert_eq!(entry.rank, above + 1);
        }
    }
}

#[test]
fn rates_sum_to_one_hundred_within_rounding() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..50 {
        let participants = random_participants(&mut rng, 25);
        let scores = calculate_scores(&participants, None, 0);
        let grand_total: f64 = scores.values().map(|entry| entry.total).sum();
        if grand_total == 0.0 {
            continue;
        }
        let rate_sum: f64 = scores.values().map(|entry| entry.rate).sum();
        let tolerance = 0.1 * scores.len() as f64;
        assert!(
            (rate_sum - 100.0).abs() <= tolerance,
            "rates sum to {rate_sum}"
        );
    }
}

#[test]
fn contribution_floor_is_respected() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..20 {
        let participants = random_participants(&mut rng, 25);
        for floor in [1, 5, 20] {
            let scores = calculate_scores(&participants, None, floor);
            assert!(scores
                .values()
                .all(|entry| entry.total >= f64::from(floor)));
        }
    }
}
