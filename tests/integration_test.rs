use std::collections::HashMap;

use chrono::Utc;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use reposcore::collect::{CacheStore, CachedCollection};
use reposcore::report::{generate_chart, render_table, ChartTheme};
use reposcore::scoring::{calculate_averages, calculate_scores};
use reposcore::types::{ParticipantActivity, ParticipantMap};

fn setup_participants() -> ParticipantMap {
    let mut participants = ParticipantMap::new();
    participants.insert(
        "alice".to_string(),
        ParticipantActivity {
            pr_enhancement: 3,
            pr_bug: 1,
            pr_documentation: 2,
            issue_enhancement: 2,
            ..Default::default()
        },
    );
    participants.insert(
        "bob".to_string(),
        ParticipantActivity {
            pr_documentation: 5,
            issue_documentation: 1,
            ..Default::default()
        },
    );
    participants.insert(
        "carol".to_string(),
        ParticipantActivity {
            issue_enhancement: 1,
            issue_documentation: 2,
            ..Default::default()
        },
    );
    participants.insert("dave".to_string(), ParticipantActivity::default());
    participants
}

#[test]
fn full_scoring_workflow() {
    let participants = setup_participants();

    let mut user_info = HashMap::new();
    user_info.insert("alice".to_string(), "Alice Park".to_string());

    let scores = calculate_scores(&participants, Some(&user_info), 0);
    assert_eq!(scores.len(), 4);

    // alice: p_fb 4, p_valid 4 + min(2, 12) = 6 -> 3*4 + 2*2 = 16 PR,
    // issues min(2, 24) = 2 -> 4; total 20, relabeled.
    let alice = &scores["Alice Park"];
    assert_eq!(alice.total, 20.0);
    assert_eq!(alice.rank, 1);

    // bob: doc-only PRs capped at 3 -> 6; one doc issue within 4x cap -> 1.
    let bob = &scores["bob"];
    assert_eq!(bob.total, 7.0);
    assert_eq!(bob.rank, 2);

    // carol: issues only, synthetic PR credit caps at 4 -> 2*1 + 1*2 = 4.
    let carol = &scores["carol"];
    assert_eq!(carol.total, 4.0);
    assert_eq!(carol.rank, 3);

    // dave never did anything.
    let dave = &scores["dave"];
    assert_eq!(dave.total, 0.0);
    assert_eq!(dave.rate, 0.0);
    assert_eq!(dave.rank, 4);

    // Rates share one grand total of 31.
    let rate_sum: f64 = scores.values().map(|entry| entry.rate).sum();
    assert!((rate_sum - 100.0).abs() <= 0.1 * scores.len() as f64);

    // The averages summarize the same entries.
    let averages = calculate_averages(&scores);
    assert_eq!(averages.total, 31.0 / 4.0);

    // The table lists everyone in rank order plus the average row.
    let table = render_table(&scores, &averages);
    assert!(table.contains("Alice Park"));
    assert!(table.contains("average"));
    let order: Vec<usize> = ["Alice Park", "bob", "carol", "dave"]
        .iter()
        .map(|name| table.find(name).unwrap())
        .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn min_contributions_shrinks_the_report() {
    let participants = setup_participants();
    let scores = calculate_scores(&participants, None, 5);
    assert_eq!(scores.len(), 2);
    assert!(scores.values().all(|entry| entry.total >= 5.0));
    // Grand total still includes the dropped participants.
    assert_eq!(scores["alice"].rate, 64.5);
}

#[test]
fn score_map_serializes_with_report_keys() {
    let participants = setup_participants();
    let scores = calculate_scores(&participants, None, 0);
    let value = serde_json::to_value(&scores).unwrap();
    let alice = &value["alice"];
    for key in [
        "feat/bug PR",
        "document PR",
        "typo PR",
        "feat/bug issue",
        "document issue",
        "total",
        "rate",
        "rank",
    ] {
        assert!(alice.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn chart_renders_to_a_png_file() {
    let participants = setup_participants();
    let scores = calculate_scores(&participants, None, 0);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.png");

    generate_chart(&scores, &path, &ChartTheme::default()).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);

    // An empty score map still renders a valid chart.
    let empty_path = dir.path().join("empty.png");
    generate_chart(&Default::default(), &empty_path, &ChartTheme::dark()).unwrap();
    assert!(std::fs::metadata(&empty_path).is_ok());
}

#[test]
fn cached_collection_round_trips_through_the_store() {
    let dir = TempDir::new().unwrap();
    let store = CacheStore::open(dir.path()).unwrap();
    let cached = CachedCollection {
        update_time: Utc::now().timestamp(),
        latest_created_at: None,
        participants: setup_participants(),
    };
    store.store("oss2025/reposcore", &cached).unwrap();
    assert!(!store.is_update_required("oss2025/reposcore"));

    let loaded = store.load("oss2025/reposcore").unwrap();
    let scores = calculate_scores(&loaded.participants, None, 0);
    assert_eq!(scores["alice"].total, 20.0);
}
