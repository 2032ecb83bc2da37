//! # Repository Contribution Scoring Library
//!
//! `reposcore` analyzes the participation in a GitHub repository and turns
//! merged pull requests and resolved issues into a ranked contribution
//! score per participant.
//!
//! ## Features
//!
//! - Collect merged PRs and resolved issues over the GitHub REST API
//! - Category weighting with caps on low-effort activity
//! - Percentage rates and competition ranking
//! - Per-category averages for summary rows
//! - On-disk caching of collected data with a one-hour freshness window
//! - Text-table and bar-chart reports
//!
//! ## Example
//!
//! ```
//! use reposcore::scoring::calculate_scores;
//! use reposcore::types::{ParticipantActivity, ParticipantMap};
//!
//! let mut participants = ParticipantMap::new();
//! participants.insert(
//!     "alice".to_string(),
//!     ParticipantActivity {
//!         pr_enhancement: 2,
//!         ..Default::default()
//!     },
//! );
//!
//! let scores = calculate_scores(&participants, None, 0);
//! assert_eq!(scores["alice"].total, 6.0);
//! assert_eq!(scores["alice"].rank, 1);
//! ```

pub mod collect;
pub mod error;
pub mod report;
pub mod scoring;
pub mod types;
pub mod utils;

// Re-export the main entry points for convenience.
pub use error::CollectError;
pub use scoring::{calculate_averages, calculate_scores};
pub use types::{ParticipantActivity, ParticipantMap, ScoreEntry, ScoreMap};
