mod averages;
mod scorer;

pub use averages::calculate_averages;
pub use scorer::calculate_scores;
pub use scorer::{
    DOC_ISSUE_WEIGHT, DOC_PR_WEIGHT, FEAT_BUG_ISSUE_WEIGHT, FEAT_BUG_PR_WEIGHT, TYPO_PR_WEIGHT,
};
