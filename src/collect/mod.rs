mod cache;
pub mod github;

pub use cache::{CacheStore, CachedCollection, MAX_CACHE_AGE_SECS};
pub use github::{apply_exclusions, Collection, Collector, GithubClient, IssueItem};
