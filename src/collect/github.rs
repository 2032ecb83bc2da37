//! GitHub activity collection.
//!
//! Pages through the combined issue-and-PR list endpoint of one repository
//! and folds every item into per-participant counters. An item is a pull
//! request when it carries a `pull_request` field, otherwise an issue; PRs
//! count only when merged, issues only when open, reopened, or completed.
//! Only the first label on an item decides its category.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::CollectError;
use crate::types::ParticipantMap;
use crate::utils::{week_index, WeeklyActivity};

const API_BASE: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Transient transport failures are retried this many times in total.
const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Thin client for the GitHub REST API.
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    /// Build a client, attaching the bearer token when one is given.
    pub fn new(token: Option<&str>) -> Result<Self, CollectError> {
        use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("reposcore"));
        if let Some(token) = token {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("ignoring GitHub token containing non-header characters"),
            }
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: API_BASE.to_string(),
        })
    }

    /// GET with bounded retries on transport errors. HTTP error statuses are
    /// returned to the caller, never retried.
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, CollectError> {
        let mut attempt = 1;
        loop {
            match self.http.get(url).query(query).send().await {
                Ok(response) => return Ok(response),
                Err(err) if attempt < MAX_ATTEMPTS => {
                    warn!("request to {url} failed ({err}); retry {attempt}/{}", MAX_ATTEMPTS - 1);
                    attempt += 1;
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

/// One item of the combined issue list, reduced to the fields that matter.
#[derive(Clone, Debug, Deserialize)]
pub struct IssueItem {
    #[serde(default)]
    pub user: Option<ItemUser>,
    #[serde(default)]
    pub labels: Vec<ItemLabel>,
    #[serde(default)]
    pub state_reason: Option<String>,
    #[serde(default)]
    pub pull_request: Option<PullRequestRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ItemUser {
    pub login: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ItemLabel {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PullRequestRef {
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

impl IssueItem {
    fn author(&self) -> &str {
        self.user.as_ref().map_or("Unknown", |user| user.login.as_str())
    }

    fn first_label(&self) -> Option<&str> {
        self.labels
            .iter()
            .filter_map(|label| label.name.as_deref())
            .find(|name| !name.is_empty())
    }

    fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    fn is_merged(&self) -> bool {
        self.pull_request
            .as_ref()
            .is_some_and(|pr| pr.merged_at.is_some())
    }

    /// Issues count when open, reopened, or completed; "not planned" does
    /// not.
    fn is_resolved(&self) -> bool {
        matches!(
            self.state_reason.as_deref(),
            Some("completed") | Some("reopened") | None
        )
    }
}

/// Everything one collection run produced.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    /// Per-participant activity counters, in first-seen order.
    pub participants: ParticipantMap,
    /// Activity per teaching week, present when a semester start was set.
    pub weekly: WeeklyActivity,
    /// Most recent `created_at` seen across all items.
    pub latest_created_at: Option<DateTime<Utc>>,
}

/// Folds issue-list items into participant counters.
pub struct Collector {
    collection: Collection,
    semester_start: Option<NaiveDate>,
}

impl Collector {
    pub fn new(semester_start: Option<NaiveDate>) -> Self {
        Self {
            collection: Collection::default(),
            semester_start,
        }
    }

    /// Page through the issue list of `repo` (in `owner/repo` form), folding
    /// every item into the counters.
    pub async fn collect(
        &mut self,
        client: &GithubClient,
        repo: &str,
    ) -> Result<(), CollectError> {
        let url = format!("{}/repos/{}/issues", client.base_url, repo);
        let mut page = 1u32;

        loop {
            let response = client
                .get(
                    &url,
                    &[
                        ("state", "all".to_string()),
                        ("per_page", PER_PAGE.to_string()),
                        ("page", page.to_string()),
                    ],
                )
                .await?;

            if let Some(err) = CollectError::from_status(response.status().as_u16()) {
                return Err(err);
            }

            let has_next = response
                .headers()
                .get(reqwest::header::LINK)
                .and_then(|value| value.to_str().ok())
                .is_some_and(has_next_page);

            let items: Vec<IssueItem> = response.json().await?;
            if items.is_empty() {
                break;
            }
            debug!("page {page} of {repo}: {} items", items.len());
            for item in &items {
                self.apply_item(item);
            }

            if has_next {
                page += 1;
            } else {
                break;
            }
        }

        Ok(())
    }

    /// Fold one issue-list item into the counters. Pure and synchronous, so
    /// the classification rules are testable without a network.
    pub fn apply_item(&mut self, item: &IssueItem) {
        let Some(created_at) = item.created_at else {
            warn!("skipping item without a created_at field");
            return;
        };

        self.collection.latest_created_at = Some(match self.collection.latest_created_at {
            Some(previous) => previous.max(created_at),
            None => created_at,
        });

        let counted = if item.is_pull_request() {
            item.is_merged()
        } else {
            item.is_resolved()
        };

        let activity = self
            .collection
            .participants
            .entry(item.author().to_string())
            .or_default();

        if counted {
            match (item.is_pull_request(), item.first_label()) {
                (true, Some("enhancement")) => activity.pr_enhancement += 1,
                (true, Some("bug")) => activity.pr_bug += 1,
                (true, Some("documentation")) => activity.pr_documentation += 1,
                (true, Some("typo")) => activity.pr_typo += 1,
                (false, Some("enhancement")) => activity.issue_enhancement += 1,
                (false, Some("bug")) => activity.issue_bug += 1,
                (false, Some("documentation")) => activity.issue_documentation += 1,
                // Unlabeled items and any other first label earn no credit.
                _ => {}
            }

            if let Some(start) = self.semester_start {
                let bucket = self
                    .collection
                    .weekly
                    .entry(week_index(created_at, start))
                    .or_default();
                if item.is_pull_request() {
                    bucket.pull_requests += 1;
                } else {
                    bucket.issues += 1;
                }
            }
        }
    }

    /// Finish the run and hand the accumulated collection back.
    pub fn finish(self) -> Collection {
        self.collection
    }
}

/// Drop excluded usernames from a participant map, preserving the order of
/// the remaining entries. Exclusion is collection-boundary policy; the
/// scorer itself never filters.
pub fn apply_exclusions(participants: &mut ParticipantMap, excluded: &HashSet<String>) {
    participants.retain(|user, _| !excluded.contains(user));
}

/// True when a `Link` response header advertises a further page.
fn has_next_page(link_header: &str) -> bool {
    link_header.contains("rel=\"next\"")
}
