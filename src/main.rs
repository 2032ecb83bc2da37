//! reposcore — GitHub repository contribution scorer.
//!
//! Collects merged pull requests and resolved issues for one or more
//! repositories, scores every participant with capped category weights, and
//! renders the ranked result as a text table, JSON, and a bar chart.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use reposcore::collect::{
    apply_exclusions, CacheStore, CachedCollection, Collector, GithubClient,
};
use reposcore::report::{generate_chart, render_table, ChartTheme};
use reposcore::scoring::{calculate_averages, calculate_scores};
use reposcore::types::ParticipantMap;

/// GitHub repository contribution scorer.
#[derive(Parser)]
#[command(name = "reposcore", version, about = "Score contributions to GitHub repositories")]
struct Cli {
    /// Repositories to analyze, in owner/repo form. Multiple repositories
    /// are merged into one combined report.
    #[arg(required = true)]
    repos: Vec<String>,

    /// GitHub personal access token; raises the API rate limit.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Drop participants whose total score is below this floor.
    #[arg(long, default_value_t = 0)]
    min_contributions: u32,

    /// JSON file mapping usernames to display names.
    #[arg(long)]
    user_info: Option<PathBuf>,

    /// Directory the report files are written to.
    #[arg(long, default_value = "results")]
    output: PathBuf,

    /// Report format to produce.
    #[arg(long, value_enum, default_value = "table")]
    format: Format,

    /// Chart theme name ("default" or "dark").
    #[arg(long, default_value = "default")]
    theme: String,

    /// Semester start date (YYYY-MM-DD); enables weekly activity logging.
    #[arg(long)]
    semester_start: Option<NaiveDate>,

    /// Always collect fresh data, even when the cache is still warm.
    #[arg(long)]
    no_cache: bool,

    /// Usernames to drop from the result (bots, course staff, ...).
    #[arg(long)]
    exclude: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
    Chart,
    All,
}

impl Format {
    fn wants(self, other: Format) -> bool {
        self == other || self == Format::All
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let Some(theme) = ChartTheme::named(&cli.theme) else {
        bail!("unsupported theme: {}", cli.theme);
    };

    let excluded: HashSet<String> = cli.exclude.iter().cloned().collect();
    let user_info = cli
        .user_info
        .as_deref()
        .map(load_user_info)
        .transpose()?;

    let client = GithubClient::new(cli.token.as_deref())?;
    let cache = CacheStore::open_default()?;

    let mut participants = ParticipantMap::new();
    for repo in &cli.repos {
        let collected = collect_repo(&client, &cache, repo, cli.semester_start, cli.no_cache)
            .await
            .with_context(|| format!("failed to collect activity for '{repo}'"))?;
        merge_participants(&mut participants, collected);
    }
    apply_exclusions(&mut participants, &excluded);

    if participants.is_empty() {
        warn!("no participants collected; the report will be empty");
    }

    let scores = calculate_scores(&participants, user_info.as_ref(), cli.min_contributions);
    let averages = calculate_averages(&scores);

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create output directory {}", cli.output.display()))?;

    if cli.format.wants(Format::Table) {
        let table = render_table(&scores, &averages);
        print!("{table}");
        let path = cli.output.join("scores.txt");
        fs::write(&path, &table)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    if cli.format.wants(Format::Json) {
        let path = cli.output.join("scores.json");
        let body = serde_json::to_string_pretty(&scores)?;
        fs::write(&path, body)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    if cli.format.wants(Format::Chart) {
        let path = cli.output.join("scores.png");
        generate_chart(&scores, &path, &theme)
            .map_err(|err| anyhow::anyhow!("failed to render chart: {err}"))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

/// Collect one repository, going through the cache when it is still fresh.
async fn collect_repo(
    client: &GithubClient,
    cache: &CacheStore,
    repo: &str,
    semester_start: Option<NaiveDate>,
    no_cache: bool,
) -> Result<ParticipantMap> {
    if !no_cache && !cache.is_update_required(repo) {
        if let Some(cached) = cache.load(repo) {
            info!(
                "using cached data for {repo} ({} participant(s))",
                cached.participants.len()
            );
            return Ok(cached.participants);
        }
    }

    info!("collecting pull requests and issues for {repo}");
    let mut collector = Collector::new(semester_start);
    collector.collect(client, repo).await?;
    let collection = collector.finish();

    if semester_start.is_some() {
        for (week, activity) in &collection.weekly {
            info!(
                "{repo} week {week}: {} PR(s), {} issue(s)",
                activity.pull_requests, activity.issues
            );
        }
    }

    if let Err(err) = cache.store(
        repo,
        &CachedCollection {
            update_time: Utc::now().timestamp(),
            latest_created_at: collection.latest_created_at.map(|t| t.timestamp()),
            participants: collection.participants.clone(),
        },
    ) {
        // A report is still possible without a cache, so keep going.
        warn!("failed to cache collected data for {repo}: {err:#}");
    }

    Ok(collection.participants)
}

/// Add collected counters into the combined participant map.
fn merge_participants(combined: &mut ParticipantMap, collected: ParticipantMap) {
    for (user, activity) in collected {
        combined.entry(user).or_default().merge(&activity);
    }
}

/// Load the username-to-display-name map from a JSON file.
fn load_user_info(path: &Path) -> Result<HashMap<String, String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read user info file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid user info file {}", path.display()))
}
