//! The collect pipeline: run every company/role query, accumulate unique
//! profiles, then write the CSV export.
//!
//! Queries run strictly one after another with a fixed pause between them.
//! A failed query aborts the run unless `--keep-going` was given, in which
//! case that pair's results are dropped and the run continues.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use prospector_core::{
    build_queries, export_people, AppConfig, Person, ProfileCollector, SearchQuery,
};
use prospector_serp::{extract_profile_hits, SerpClient};

/// Everything the user asked for on the command line, already validated.
#[derive(Debug, Clone)]
pub(crate) struct CollectRequest {
    pub companies: Vec<String>,
    pub roles: Vec<String>,
    pub output_dir: PathBuf,
    pub output_name: String,
    pub max_per_file: usize,
    pub num_results: u32,
    pub dry_run: bool,
    pub keep_going: bool,
}

/// Knobs for [`collect_people`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct CollectOptions {
    pub num_results: u32,
    pub inter_request_delay: Duration,
    pub keep_going: bool,
}

/// Spaces consecutive API calls by a fixed delay. The first call never waits.
#[derive(Debug)]
pub(crate) struct RequestPacer {
    delay: Duration,
    started: bool,
}

impl RequestPacer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            started: false,
        }
    }

    pub(crate) async fn wait_turn(&mut self) {
        if self.started && !self.delay.is_zero() {
            tracing::debug!(delay = ?self.delay, "pausing before next query");
            tokio::time::sleep(self.delay).await;
        }
        self.started = true;
    }
}

/// Result of a collection pass over all queries.
#[derive(Debug)]
pub(crate) struct CollectSummary {
    pub people: Vec<Person>,
    pub queries_run: usize,
    pub failed_queries: usize,
    pub duplicates: usize,
    pub non_profile_results: usize,
}

/// Run each query in order and collect deduplicated people.
///
/// # Errors
///
/// Returns the first search error, with the failing company and role as
/// context, unless `options.keep_going` is set.
pub(crate) async fn collect_people(
    client: &SerpClient,
    queries: &[SearchQuery],
    options: CollectOptions,
) -> anyhow::Result<CollectSummary> {
    let mut collector = ProfileCollector::new();
    let mut failed_queries = 0usize;
    let mut non_profile_results = 0usize;
    let mut pacer = RequestPacer::new(options.inter_request_delay);

    for query in queries {
        pacer.wait_turn().await;

        tracing::info!(query = %query.text, "querying SerpAPI");
        match client.search(&query.text, options.num_results).await {
            Ok(results) => {
                let hits = extract_profile_hits(&results);
                non_profile_results += results.len() - hits.len();
                let added = collector.absorb(query, hits);
                tracing::info!(
                    company = %query.company,
                    role = %query.role,
                    results = results.len(),
                    added,
                    "query complete"
                );
            }
            Err(e) if options.keep_going => {
                tracing::error!(
                    company = %query.company,
                    role = %query.role,
                    error = %e,
                    "query failed, skipping"
                );
                failed_queries += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!(
                        "search failed for company '{}' and role '{}'",
                        query.company, query.role
                    )
                });
            }
        }
    }

    if failed_queries > 0 {
        tracing::warn!(
            failed_queries,
            total_queries = queries.len(),
            "some queries failed during collection"
        );
    }

    let duplicates = collector.duplicates();
    Ok(CollectSummary {
        people: collector.into_people(),
        queries_run: queries.len(),
        failed_queries,
        duplicates,
        non_profile_results,
    })
}

/// Build queries, collect people and write the export.
///
/// With `dry_run` the queries are printed and nothing else happens.
///
/// # Errors
///
/// Returns an error if the client cannot be built, a query fails (without
/// `keep_going`), every query fails (with `keep_going`), or the export fails.
pub(crate) async fn run_collect(config: &AppConfig, request: &CollectRequest) -> anyhow::Result<()> {
    let queries = build_queries(&request.companies, &request.roles);

    if request.dry_run {
        for query in &queries {
            println!("{}", query.text);
        }
        println!("dry-run: would run {} SerpAPI queries", queries.len());
        return Ok(());
    }

    let client = SerpClient::from_config(config).context("failed to build SerpAPI client")?;
    let options = CollectOptions {
        num_results: request.num_results,
        inter_request_delay: Duration::from_millis(config.inter_request_delay_ms),
        keep_going: request.keep_going,
    };

    let summary = collect_people(&client, &queries, options).await?;
    if summary.queries_run > 0 && summary.failed_queries == summary.queries_run {
        anyhow::bail!("all {} queries failed", summary.failed_queries);
    }

    let files = export_people(
        &request.output_dir,
        &request.output_name,
        &summary.people,
        request.max_per_file,
    )
    .with_context(|| format!("failed to export to {}", request.output_dir.display()))?;

    tracing::info!(
        duplicates = summary.duplicates,
        non_profile_results = summary.non_profile_results,
        "collection finished"
    );
    println!(
        "collected {} profiles from {} queries into {} file(s) under {}",
        summary.people.len(),
        summary.queries_run,
        files.len(),
        request.output_dir.display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
