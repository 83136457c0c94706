mod collect;

use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::collect::CollectRequest;

#[derive(Debug, Parser)]
#[command(name = "prospector")]
#[command(about = "Find LinkedIn profiles for company/role pairs via SerpAPI and export them to CSV")]
struct Cli {
    /// Comma-separated companies
    #[arg(long, default_value = "Google")]
    companies: String,

    /// Comma-separated job titles
    #[arg(long, default_value = "Product Manager")]
    roles: String,

    /// Directory for CSV exports
    #[arg(long, default_value = "exports")]
    output_dir: PathBuf,

    /// Base name of the CSV files, without extension
    #[arg(long, default_value = "Google_PMs_Example")]
    output_name: String,

    /// Max rows per CSV before splitting (0 = no split)
    #[arg(long, default_value_t = 100)]
    max_per_file: usize,

    /// Results per SerpAPI call (max 100)
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=100))]
    num_results: u32,

    /// Logging level, used when `RUST_LOG` is not set (unknown names mean info)
    #[arg(long, default_value = "info", value_parser = parse_log_level)]
    log_level: LevelFilter,

    /// Print the queries that would run without calling SerpAPI (SERPAPI_API_KEY is still required)
    #[arg(long)]
    dry_run: bool,

    /// Log and skip failed queries instead of aborting the run
    #[arg(long)]
    keep_going: bool,
}

impl Cli {
    fn into_request(self) -> anyhow::Result<CollectRequest> {
        let companies = prospector_core::parse_list(&self.companies);
        if companies.is_empty() {
            anyhow::bail!("--companies must name at least one company");
        }
        let roles = prospector_core::parse_list(&self.roles);
        if roles.is_empty() {
            anyhow::bail!("--roles must name at least one role");
        }
        if self.output_name.trim().is_empty() {
            anyhow::bail!("--output-name must not be empty");
        }

        Ok(CollectRequest {
            companies,
            roles,
            output_dir: self.output_dir,
            output_name: self.output_name.trim().to_string(),
            max_per_file: self.max_per_file,
            num_results: self.num_results,
            dry_run: self.dry_run,
            keep_going: self.keep_going,
        })
    }
}

/// Map a level name to a filter, accepting the `warning`/`critical`/`fatal`
/// spellings. Anything unrecognised falls back to `info`.
#[allow(clippy::unnecessary_wraps)]
fn parse_log_level(raw: &str) -> Result<LevelFilter, std::convert::Infallible> {
    let level = match raw.trim().to_ascii_lowercase().as_str() {
        "warning" => LevelFilter::WARN,
        "critical" | "fatal" => LevelFilter::ERROR,
        other => other.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO),
    };
    Ok(level)
}

fn init_tracing(log_level: LevelFilter) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(log_level.into()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    // Loads `.env` first; a missing API key aborts here, before any query runs.
    let config = prospector_core::load_app_config()?;
    tracing::debug!(?config, "loaded configuration");

    let request = cli.into_request()?;
    collect::run_collect(&config, &request).await
}
