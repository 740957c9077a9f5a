use crate::engine::run_query;
use crate::loader;
use crate::model::{Query, QueryOutcome, QueryReport, RunConfig};
use crate::output::{spawn_output_writer, OutputLine};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryKind {
    /// Least populous cities (selection sort)
    LeastPopulous,
    /// Most populous cities (merge sort)
    MostPopulous,
    /// Cities by name A-Z (insertion sort)
    NameAsc,
    /// Cities by name Z-A (merge sort)
    NameDesc,
    /// Most populous cities in --state
    State,
    /// All cities named --city, by population
    City,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "population",
    version,
    about = "Order and filter US city population records"
)]
pub struct Cli {
    /// Tab-separated dataset (state, city, type, population)
    #[arg(long)]
    pub data: Option<std::path::PathBuf>,

    /// Run a single query and exit instead of showing the menu
    #[arg(long, value_enum)]
    pub query: Option<QueryKind>,

    /// State name for --query state
    #[arg(long)]
    pub state: Option<String>,

    /// City name for --query city
    #[arg(long)]
    pub city: Option<String>,

    /// Rows to show for the ranked queries
    #[arg(long, default_value_t = 50)]
    pub limit: usize,

    /// Print JSON result and exit (requires --query)
    #[arg(long)]
    pub json: bool,

    /// Print text table and exit (requires --query)
    #[arg(long)]
    pub text: bool,

    /// Export results as JSON
    #[arg(long)]
    pub export_json: Option<std::path::PathBuf>,

    /// Export results as CSV
    #[arg(long)]
    pub export_csv: Option<std::path::PathBuf>,

    /// Use --summary true or --summary false to toggle population metrics
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub summary: bool,
}

pub async fn run(args: Cli) -> Result<()> {
    if args.json && args.text {
        return Err(anyhow::anyhow!("--json and --text cannot be used together."));
    }
    if args.query.is_none() && (args.json || args.text) {
        return Err(anyhow::anyhow!(
            "--json and --text need a --query. Omit both to use the interactive menu."
        ));
    }

    let query = build_query(&args)?;
    let cfg = build_config(&args);
    let cities = loader::load_cities(&cfg.data_path)
        .with_context(|| format!("failed to load {}", cfg.data_path.display()))?;

    match query {
        Some(query) => run_once(&args, &cfg, cities, query).await,
        None => crate::session::run_session(cfg, cities).await,
    }
}

/// Build a `RunConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> RunConfig {
    RunConfig {
        data_path: crate::storage::resolve_data_path(args.data.as_deref()),
        limit: args.limit,
        summary: args.summary,
    }
}

/// Translate `--query` and its name arguments into a `Query`.
pub fn build_query(args: &Cli) -> Result<Option<Query>> {
    let Some(kind) = args.query else {
        return Ok(None);
    };
    let query = match kind {
        QueryKind::LeastPopulous => Query::LeastPopulous,
        QueryKind::MostPopulous => Query::MostPopulous,
        QueryKind::NameAsc => Query::NameAscending,
        QueryKind::NameDesc => Query::NameDescending,
        QueryKind::State => Query::MostPopulousInState {
            state: args
                .state
                .clone()
                .context("--query state requires --state <NAME>")?,
        },
        QueryKind::City => Query::CitiesNamed {
            name: args
                .city
                .clone()
                .context("--query city requires --city <NAME>")?,
        },
    };
    Ok(Some(query))
}

async fn run_once(
    args: &Cli,
    cfg: &RunConfig,
    mut cities: Vec<crate::model::City>,
    query: Query,
) -> Result<()> {
    let report = match run_query(&mut cities, &query, cfg.limit) {
        QueryOutcome::Ordered(report) => report,
        QueryOutcome::UnknownState(name) => {
            return Err(anyhow::anyhow!("ERROR: state {name} is not valid"));
        }
        QueryOutcome::UnknownCity(name) => {
            return Err(anyhow::anyhow!("ERROR: city {name} is not valid"));
        }
    };

    let (out_tx, out_handle) = spawn_output_writer();

    // Handle exports (errors will propagate)
    for msg in handle_exports(args, &report)? {
        let _ = out_tx.send(OutputLine::Stderr(msg));
    }

    if args.json {
        let out = serde_json::to_string_pretty(&report)?;
        let _ = out_tx.send(OutputLine::Stdout(out));
    } else {
        let summary = crate::text_summary::build_text_summary(&report, cfg.summary);
        for line in summary.lines {
            let _ = out_tx.send(OutputLine::Stdout(line));
        }
    }
    drop(out_tx);
    let _ = out_handle.await;
    Ok(())
}

/// Handle export operations (JSON and CSV) for both text and JSON modes.
fn handle_exports(args: &Cli, report: &QueryReport) -> Result<Vec<String>> {
    let mut messages = Vec::new();
    if let Some(p) = args.export_json.as_deref() {
        crate::storage::export_json(p, report)?;
        messages.push(format!("Exported JSON: {}", p.display()));
    }
    if let Some(p) = args.export_csv.as_deref() {
        crate::storage::export_csv(p, report)?;
        messages.push(format!("Exported CSV: {}", p.display()));
    }
    Ok(messages)
}
