use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::fetcher::fetch_results;
use crate::printer::Printer;
use crate::query::{build_query, DEFAULT_ENDPOINT};

/// Look up integer sequences on the OEIS
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Search endpoint to query
    #[arg(long, env = "OEIS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Print the search URL and exit without querying
    #[arg(long, action, default_value = "false")]
    pub url_only: bool,

    /// Disable colored output
    #[arg(long, action, default_value = "false")]
    pub no_color: bool,

    /// Log debug output to stderr
    #[arg(short, long, action, default_value = "false")]
    pub verbose: bool,

    /// Sequence terms. Anything that is not an integer is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub terms: Vec<String>,
}

fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

pub fn run_cli() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);
    run(&args)
}

pub fn run(args: &Cli) -> Result<()> {
    let query = build_query(&args.endpoint, &args.terms);
    tracing::debug!("Built query {}", query);

    if args.url_only {
        println!("{}", query);
        return Ok(());
    }

    let results = fetch_results(&query).inspect_err(|e| {
        tracing::debug!(error = ?e, "Fetching {} failed", query);
    })?;

    let color = !args.no_color && io::stdout().is_terminal();
    Printer::new(color).pretty_print(&results)?;

    Ok(())
}
