//! finlens CLI - Synthetic market series and document analysis.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use finlens_lib::{ChartKind, DEFAULT_BASE_URL, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "finlens")]
#[command(about = "Synthetic market series and financial document analysis", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic price series
    Series {
        /// Ticker symbol. Prompts for one when omitted on a terminal.
        symbol: Option<String>,

        /// Time range (1D, 1W, 1M, 3M, 6M, 1Y, 5Y, MAX)
        #[arg(short, long, default_value = "1D")]
        range: String,

        /// Chart kind, selects the exported columns (line, bar, candle)
        #[arg(short, long, default_value = "line")]
        chart: ChartKind,

        /// Output format (csv, json, ndjson)
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for a reproducible series
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List watchlist symbols
    Symbols {
        /// Search pattern (symbol or company name)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show quote details and synthetic range statistics
    Quote {
        /// Ticker symbol
        symbol: String,
    },

    /// Submit a financial document for analysis
    Analyze {
        /// Document to analyse (pdf, doc, docx, txt, png, jpg, jpeg)
        file: PathBuf,

        /// Analysis service base URL
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        api_url: String,

        /// Seconds between status checks
        #[arg(long, default_value = "2")]
        poll_interval: u64,

        /// Maximum status checks (0 for unlimited)
        #[arg(long, default_value = "150")]
        max_polls: u32,

        /// Give up after this many seconds of polling (0 for unlimited)
        #[arg(long, default_value = "600")]
        deadline: u64,

        /// Fail instead of showing demo results when the service is unreachable
        #[arg(long)]
        no_mock: bool,

        /// Write the result as a JSON report to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Series {
            symbol,
            range,
            chart,
            format,
            output,
            seed,
        } => commands::series::series(
            symbol.as_deref(),
            &range,
            chart,
            format,
            output,
            seed,
            cli.quiet,
        ),
        Commands::Symbols { search } => commands::symbols::list_symbols(search.as_deref()),
        Commands::Quote { symbol } => commands::quote::show_quote(&symbol),
        Commands::Analyze {
            file,
            api_url,
            poll_interval,
            max_polls,
            deadline,
            no_mock,
            json,
        } => {
            let options = commands::analyze::AnalyzeOptions {
                api_url,
                poll_interval,
                max_polls,
                deadline,
                no_mock,
                json,
            };
            commands::analyze::analyze(&file, options, cli.quiet).await
        }
    }
}
