#![warn(missing_docs)]
//! benchtable CLI Library
//!
//! Console reporter for repeated benchmark runs, plus the command line
//! driver that feeds it a JSON session document.
//!
//! # Example
//!
//! ```ignore
//! use benchtable_cli::{ConsoleReporter, Session};
//!
//! let session = Session::load(Some("runs.json".as_ref()))?;
//! let mut reporter = ConsoleReporter::stdio();
//! reporter.report_context(session.context.as_ref().unwrap())?;
//! for batch in &session.batches {
//!     reporter.report_runs(batch)?;
//! }
//! ```

mod config;
mod console;
mod environment;
mod input;

pub use config::*;
pub use console::{
    CaptureSink, Color, ColorSink, ColumnLayout, ConsoleReporter, ReportError, Segment,
    TerminalSink, header_row, print_run, render_row,
};
pub use environment::{detect_context, manual_time_used, name_field_width};
pub use input::{InputError, Session};

use clap::{Parser, Subcommand};
use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, error};

/// benchtable CLI arguments
#[derive(Parser, Debug)]
#[command(name = "benchtable")]
#[command(author, version, about = "benchtable - console tables for benchmark runs")]
pub struct Cli {
    /// Optional subcommand (Render, List, InitConfig); defaults to Render
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter benchmarks by regex pattern
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Session JSON file (stdin if not specified)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Configuration file (discovered from the current directory if not specified)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// When to use terminal colors
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Minimum width of the benchmark name column
    #[arg(long)]
    pub min_name_width: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the session as a console table (default)
    Render,
    /// List the benchmarks in the session
    List,
    /// Print a default benchtable.toml
    InitConfig,
}

/// Run the benchtable CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the benchtable CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Logs go to stderr so the table on stdout stays clean
    let filter = if cli.verbose {
        "benchtable=debug"
    } else {
        "benchtable=info"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Some(Commands::InitConfig) = cli.command {
        print!("{}", BenchtableConfig::default_toml());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => BenchtableConfig::load(path).map_err(|e| {
            anyhow::anyhow!("Failed to load config '{}': {}", path.display(), e)
        })?,
        None => BenchtableConfig::discover().unwrap_or_default(),
    };
    if let Some(color) = cli.color {
        config.output.color = color;
    }
    if let Some(width) = cli.min_name_width {
        config.layout.min_name_width = width;
    }
    config.output.color.apply();

    let filter_re = Regex::new(&cli.filter)
        .map_err(|e| anyhow::anyhow!("Invalid filter '{}': {}", cli.filter, e))?;

    let mut session = Session::load(cli.input.as_deref())?;
    session.retain_matching(&filter_re);
    debug!(batches = session.batches.len(), "Session loaded");

    if let Some(Commands::List) = cli.command {
        let mut stdout = std::io::stdout().lock();
        for name in session.benchmark_names() {
            writeln!(stdout, "{}", name)?;
        }
    } else {
        let mut reporter = ConsoleReporter::stdio();
        render_session(&mut reporter, &session, &config)?;
    }

    Ok(())
}

/// Print a whole session: the context header, then every batch in order.
///
/// The context comes from the session when present, otherwise it is detected
/// from the machine and `config`. Stops at the first batch that fails.
pub fn render_session<S: ColorSink, E: Write>(
    reporter: &mut ConsoleReporter<S, E>,
    session: &Session,
    config: &BenchtableConfig,
) -> Result<(), ReportError> {
    let context = match &session.context {
        Some(context) => context.clone(),
        None => detect_context(&session.batches, config),
    };
    reporter.report_context(&context)?;

    for batch in &session.batches {
        if let Err(e) = reporter.report_runs(batch) {
            error!("Stopping report: {}", e);
            return Err(e);
        }
    }

    debug!(benchmarks = session.batches.len(), "Report complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["benchtable"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.filter, ".*");
        assert!(cli.input.is_none());
        assert!(cli.color.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "benchtable",
            "--input",
            "runs.json",
            "--color",
            "never",
            "--min-name-width",
            "24",
            "BM_.*",
            "list",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.filter, "BM_.*");
        assert_eq!(cli.input, Some(PathBuf::from("runs.json")));
        assert_eq!(cli.color, Some(ColorChoice::Never));
        assert_eq!(cli.min_name_width, Some(24));
    }

    #[test]
    fn test_render_session_detects_context() {
        let session = Session::from_json(
            r#"{"batches": [[{"benchmark_name": "BM_LongerThanTen", "iterations": 1}]]}"#,
        )
        .unwrap();
        let mut config = BenchtableConfig::default();
        config.context.num_cpus = Some(1);
        config.context.mhz_per_cpu = Some(1000.0);

        let mut reporter = ConsoleReporter::new(CaptureSink::new(), Vec::new());
        render_session(&mut reporter, &session, &config).unwrap();

        let banner = String::from_utf8(reporter.diagnostics().clone()).unwrap();
        assert!(banner.starts_with("Run on (1 X 1000 MHz CPU)\n"));
        assert_eq!(reporter.layout().unwrap().name_field_width, 16);
        assert_eq!(reporter.sink().lines().len(), 3);
    }
}
