use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ganttline::commands::{Command, Context, parse_date};
use ganttline::config::{resolve_items_path, resolve_today};
use ganttline_core::{LayoutResult, load_items};

/// Ganttline - lay out dated work items on a Gantt timeline
#[derive(Parser)]
#[command(name = "gtl")]
#[command(version = "0.1.0")]
#[command(about = "Lay out dated work items on a Gantt timeline", long_about = None)]
struct Args {
    /// Path to the items JSON file (can also be set via GTL_ITEMS env var)
    #[arg(long, global = true)]
    items: Option<PathBuf>,

    /// Date treated as today, YYYY-MM-DD (can also be set via GTL_TODAY env var)
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Initialize logging from the RUST_LOG environment variable
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs, including bucket generation
/// - `RUST_LOG=debug` - show debug and above
/// - `RUST_LOG=warn` - show rejected items and above (default)
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();
    match run_with_args(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e.full_message());
            process::exit(1);
        }
    }
}

/// Run the application with the given arguments, returning the text to print
fn run_with_args(args: &Args) -> LayoutResult<String> {
    let Some(cmd) = &args.command else {
        return Ok("Welcome to Ganttline!\nUse 'gtl --help' for usage information.".to_string());
    };

    // Priority: CLI arg > env var > default
    let items_path = resolve_items_path(args.items.clone());
    let parsed = load_items(&items_path)?;
    if !parsed.rejected.is_empty() {
        eprintln!(
            "warning: skipped {} item(s) with invalid dates in {}",
            parsed.rejected.len(),
            items_path.display()
        );
    }
    info!(
        "Loaded {} items from {}",
        parsed.items.len(),
        items_path.display()
    );

    let today = resolve_today(args.today)?;
    debug!("Using {} as today", today);

    let ctx = Context {
        items: parsed.items,
        today,
    };
    cmd.execute(&ctx)
}
