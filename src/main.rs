//! Leaderboard - Futarchy experiment leaderboard renderer
//!
//! A CLI tool that loads a JSON snapshot of participants, derives the
//! group aggregates and renders both tables with sorting and pagination.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Error (bad arguments, unreadable snapshot, invalid action, etc.)

mod analysis;
mod categories;
mod cli;
mod config;
mod error;
mod models;
mod report;
mod snapshot;
mod view;

use anyhow::{Context, Result};
use cli::Args;
use config::{Config, CONFIG_FILE};
use report::RenderOptions;
use std::io::{BufRead, Write};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;
use view::{Action, Board};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Load config first; `[general] verbose` feeds the log level
    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    // Initialize logging
    init_logging(args.log_level(config.general.verbose));

    info!("Leaderboard v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    debug!("Effective config: {:?}", config);

    if let Err(e) = run(args, config) {
        error!("Leaderboard failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .leaderboard.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE);

    if path.exists() {
        eprintln!("⚠️  {} already exists. Remove it first or edit it manually.", CONFIG_FILE);
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).with_context(|| format!("Failed to write {}", CONFIG_FILE))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE);
    println!("   Edit it to change the snapshot path, page size and icon location.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so the rendered board on stdout stays clean.
fn init_logging(level: tracing::Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: a tracing subscriber was already installed");
    }
}

/// Load the snapshot, apply the requested actions and render.
fn run(args: Args, config: Config) -> Result<()> {
    let snapshot = snapshot::load_snapshot(&config.general.data)?;
    let mut board = Board::new(snapshot, config.display.page_size)?;

    for raw in &args.action {
        let action: Action = raw.parse()?;
        board.apply(&action)?;
    }

    let mut options = RenderOptions::from(&config);
    options.all_pages = args.all_pages;
    let format = config.general.format;

    if args.interactive {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return run_interactive(&mut board, format, &options, stdin.lock(), stdout.lock());
    }

    let output = report::render(&board, format, &options)?;

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write board to {}", path.display()))?;
            println!("✅ Leaderboard saved to: {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Read actions line by line, re-rendering the board after each one.
///
/// Stops on `q`, `quit` or end of input. Rejected actions are reported and
/// the session continues.
fn run_interactive<R: BufRead, W: Write>(
    board: &mut Board,
    format: cli::OutputFormat,
    options: &RenderOptions,
    mut input: R,
    mut out: W,
) -> Result<()> {
    write!(out, "{}", report::render(board, format, options)?)?;

    loop {
        write!(out, "\n> ")?;
        out.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        let line = line.trim();

        if read == 0 || line == "q" || line == "quit" {
            break;
        }
        if line.is_empty() {
            continue;
        }
        if line == "help" {
            writeln!(
                out,
                "sort:<key> | group-sort:<key> | page:<first|prev|next|last|N> | quit"
            )?;
            continue;
        }

        match line.parse::<Action>().and_then(|action| board.apply(&action)) {
            Ok(()) => write!(out, "{}", report::render(board, format, options)?)?,
            Err(e) => {
                warn!("Rejected action '{}': {}", line, e);
                writeln!(out, "⚠️  {}", e)?;
            }
        }
    }

    info!("Interactive session ended");
    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Runs before the subscriber is installed, so problems go to stderr directly.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => {
            eprintln!("⚠️  Ignoring {}: {:#}", CONFIG_FILE, e);
            Ok(Config::default())
        }
    }
}
