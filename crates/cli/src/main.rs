//! U-Placement command-line runner.

mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use u_placement_search::{Board, Error, LayoutSearch, SearchConfig, SearchOutcome};

#[derive(Parser)]
#[command(name = "placer")]
#[command(about = "Searches for a valid five-component board layout")]
#[command(version)]
struct Cli {
    /// Board width in grid units
    #[arg(long, default_value = "50")]
    width: i32,

    /// Board height in grid units
    #[arg(long, default_value = "50")]
    height: i32,

    /// Maximum number of attempts
    #[arg(short, long, default_value = "500")]
    attempts: usize,

    /// Maximum anchor-to-dependent center distance
    #[arg(long, default_value = "10.0")]
    proximity_cap: f64,

    /// Maximum center-of-mass distance from the board center
    #[arg(long, default_value = "2.0")]
    com_tolerance: f64,

    /// Evaluate attempts in parallel
    #[arg(long)]
    parallel: bool,

    /// Write an SVG rendering of the layout
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write the search outcome as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Skip the ASCII grid
    #[arg(long)]
    no_ascii: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let board = Board::new(cli.width, cli.height)?;
    let config = SearchConfig::new()
        .with_board(board)
        .with_max_attempts(cli.attempts)
        .with_proximity_cap(cli.proximity_cap)
        .with_center_of_mass_tolerance(cli.com_tolerance);

    info!(
        "Searching {}x{} board, up to {} attempts",
        board.width(),
        board.height(),
        cli.attempts
    );

    let search = LayoutSearch::new(config);
    let result = if cli.parallel {
        search.run_parallel()
    } else {
        search.run()
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(Error::SearchExhausted(failure)) => {
            error!("{}", failure);
            println!("{}", render::failure(&failure, cli.com_tolerance));
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    report(&cli, search.config(), &outcome)?;
    Ok(ExitCode::SUCCESS)
}

fn report(cli: &Cli, config: &SearchConfig, outcome: &SearchOutcome) -> Result<()> {
    println!(
        "Valid placement found on attempt {} ({} ms)",
        outcome.attempts_used(),
        outcome.computation_time_ms
    );
    println!();

    for component in outcome.layout.components() {
        if let Some((x, y)) = component.position() {
            println!(
                "  {:<5} at ({:>2}, {:>2})  {}x{}",
                component.name(),
                x,
                y,
                component.width(),
                component.height()
            );
        }
    }
    println!();
    print!("{}", render::summary(&outcome.report));

    if !cli.no_ascii {
        println!();
        print!("{}", render::ascii(&outcome.layout, &outcome.report));
    }

    if let Some(path) = &cli.svg {
        let doc = render::svg(&outcome.layout, &outcome.report, &config.constraints);
        std::fs::write(path, doc)
            .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
        info!("SVG written to {}", path.display());
    }

    if let Some(path) = &cli.json {
        let json = serde_json::to_string_pretty(outcome)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
        info!("JSON written to {}", path.display());
    }

    Ok(())
}
