//! slippygrid CLI - Command-line interface
//!
//! Converts coordinates to slippy-map tiles, lists the tiles covering a
//! viewport and renders them as an SVG tile layer.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use slippygrid::config::ConfigFile;
use slippygrid::logging::{init_logging, LoggingGuard};

use commands::config::ConfigCommands;
use commands::grid::GridArgs;
use commands::svg::SvgArgs;
use commands::tile::TileArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "slippygrid")]
#[command(version = slippygrid::VERSION)]
#[command(about = "Slippy-map tile math for Web Mercator viewports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a geographic point to tile coordinates
    Tile(TileArgs),

    /// List the tiles covering a viewport
    Grid(GridArgs),

    /// Render the tiles covering a viewport as SVG
    Svg(SvgArgs),

    /// View or change configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let _guard = match start_logging() {
        Ok(guard) => guard,
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli.command) {
        e.exit();
    }
}

fn start_logging() -> Result<LoggingGuard, CliError> {
    // A broken config file is reported by the command that needs it
    let logging = ConfigFile::load().unwrap_or_default().logging;
    init_logging(&logging.directory, &logging.file)
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Tile(args) => commands::tile::run(args),
        Commands::Grid(args) => commands::grid::run(args),
        Commands::Svg(args) => commands::svg::run(args),
        Commands::Config { command } => commands::config::run(command),
    }
}
