//! `svg` command: render the tile layer as an SVG document.

use clap::Args;
use slippygrid::config::ConfigFile;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::common::{resolve_map, MapArgs};
use crate::error::CliError;

/// Arguments for the `svg` command.
#[derive(Debug, Clone, Args)]
pub struct SvgArgs {
    #[command(flatten)]
    pub map: MapArgs,

    /// Tile url template with {z}, {x} and {y} placeholders
    #[arg(long)]
    pub url: Option<String>,

    /// Write the SVG to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Run the `svg` command.
pub fn run(args: SvgArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let map = resolve_map(&args.map, args.url, &config).build();
    let svg = map.svg();

    match args.output {
        Some(path) => {
            write_svg(&path, &svg)?;
            info!(path = %path.display(), tiles = map.tiles().len(), "SVG written");
        }
        None => print!("{}", svg),
    }
    Ok(())
}

fn write_svg(path: &Path, svg: &str) -> Result<(), CliError> {
    fs::write(path, svg).map_err(|error| CliError::FileWrite {
        path: path.display().to_string(),
        error,
    })
}
