//! `tile` command: convert one geographic point to tile coordinates.

use clap::Args;
use slippygrid::coord::TileCoordinate;
use tracing::debug;

use crate::error::CliError;

/// Arguments for the `tile` command.
#[derive(Debug, Clone, Args)]
pub struct TileArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Zoom level
    #[arg(long)]
    pub zoom: u8,
}

/// Run the `tile` command.
pub fn run(args: TileArgs) -> Result<(), CliError> {
    let coord = TileCoordinate::checked_from_geographic(args.lon, args.lat, args.zoom)?;
    debug!(lat = args.lat, lon = args.lon, zoom = args.zoom, "Converted point");

    print!("{}", describe(&coord));
    Ok(())
}

/// Human-readable report for one coordinate.
fn describe(coord: &TileCoordinate) -> String {
    let mut out = format!("Location: {}, {}\n", coord.latitude(), coord.longitude());
    out.push_str(&format!(
        "Zoom:     {} ({} tiles per axis)\n",
        coord.zoom(),
        coord.tile_count()
    ));
    out.push_str(&format!("Grid:     x={:.4}, y={:.4}\n", coord.x(), coord.y()));
    out.push_str(&format!("Tile:     {}\n", coord.tile()));
    out
}
