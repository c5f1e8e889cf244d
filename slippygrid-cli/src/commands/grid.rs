//! `grid` command: list the tiles covering a viewport.

use clap::Args;
use serde_json::json;
use slippygrid::config::ConfigFile;
use slippygrid::map::Map;

use super::common::{resolve_map, MapArgs, OutputFormat};
use crate::error::CliError;

/// Arguments for the `grid` command.
#[derive(Debug, Clone, Args)]
pub struct GridArgs {
    #[command(flatten)]
    pub map: MapArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Run the `grid` command.
pub fn run(args: GridArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let map = resolve_map(&args.map, None, &config).build();

    let output = match args.format {
        OutputFormat::Text => render_text(&map),
        OutputFormat::Json => render_json(&map)?,
    };
    println!("{}", output);
    Ok(())
}

/// One `index<TAB>z/x/y` line per tile, followed by the view box.
fn render_text(map: &Map) -> String {
    let mut lines: Vec<String> = map
        .tiles()
        .iter()
        .enumerate()
        .map(|(index, tile)| format!("{}\t{}", index, tile))
        .collect();

    match map.view_box() {
        Some(view_box) => lines.push(format!("viewBox: {}", view_box)),
        None => lines.push("viewBox: (empty)".to_string()),
    }
    lines.join("\n")
}

fn render_json(map: &Map) -> Result<String, CliError> {
    let tiles: Vec<_> = map
        .tiles()
        .iter()
        .zip(map.tile_urls())
        .enumerate()
        .map(|(index, (tile, url))| {
            json!({
                "index": index,
                "z": tile.zoom,
                "x": tile.x,
                "y": tile.y,
                "url": url,
            })
        })
        .collect();

    let document = json!({
        "center": map.options().center,
        "zoom": map.options().zoom,
        "tiles": tiles,
        "viewBox": map.view_box().map(|v| v.to_string()),
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
