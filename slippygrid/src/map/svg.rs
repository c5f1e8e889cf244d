//! SVG rendering of a tile layer.
//!
//! Each tile becomes a 1×1 `<image>` in tile units inside a nested `<svg>`
//! whose `viewBox` spans the enumeration, so the browser scales the grid to
//! the outer element.

use std::fmt::Write;

use crate::coord::Tile;
use crate::grid::ViewBox;

/// Expands `{z}`, `{x}` and `{y}` in a url template.
pub fn tile_url(template: &str, tile: &Tile) -> String {
    template
        .replace("{z}", &tile.zoom.to_string())
        .replace("{x}", &tile.x.to_string())
        .replace("{y}", &tile.y.to_string())
}

/// Renders `tiles` as an SVG document.
///
/// An empty tile list renders an inner `<svg>` without a `viewBox`.
pub fn render(tiles: &[Tile], view_box: Option<&ViewBox>, url_template: &str) -> String {
    let mut out = String::new();

    out.push_str("<svg version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">\n");
    match view_box {
        Some(view_box) => {
            let _ = writeln!(
                out,
                "  <svg viewBox=\"{}\" preserveAspectRatio=\"xMidYMid slice\">",
                view_box
            );
        }
        None => out.push_str("  <svg preserveAspectRatio=\"xMidYMid slice\">\n"),
    }
    out.push_str("    <title>Tile Layer</title>\n");

    for tile in tiles {
        let href = escape_attr(&tile_url(url_template, tile));
        let _ = writeln!(
            out,
            "    <image x=\"{}\" y=\"{}\" width=\"1\" height=\"1\" href=\"{}\" />",
            tile.x, tile.y, href
        );
    }

    out.push_str("  </svg>\n");
    out.push_str("</svg>\n");
    out
}

/// Escapes a string for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
