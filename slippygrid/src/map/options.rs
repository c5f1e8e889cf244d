//! Map construction options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::MapError;

/// Default map center.
pub const DEFAULT_CENTER_LAT: f64 = 0.0;
pub const DEFAULT_CENTER_LNG: f64 = 170.1022;

/// Tile image address used when no url template is configured.
pub const DEFAULT_URL_TEMPLATE: &str = "/{z}/{x}/{y}.png";

/// Geographic center of a map, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lng: f64,
}

impl Center {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Default for Center {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG)
    }
}

impl From<(f64, f64)> for Center {
    /// Builds a center from a `(lat, lng)` pair.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl FromStr for Center {
    type Err = MapError;

    /// Parses `"lat,lng"`. Whitespace around either number is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MapError::InvalidCenter(s.to_string());

        let (lat, lng) = s.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(lat, lng))
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Options for building a [`Map`](super::Map).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapOptions {
    pub center: Center,
    pub zoom: u8,
    /// Tile url template with `{z}`, `{x}` and `{y}` placeholders.
    pub url: Option<String>,
}

impl MapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center(mut self, center: impl Into<Center>) -> Self {
        self.center = center.into();
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The configured url template, or [`DEFAULT_URL_TEMPLATE`].
    pub fn url_template(&self) -> &str {
        self.url.as_deref().unwrap_or(DEFAULT_URL_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_center() {
        let center: Center = "52.52,13.405".parse().unwrap();
        assert_eq!(center, Center::new(52.52, 13.405));
    }

    #[test]
    fn test_parse_center_with_whitespace() {
        let center: Center = " -33.8688 , 151.2093 ".parse().unwrap();
        assert_eq!(center, Center::new(-33.8688, 151.2093));
    }

    #[test]
    fn test_parse_center_rejects_garbage() {
        for input in ["", "52.52", "52.52;13.405", "north,east", "1,2,3"] {
            let result = input.parse::<Center>();
            assert_eq!(
                result,
                Err(MapError::InvalidCenter(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_center_display_roundtrip() {
        let center = Center::new(40.7128, -74.006);
        assert_eq!(center.to_string(), "40.7128,-74.006");
        assert_eq!(center.to_string().parse::<Center>().unwrap(), center);
    }

    #[test]
    fn test_center_from_pair() {
        assert_eq!(Center::from((1.5, -2.5)), Center::new(1.5, -2.5));
    }

    #[test]
    fn test_center_json_object() {
        let center: Center = serde_json::from_str(r#"{"lat": -22.9068, "lng": -43.1729}"#).unwrap();
        assert_eq!(center, Center::new(-22.9068, -43.1729));
        assert_eq!(
            serde_json::to_string(&center).unwrap(),
            r#"{"lat":-22.9068,"lng":-43.1729}"#
        );
    }

    #[test]
    fn test_defaults() {
        let options = MapOptions::default();
        assert_eq!(options.center, Center::new(0.0, 170.1022));
        assert_eq!(options.zoom, 0);
        assert_eq!(options.url, None);
        assert_eq!(options.url_template(), "/{z}/{x}/{y}.png");
    }

    #[test]
    fn test_builder() {
        let options = MapOptions::new()
            .with_center((48.8566, 2.3522))
            .with_zoom(9)
            .with_url("https://tile.example.org/{z}/{x}/{y}.png");

        assert_eq!(options.center, Center::new(48.8566, 2.3522));
        assert_eq!(options.zoom, 9);
        assert_eq!(
            options.url_template(),
            "https://tile.example.org/{z}/{x}/{y}.png"
        );
    }
}
