//! Tests for coordinate conversion

use super::*;

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}

#[test]
fn test_new_york_city_at_zoom_16() {
    // New York City: 40.7128°N, 74.0060°W
    let coord = TileCoordinate::from_geographic(-74.0060, 40.7128, 16);

    assert_eq!(coord.zoom(), 16);
    assert_eq!(coord.tile_x(), 19295);
    assert_eq!(coord.tile_y(), 24640);
    assert!((coord.x() - 19295.6188).abs() < 1e-3);
    assert!((coord.y() - 24640.2776).abs() < 1e-3);
}

#[test]
fn test_london_at_zoom_10() {
    let coord = TileCoordinate::from_geographic(-0.1278, 51.5074, 10);
    assert_eq!(coord.tile_index(), (511, 340));
}

#[test]
fn test_equator_prime_meridian() {
    // 0°N, 0°E is the exact center of the grid at every zoom
    let coord = TileCoordinate::from_geographic(0.0, 0.0, 1);
    assert_eq!(coord.x(), 1.0);
    assert_eq!(coord.y(), 1.0);
    assert_eq!(coord.tile(), Tile { x: 1, y: 1, zoom: 1 });
}

#[test]
fn test_geographic_input_is_kept_verbatim() {
    let coord = TileCoordinate::from_geographic(13.405, 52.52, 12);
    assert_eq!(coord.longitude(), 13.405);
    assert_eq!(coord.latitude(), 52.52);
}

#[test]
fn test_grid_input_is_kept_verbatim() {
    let coord = TileCoordinate::from_grid(2200.519, 1343.304, 12);
    assert_eq!(coord.x(), 2200.519);
    assert_eq!(coord.y(), 1343.304);
}

#[test]
fn test_from_grid_origin_is_northwest_corner() {
    let coord = TileCoordinate::from_grid(0.0, 0.0, 0);
    assert_close(coord.longitude(), -180.0, "longitude");
    assert!((coord.latitude() - MAX_LAT).abs() < 1e-7);
}

#[test]
fn test_from_grid_center_is_null_island() {
    let coord = TileCoordinate::from_grid(1.0, 1.0, 1);
    assert_close(coord.longitude(), 0.0, "longitude");
    assert_close(coord.latitude(), 0.0, "latitude");
}

#[test]
fn test_tile_count_is_power_of_two() {
    for zoom in 0..=20u8 {
        let expected = (1u64 << zoom) as f64;
        assert_eq!(tile_count(zoom), expected, "zoom {}", zoom);
        assert_eq!(
            TileCoordinate::from_geographic(0.0, 0.0, zoom).tile_count(),
            expected
        );
    }
}

#[test]
fn test_zoom_zero_has_single_tile() {
    let coord = TileCoordinate::from_geographic(-120.0, 45.0, 0);
    assert_eq!(coord.tile_count(), 1.0);
    assert_eq!(coord.tile(), Tile { x: 0, y: 0, zoom: 0 });
}

#[test]
fn test_with_zoom_rescales_grid_position() {
    let coord = TileCoordinate::from_geographic(13.405, 52.52, 4);
    let zoomed = coord.with_zoom(6);

    assert_eq!(zoomed.zoom(), 6);
    assert_eq!(zoomed.tile_count(), 64.0);
    assert_close(zoomed.x(), coord.x() * 4.0, "x");
    assert_close(zoomed.y(), coord.y() * 4.0, "y");
    assert_eq!(zoomed.longitude(), coord.longitude());
    assert_eq!(zoomed.latitude(), coord.latitude());
}

#[test]
fn test_floored_index_does_not_round() {
    let coord = TileCoordinate::from_grid(3.999, 0.001, 3);
    assert_eq!(coord.tile_index(), (3, 0));
}

#[test]
fn test_tile_wraps_out_of_range_index() {
    // Longitude past the antimeridian lands on the first column again
    let coord = TileCoordinate::from_geographic(190.0, 0.0, 2);
    assert_eq!(coord.tile_x(), 4);
    assert_eq!(coord.tile().x, 0);

    let coord = TileCoordinate::from_grid(-0.5, -2.5, 2);
    assert_eq!(coord.tile_index(), (-1, -3));
    assert_eq!(coord.tile(), Tile { x: 3, y: 1, zoom: 2 });
}

#[test]
fn test_pole_is_not_silently_clamped() {
    // The projection diverges at the poles; the unchecked path passes that on
    let coord = TileCoordinate::from_geographic(0.0, 90.0, 4);
    assert!(coord.y() < 0.0, "pole should project above the grid");
    assert!(TileCoordinate::checked_from_geographic(0.0, 90.0, 4).is_err());
}

#[test]
fn test_tile_display() {
    let tile = Tile {
        x: 19295,
        y: 24640,
        zoom: 16,
    };
    assert_eq!(tile.to_string(), "16/19295/24640");
}

#[test]
fn test_wrap_index_matches_double_modulo() {
    for value in -9i64..9 {
        for zoom in 0u8..4 {
            let count = 1i64 << zoom;
            let expected = ((value % count) + count) % count;
            assert_eq!(wrap_index(value, zoom), expected as u64);
        }
    }
}

#[test]
fn test_wrap_index_at_deep_zoom() {
    // 2^63 and 2^64 tiles do not fit an i64 count
    assert_eq!(wrap_index(-1, 62), (1u64 << 62) - 1);
    assert_eq!(wrap_index(-1, 63), (1u64 << 63) - 1);
    assert_eq!(wrap_index(i64::MAX, 63), (1u64 << 63) - 1);
    assert_eq!(wrap_index(-1, 64), u64::MAX);
    assert_eq!(wrap_index(i64::MIN, 64), 1u64 << 63);
    assert_eq!(wrap_index(5, 200), 5);

    let tile = Tile::wrapped(-1, -2, 63);
    assert_eq!(tile.x, (1u64 << 63) - 1);
    assert_eq!(tile.y, (1u64 << 63) - 2);
}

// Checked constructors

#[test]
fn test_checked_accepts_valid_input() {
    let checked = TileCoordinate::checked_from_geographic(-74.0060, 40.7128, 16).unwrap();
    assert_eq!(
        checked,
        TileCoordinate::from_geographic(-74.0060, 40.7128, 16)
    );
}

#[test]
fn test_checked_rejects_pole() {
    let result = TileCoordinate::checked_from_geographic(0.0, 90.0, 10);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));

    let result = TileCoordinate::checked_from_geographic(0.0, -90.0, 10);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
}

#[test]
fn test_checked_rejects_nan() {
    let result = TileCoordinate::checked_from_geographic(0.0, f64::NAN, 10);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));

    let result = TileCoordinate::checked_from_geographic(f64::INFINITY, 0.0, 10);
    assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
}

#[test]
fn test_checked_rejects_longitude() {
    let result = TileCoordinate::checked_from_geographic(181.0, 0.0, 10);
    assert_eq!(result, Err(CoordError::InvalidLongitude(181.0)));
}

#[test]
fn test_checked_rejects_zoom() {
    let result = TileCoordinate::checked_from_geographic(0.0, 0.0, MAX_ZOOM + 1);
    assert_eq!(result, Err(CoordError::InvalidZoom(MAX_ZOOM + 1)));

    let result = TileCoordinate::checked_from_grid(0.0, 0.0, MAX_ZOOM + 1);
    assert_eq!(result, Err(CoordError::InvalidZoom(MAX_ZOOM + 1)));
}

#[test]
fn test_checked_grid_bounds() {
    assert!(TileCoordinate::checked_from_grid(0.0, 4.0, 2).is_ok());

    let result = TileCoordinate::checked_from_grid(4.5, 1.0, 2);
    assert!(matches!(
        result,
        Err(CoordError::OutOfGrid { value, zoom: 2, .. }) if value == 4.5
    ));

    let result = TileCoordinate::checked_from_grid(1.0, -0.1, 2);
    assert!(matches!(result, Err(CoordError::OutOfGrid { .. })));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        CoordError::InvalidZoom(31).to_string(),
        "Invalid zoom level: 31 (must be between 0 and 30)"
    );
    assert_eq!(
        CoordError::InvalidLongitude(200.0).to_string(),
        "Invalid longitude: 200 (must be between -180 and 180)"
    );
}

// Property-based tests using proptest
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_roundtrip_property(
            lon in -180.0..180.0_f64,
            lat in -85.0..85.0_f64,
            zoom in 0u8..=20
        ) {
            let coord = TileCoordinate::from_geographic(lon, lat, zoom);
            let back = TileCoordinate::from_grid(coord.x(), coord.y(), zoom);
            let again = TileCoordinate::from_geographic(back.longitude(), back.latitude(), zoom);

            // Grid units grow with zoom, so compare relative to the grid size
            let tolerance = 1e-9 * coord.tile_count().max(1.0);
            prop_assert!(
                (again.x() - coord.x()).abs() < tolerance,
                "x roundtrip failed: {} -> {}", coord.x(), again.x()
            );
            prop_assert!(
                (again.y() - coord.y()).abs() < tolerance,
                "y roundtrip failed: {} -> {}", coord.y(), again.y()
            );
            prop_assert!((back.longitude() - lon).abs() < 1e-9);
            prop_assert!((back.latitude() - lat).abs() < 1e-9);
        }

        #[test]
        fn test_tile_in_bounds(
            lon in -180.0..180.0_f64,
            lat in -85.0..85.0_f64,
            zoom in 0u8..=20
        ) {
            let coord = TileCoordinate::from_geographic(lon, lat, zoom);
            let max_tile = 1u64 << zoom;
            let tile = coord.tile();

            prop_assert!(tile.x < max_tile);
            prop_assert!(tile.y < max_tile);
            prop_assert_eq!(tile.zoom, zoom);
            // Inside the valid range wrapping is a no-op
            prop_assert_eq!(tile.x as i64, coord.tile_x());
            prop_assert_eq!(tile.y as i64, coord.tile_y());
        }

        #[test]
        fn test_longitude_monotonic(
            lon1 in -180.0..-90.0_f64,
            lon2 in -90.0..0.0_f64,
            zoom in 0u8..=20
        ) {
            let a = TileCoordinate::from_geographic(lon1, 10.0, zoom);
            let b = TileCoordinate::from_geographic(lon2, 10.0, zoom);
            prop_assert!(a.x() < b.x());
        }

        #[test]
        fn test_latitude_decreases_southward(
            lat1 in 0.0..85.0_f64,
            lat2 in -85.0..0.0_f64,
            zoom in 0u8..=20
        ) {
            let north = TileCoordinate::from_geographic(0.0, lat1, zoom);
            let south = TileCoordinate::from_geographic(0.0, lat2, zoom);
            prop_assert!(north.y() < south.y());
        }

        #[test]
        fn test_checked_agrees_with_unchecked(
            lon in -180.0..=180.0_f64,
            lat in -85.0..=85.0_f64,
            zoom in 0u8..=MAX_ZOOM
        ) {
            let checked = TileCoordinate::checked_from_geographic(lon, lat, zoom)?;
            prop_assert_eq!(checked, TileCoordinate::from_geographic(lon, lat, zoom));
        }

        #[test]
        fn test_reject_invalid_latitude(
            lat in 85.06..1000.0_f64,
            lon in -180.0..180.0_f64,
            zoom in 0u8..=18
        ) {
            let result = TileCoordinate::checked_from_geographic(lon, lat, zoom);
            prop_assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
        }
    }
}
