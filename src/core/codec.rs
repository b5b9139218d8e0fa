use crate::core::constants::{CODE_LENGTH, GRID_DIM, REGION_EXTENTS, SYMBOL_GRID, symbol_position};
use crate::core::format::{format_code, parse_code};
use crate::util::error::DigipinError;
use geo_types::{Rect, coord};

/// A latitude/longitude bounding region, inclusive on all four edges.
///
/// One subdivision level splits a region into a 4x4 grid of sub-cells; the
/// encoder and decoder both narrow a `Region` level by level using the same
/// arithmetic so the two directions agree bit for bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Region {
    /// The root region covering the supported deployment extent.
    pub fn root() -> Self {
        Self {
            min_lon: REGION_EXTENTS[0],
            min_lat: REGION_EXTENTS[1],
            max_lon: REGION_EXTENTS[2],
            max_lat: REGION_EXTENTS[3],
        }
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Center point as `(lat, lon)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Inclusive containment test on both axes.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }

    /// Returns the `(row, col)` of the 4x4 sub-cell containing the point.
    ///
    /// Row 0 is the northernmost band, column 0 the westernmost. A point
    /// exactly on an internal split boundary belongs to the lower-indexed
    /// band (more north / more west); the fallthrough to index 3 makes the
    /// mapping total for any point inside the region.
    pub fn locate(&self, lat: f64, lon: f64) -> (usize, usize) {
        let lat_div = self.lat_span() / GRID_DIM as f64;
        let lon_div = self.lon_span() / GRID_DIM as f64;

        let mut row = GRID_DIM - 1;
        for r in 0..GRID_DIM {
            if lat >= self.max_lat - lat_div * (r as f64 + 1.0) {
                row = r;
                break;
            }
        }

        let mut col = GRID_DIM - 1;
        for c in 0..GRID_DIM {
            if lon <= self.min_lon + lon_div * (c as f64 + 1.0) {
                col = c;
                break;
            }
        }

        (row, col)
    }

    /// Bounds of the sub-cell at `(row, col)` of the 4x4 split.
    pub fn subcell(&self, row: usize, col: usize) -> Region {
        let lat_div = self.lat_span() / GRID_DIM as f64;
        let lon_div = self.lon_span() / GRID_DIM as f64;

        Region {
            min_lat: self.max_lat - lat_div * (row as f64 + 1.0),
            max_lat: self.max_lat - lat_div * row as f64,
            min_lon: self.min_lon + lon_div * col as f64,
            max_lon: self.min_lon + lon_div * (col as f64 + 1.0),
        }
    }

    /// Converts to a [`geo_types::Rect`] with x = longitude, y = latitude.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lon, y: self.min_lat },
            coord! { x: self.max_lon, y: self.max_lat },
        )
    }
}

/// Encodes a WGS84 coordinate into a DIGIPIN code.
///
/// Returns the canonical upper-case, dash-grouped form (`XXX-XXX-XXXX`).
///
/// # Example
/// ```
/// use digipin_rs::{DigipinError, encode};
///
/// # fn main() -> Result<(), DigipinError> {
/// let code = encode(28.6139, 77.2090)?;
/// assert_eq!(code, "39J-438-TJC7");
/// # Ok(())
/// # }
/// ```
pub fn encode(lat: f64, lon: f64) -> Result<String, DigipinError> {
    let (code, _) = encode_cell(lat, lon)?;
    Ok(code)
}

/// Encodes a coordinate and also returns the terminal cell's bounds.
pub fn encode_cell(lat: f64, lon: f64) -> Result<(String, Region), DigipinError> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(DigipinError::InvalidCoordinate);
    }

    let mut region = Region::root();
    if !region.contains(lat, lon) {
        return Err(DigipinError::OutOfRegion { lat, lon });
    }

    let mut symbols = String::with_capacity(CODE_LENGTH);
    for _ in 0..CODE_LENGTH {
        let (row, col) = region.locate(lat, lon);
        symbols.push(SYMBOL_GRID[row][col]);
        region = region.subcell(row, col);
    }

    Ok((format_code(&symbols), region))
}

/// Decodes a DIGIPIN code into the `(lat, lon)` center of its terminal cell.
///
/// Decoding is case-insensitive and ignores separator placement; only the
/// total symbol count and alphabet membership are checked.
///
/// # Example
/// ```
/// use digipin_rs::{DigipinError, decode};
///
/// # fn main() -> Result<(), DigipinError> {
/// let (lat, lon) = decode("39J-438-TJC7")?;
/// assert!((lat - 28.6139).abs() < 1e-4);
/// assert!((lon - 77.2090).abs() < 1e-4);
/// # Ok(())
/// # }
/// ```
pub fn decode(code: &str) -> Result<(f64, f64), DigipinError> {
    Ok(decode_cell(code)?.center())
}

/// Decodes a code into the bounds of its terminal cell.
pub fn decode_cell(code: &str) -> Result<Region, DigipinError> {
    let symbols = parse_code(code)?;

    let mut region = Region::root();
    for symbol in symbols.chars() {
        let (row, col) = symbol_position(symbol)
            .ok_or_else(|| DigipinError::MalformedCode(format!("invalid symbol '{symbol}'")))?;
        region = region.subcell(row, col);
    }

    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{TERMINAL_LAT_SPAN, TERMINAL_LON_SPAN};

    #[test]
    fn test_encode_known_locations() -> Result<(), DigipinError> {
        // Dak Bhawan, New Delhi
        assert_eq!(encode(28.6139, 77.2090)?, "39J-438-TJC7");
        assert_eq!(encode(12.9716, 77.5946)?, "4P3-JK8-52C9");
        assert_eq!(encode(19.0760, 72.8777)?, "4FK-595-8823");
        Ok(())
    }

    #[test]
    fn test_encode_is_deterministic() -> Result<(), DigipinError> {
        let a = encode(22.123456, 88.654321)?;
        let b = encode(22.123456, 88.654321)?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_region_center_is_stable() -> Result<(), DigipinError> {
        let root = Region::root();
        let (lat, lon) = root.center();
        let code = encode(lat, lon)?;
        assert_eq!(code, "3TT-TTT-TTTT");

        let (dlat, dlon) = decode(&code)?;
        assert!((dlat - lat).abs() <= TERMINAL_LAT_SPAN / 2.0);
        assert!((dlon - lon).abs() <= TERMINAL_LON_SPAN / 2.0);
        Ok(())
    }

    #[test]
    fn test_round_trip_tolerance() -> Result<(), DigipinError> {
        let samples = [
            (28.6139, 77.2090),
            (12.9716, 77.5946),
            (19.0760, 72.8777),
            (8.0883, 77.5385),
            (2.5, 63.5),
            (38.5, 99.5),
            (20.5, 81.5),
            (35.999999, 64.000001),
        ];

        for &(lat, lon) in &samples {
            let code = encode(lat, lon)?;
            let (dlat, dlon) = decode(&code)?;
            assert!(
                (dlat - lat).abs() <= TERMINAL_LAT_SPAN / 2.0,
                "lat drift for ({lat}, {lon})"
            );
            assert!(
                (dlon - lon).abs() <= TERMINAL_LON_SPAN / 2.0,
                "lon drift for ({lat}, {lon})"
            );
        }
        Ok(())
    }

    #[test]
    fn test_decode_then_encode_is_exact() -> Result<(), DigipinError> {
        for code in ["39J-438-TJC7", "4P3-JK8-52C9", "FFF-FFF-FFFF", "LLL-LLL-LLLL", "888-888-8888"] {
            let (lat, lon) = decode(code)?;
            assert_eq!(encode(lat, lon)?, code);
        }
        Ok(())
    }

    #[test]
    fn test_decode_case_insensitive() -> Result<(), DigipinError> {
        assert_eq!(decode("39j-438-tjc7")?, decode("39J-438-TJC7")?);
        let (lat, lon) = decode("lll-lll-llll")?;
        assert_eq!(encode(lat, lon)?, "LLL-LLL-LLLL");
        Ok(())
    }

    #[test]
    fn test_region_edges_inclusive() -> Result<(), DigipinError> {
        encode(2.5, 63.5)?;
        encode(38.5, 99.5)?;
        encode(2.5, 99.5)?;
        encode(38.5, 63.5)?;
        Ok(())
    }

    #[test]
    fn test_out_of_region() {
        for (lat, lon) in [
            (2.4999999, 80.0),
            (38.5000001, 80.0),
            (20.0, 63.4999999),
            (20.0, 99.5000001),
            (51.5, -0.1),
        ] {
            assert!(matches!(
                encode(lat, lon),
                Err(DigipinError::OutOfRegion { .. })
            ));
        }
    }

    #[test]
    fn test_non_finite_coordinates() {
        assert_eq!(encode(f64::NAN, 80.0), Err(DigipinError::InvalidCoordinate));
        assert_eq!(encode(20.0, f64::NAN), Err(DigipinError::InvalidCoordinate));
        assert_eq!(
            encode(f64::INFINITY, 80.0),
            Err(DigipinError::InvalidCoordinate)
        );
        assert_eq!(
            encode(20.0, f64::NEG_INFINITY),
            Err(DigipinError::InvalidCoordinate)
        );
    }

    #[test]
    fn test_boundary_points_go_north_and_west() -> Result<(), DigipinError> {
        // 29.5 is the split between the first and second latitude bands;
        // the point lands in the northern band (row 0, 'C' column for 77.2).
        assert!(encode(29.5, 77.209)?.starts_with('C'));
        // 72.5 is the split between the first and second longitude bands;
        // the point lands in the western band (col 0, row 1 for lat 28).
        assert!(encode(28.0, 72.5)?.starts_with('J'));
        Ok(())
    }

    #[test]
    fn test_locate_covers_all_cells() {
        let root = Region::root();
        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM {
                let sub = root.subcell(row, col);
                let (lat, lon) = sub.center();
                assert_eq!(root.locate(lat, lon), (row, col));
            }
        }
    }

    #[test]
    fn test_subcells_partition_parent() {
        let parent = Region::root().subcell(1, 2);
        // Rows tile north to south with no gaps
        for row in 0..GRID_DIM - 1 {
            let upper = parent.subcell(row, 0);
            let lower = parent.subcell(row + 1, 0);
            assert_eq!(upper.min_lat, lower.max_lat);
        }
        // Columns tile west to east with no gaps
        for col in 0..GRID_DIM - 1 {
            let west = parent.subcell(0, col);
            let east = parent.subcell(0, col + 1);
            assert_eq!(west.max_lon, east.min_lon);
        }
        assert_eq!(parent.subcell(0, 0).max_lat, parent.max_lat);
        assert_eq!(parent.subcell(0, 0).min_lon, parent.min_lon);
    }

    #[test]
    fn test_terminal_cell_spans() -> Result<(), DigipinError> {
        let (_, region) = encode_cell(28.6139, 77.2090)?;
        assert!((region.lat_span() - TERMINAL_LAT_SPAN).abs() < 1e-12);
        assert!((region.lon_span() - TERMINAL_LON_SPAN).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(decode("39J-438"), Err(DigipinError::MalformedCode(_))));
        assert!(matches!(
            decode("39J-438-TJC7F"),
            Err(DigipinError::MalformedCode(_))
        ));
        // 'A' is not in the symbol grid
        assert!(matches!(
            decode("39J-438-TJCA"),
            Err(DigipinError::MalformedCode(_))
        ));
        assert!(matches!(decode(""), Err(DigipinError::MalformedCode(_))));
    }

    #[test]
    fn test_to_rect() {
        let rect = Region::root().to_rect();
        assert_eq!(rect.min().x, 63.5);
        assert_eq!(rect.min().y, 2.5);
        assert_eq!(rect.max().x, 99.5);
        assert_eq!(rect.max().y, 38.5);
    }
}
