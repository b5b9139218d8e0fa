use crate::core::codec::{decode_cell, encode_cell};
use crate::core::constants::CODE_LENGTH;
use crate::core::format::{format_code, parse_code};
use crate::util::coord::Coordinate;
use crate::util::error::DigipinError;
use geo_types::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// A terminal DIGIPIN cell: the code together with its geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinCell {
    /// Canonical dash-grouped code (`XXX-XXX-XXXX`)
    pub code: String,
    /// Cell center, x = longitude, y = latitude
    pub center: Point<f64>,
    /// Cell bounds, x = longitude, y = latitude
    pub bounds: Rect<f64>,
    /// Subdivision depth of the cell (always the full code length)
    pub level: u8,
}

impl PinCell {
    /// Create a PinCell from a latitude/longitude pair.
    ///
    /// # Example
    /// ```
    /// use digipin_rs::PinCell;
    ///
    /// # fn main() -> Result<(), digipin_rs::DigipinError> {
    /// let cell = PinCell::from_latlon(28.6139, 77.2090)?;
    /// assert_eq!(cell.code, "39J-438-TJC7");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_latlon(lat: f64, lon: f64) -> Result<Self, DigipinError> {
        let (code, region) = encode_cell(lat, lon)?;
        let (center_lat, center_lon) = region.center();

        Ok(Self {
            code,
            center: Point::new(center_lon, center_lat),
            bounds: region.to_rect(),
            level: CODE_LENGTH as u8,
        })
    }

    /// Create a PinCell from a WGS84 coordinate (x = longitude, y = latitude).
    ///
    /// # Example
    /// ```
    /// use digipin_rs::PinCell;
    /// use geo_types::point;
    ///
    /// # fn main() -> Result<(), digipin_rs::DigipinError> {
    /// let pt = point! { x: 77.2090, y: 28.6139 };
    /// let cell = PinCell::from_wgs84(&pt)?;
    /// assert_eq!(cell.code, "39J-438-TJC7");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84<C: Coordinate>(coord: &C) -> Result<Self, DigipinError> {
        Self::from_latlon(coord.y(), coord.x())
    }

    /// Create a PinCell from an existing DIGIPIN code.
    ///
    /// The stored code is the canonical form regardless of the input's case
    /// or separator placement.
    ///
    /// # Example
    /// ```
    /// use digipin_rs::PinCell;
    ///
    /// # fn main() -> Result<(), digipin_rs::DigipinError> {
    /// let cell = PinCell::from_code("39j438tjc7")?;
    /// assert_eq!(cell.code, "39J-438-TJC7");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: &str) -> Result<Self, DigipinError> {
        let canonical = format_code(&parse_code(code)?);
        let region = decode_cell(&canonical)?;
        let (center_lat, center_lon) = region.center();

        Ok(Self {
            code: canonical,
            center: Point::new(center_lon, center_lat),
            bounds: region.to_rect(),
            level: CODE_LENGTH as u8,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// Latitude span of the cell in degrees.
    pub fn lat_span(&self) -> f64 {
        self.bounds.max().y - self.bounds.min().y
    }

    /// Longitude span of the cell in degrees.
    pub fn lon_span(&self) -> f64 {
        self.bounds.max().x - self.bounds.min().x
    }

    /// Inclusive containment test against the cell bounds.
    pub fn contains<C: Coordinate>(&self, coord: &C) -> bool {
        coord.y() >= self.bounds.min().y
            && coord.y() <= self.bounds.max().y
            && coord.x() >= self.bounds.min().x
            && coord.x() <= self.bounds.max().x
    }

    /// The cell rectangle as a closed polygon ring.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bounds.to_polygon()
    }
}
