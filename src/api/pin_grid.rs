use crate::api::cell::PinCell;
use crate::core::codec::{Region, encode};
use crate::core::constants::{CELLS_PER_AXIS, CODE_LENGTH, TERMINAL_LAT_SPAN, TERMINAL_LON_SPAN};
use crate::util::coord::Coordinate;
use crate::util::error::DigipinError;
use geo_types::{Polygon, Rect};
use rayon::prelude::*;

/// Upper bound on cells a single grid may hold (512 x 512).
///
/// Terminal cells are roughly 3.8 m on a side, so anything beyond a
/// neighbourhood-sized extent produces an unusable number of cells.
pub const MAX_GRID_CELLS: u64 = 1 << 18;

/// A collection of terminal DIGIPIN cells covering a lat/lon extent.
///
/// Cells are generated in row-major order, north to south and west to east.
#[derive(Debug, Clone)]
pub struct PinGrid {
    cells: Vec<PinCell>,
}

impl PinGrid {
    pub fn builder() -> PinGridBuilder {
        PinGridBuilder::new()
    }

    /// Build a grid for the extent, clamped to the supported region.
    ///
    /// Fails with [`DigipinError::ExtentTooLarge`] when the extent spans more
    /// than [`MAX_GRID_CELLS`] terminal cells. An extent entirely outside the
    /// supported region yields an empty grid.
    pub fn from_extent(
        min_lon: f64,
        min_lat: f64,
        max_lon: f64,
        max_lat: f64,
    ) -> Result<Self, DigipinError> {
        let cells = generate_cells_for_extent(min_lon, min_lat, max_lon, max_lat)?;
        Ok(Self { cells })
    }

    pub fn from_rect(rect: &Rect<f64>) -> Result<Self, DigipinError> {
        Self::from_extent(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }

    /// Subdivision depth of every cell in the grid.
    pub fn level(&self) -> u8 {
        CODE_LENGTH as u8
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[PinCell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &PinCell> {
        self.cells.iter()
    }

    /// Find the grid cell containing a coordinate (x = lon, y = lat).
    pub fn get_cell_at<C: Coordinate>(&self, coord: &C) -> Option<&PinCell> {
        let code = encode(coord.y(), coord.x()).ok()?;
        self.cells.iter().find(|cell| cell.code == code)
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.iter().map(|cell| cell.to_polygon()).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&PinCell>
    where
        F: Fn(&PinCell) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }

    /// Serialise the grid as a GeoJSON FeatureCollection.
    ///
    /// Each feature carries the cell polygon plus `digipin` and `level`
    /// properties.
    pub fn to_geojson(&self) -> String {
        let features = self
            .cells
            .iter()
            .map(|cell| {
                let mut properties = serde_json::Map::new();
                properties.insert(
                    "digipin".to_string(),
                    serde_json::Value::from(cell.code.as_str()),
                );
                properties.insert("level".to_string(), serde_json::Value::from(cell.level));

                geojson::Feature {
                    bbox: None,
                    geometry: Some(geojson::Geometry::from(&cell.to_polygon())),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        geojson::GeoJson::FeatureCollection(geojson::FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        })
        .to_string()
    }
}

#[derive(Debug, Default)]
pub struct PinGridBuilder {
    min_lon: Option<f64>,
    min_lat: Option<f64>,
    max_lon: Option<f64>,
    max_lat: Option<f64>,
}

impl PinGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extent(mut self, min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        self.min_lon = Some(min_lon);
        self.min_lat = Some(min_lat);
        self.max_lon = Some(max_lon);
        self.max_lat = Some(max_lat);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.min_lon = Some(rect.min().x);
        self.min_lat = Some(rect.min().y);
        self.max_lon = Some(rect.max().x);
        self.max_lat = Some(rect.max().y);
        self
    }

    pub fn build(self) -> Result<PinGrid, DigipinError> {
        let min_lon = self.min_lon.expect("extent must be set");
        let min_lat = self.min_lat.expect("extent must be set");
        let max_lon = self.max_lon.expect("extent must be set");
        let max_lat = self.max_lat.expect("extent must be set");

        PinGrid::from_extent(min_lon, min_lat, max_lon, max_lat)
    }
}

fn generate_cells_for_extent(
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
) -> Result<Vec<PinCell>, DigipinError> {
    if !(min_lon.is_finite() && min_lat.is_finite() && max_lon.is_finite() && max_lat.is_finite()) {
        return Err(DigipinError::InvalidCoordinate);
    }

    let root = Region::root();
    let min_lon = min_lon.max(root.min_lon);
    let max_lon = max_lon.min(root.max_lon);
    let min_lat = min_lat.max(root.min_lat);
    let max_lat = max_lat.min(root.max_lat);
    if min_lon > max_lon || min_lat > max_lat {
        return Ok(Vec::new());
    }

    let last = CELLS_PER_AXIS - 1;
    // Row 0 is the cell row touching the region's northern edge
    let row_start = (((root.max_lat - max_lat) / TERMINAL_LAT_SPAN).floor() as u64).min(last);
    let row_end = (((root.max_lat - min_lat) / TERMINAL_LAT_SPAN).floor() as u64).min(last);
    let col_start = (((min_lon - root.min_lon) / TERMINAL_LON_SPAN).floor() as u64).min(last);
    let col_end = (((max_lon - root.min_lon) / TERMINAL_LON_SPAN).floor() as u64).min(last);

    let cell_count = (row_end - row_start + 1) * (col_end - col_start + 1);
    if cell_count > MAX_GRID_CELLS {
        return Err(DigipinError::ExtentTooLarge(cell_count));
    }

    let rows: Vec<Vec<PinCell>> = (row_start..row_end + 1)
        .into_par_iter()
        .map(|row| {
            let lat = root.max_lat - (row as f64 + 0.5) * TERMINAL_LAT_SPAN;
            (col_start..col_end + 1)
                .filter_map(|col| {
                    let lon = root.min_lon + (col as f64 + 0.5) * TERMINAL_LON_SPAN;
                    PinCell::from_latlon(lat, lon).ok()
                })
                .collect()
        })
        .collect();

    Ok(rows.into_iter().flatten().collect())
}
