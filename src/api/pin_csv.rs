use crate::api::cell::PinCell;
use crate::util::error::DigipinError;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use wkt::ToWkt;

/// Output format for cell polygon geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Configuration for CSV to DIGIPIN conversion.
#[derive(Debug, Clone)]
pub struct CsvPinConfig {
    pub lat_column: String,
    pub lon_column: String,
    pub exclude_columns: Vec<String>,
    pub include_cell_geometry: Option<GeometryFormat>,
}

impl CsvPinConfig {
    /// Create config for a CSV with latitude/longitude columns.
    ///
    /// # Example
    /// ```
    /// use digipin_rs::CsvPinConfig;
    ///
    /// let config = CsvPinConfig::from_coords("Latitude", "Longitude");
    /// ```
    pub fn from_coords(lat_column: impl Into<String>, lon_column: impl Into<String>) -> Self {
        Self {
            lat_column: lat_column.into(),
            lon_column: lon_column.into(),
            exclude_columns: Vec::new(),
            include_cell_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include cell polygon geometry in the output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }
}

pub trait CsvToDigipin {
    fn to_digipin_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvPinConfig,
    ) -> Result<(), DigipinError>;
}

impl<P: AsRef<Path>> CsvToDigipin for P {
    fn to_digipin_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvPinConfig,
    ) -> Result<(), DigipinError> {
        csv_to_digipin_csv(self, output_path, config)
    }
}

fn polygon_to_wkt(polygon: &geo_types::Polygon<f64>) -> String {
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &geo_types::Polygon<f64>) -> String {
    geojson::Geometry::from(polygon).to_string()
}

/// Converts a CSV file with coordinate columns to a CSV file with DIGIPIN codes.
///
/// Streams row by row to keep memory flat for large files. The output gets a
/// leading `digipin` column (plus `cell_geometry` when configured); the source
/// coordinate columns and any excluded columns are dropped. A row with an
/// unparseable or out-of-region coordinate aborts the conversion with the
/// underlying error.
///
/// # Example
///
/// ```no_run
/// use digipin_rs::{CsvPinConfig, GeometryFormat, csv_to_digipin_csv};
///
/// let config = CsvPinConfig::from_coords("Latitude", "Longitude")
///     .exclude(vec!["Remarks".into()])
///     .with_cell_geometry(GeometryFormat::Wkt);
///
/// csv_to_digipin_csv("offices.csv", "offices_digipin.csv", &config).unwrap();
/// ```
pub fn csv_to_digipin_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvPinConfig,
) -> Result<(), DigipinError> {
    let file = File::open(csv_path).map_err(|e| DigipinError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| DigipinError::CsvError(e.to_string()))?
        .clone();

    let lat_idx = headers
        .iter()
        .position(|h| h == config.lat_column)
        .ok_or_else(|| {
            DigipinError::CsvError(format!("Latitude column '{}' not found", config.lat_column))
        })?;
    let lon_idx = headers
        .iter()
        .position(|h| h == config.lon_column)
        .ok_or_else(|| {
            DigipinError::CsvError(format!("Longitude column '{}' not found", config.lon_column))
        })?;

    let mut exclude_indices = HashSet::new();
    exclude_indices.insert(lat_idx);
    exclude_indices.insert(lon_idx);
    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| DigipinError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["digipin"];
    if config.include_cell_geometry.is_some() {
        header_row.push("cell_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| DigipinError::CsvError(e.to_string()))?;

    for result in reader.records() {
        let record = result.map_err(|e| DigipinError::CsvError(e.to_string()))?;

        let lat_str = record
            .get(lat_idx)
            .ok_or_else(|| {
                DigipinError::CsvError(format!("Missing latitude column at index {}", lat_idx))
            })?
            .trim();
        let lon_str = record
            .get(lon_idx)
            .ok_or_else(|| {
                DigipinError::CsvError(format!("Missing longitude column at index {}", lon_idx))
            })?
            .trim();

        let lat: f64 = lat_str
            .parse()
            .map_err(|_| DigipinError::CsvError(format!("Invalid latitude: '{}'", lat_str)))?;
        let lon: f64 = lon_str
            .parse()
            .map_err(|_| DigipinError::CsvError(format!("Invalid longitude: '{}'", lon_str)))?;

        let cell = PinCell::from_latlon(lat, lon)?;

        let mut row: Vec<String> = vec![cell.code.clone()];

        if let Some(format) = config.include_cell_geometry {
            let polygon = cell.to_polygon();
            let geom_str = match format {
                GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
            };
            row.push(geom_str);
        }

        for (i, field) in record.iter().enumerate() {
            if !exclude_indices.contains(&i) {
                row.push(field.to_string());
            }
        }
        writer
            .write_record(&row)
            .map_err(|e| DigipinError::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| DigipinError::CsvError(e.to_string()))?;

    Ok(())
}
