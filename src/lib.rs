//! # digipin-rs
//!
//! A Rust implementation of DIGIPIN, India Post's open geocoding grid. A
//! DIGIPIN is a 10-symbol alphanumeric code naming a roughly 3.8 m x 3.8 m
//! cell, obtained by recursively subdividing the supported region
//! (latitude 2.5..=38.5, longitude 63.5..=99.5) into a 4x4 grid ten times.
//!
//! There are three main entry points.
//!
//! ### 1. `encode` / `decode` - Plain Codec Functions
//!
//! ```
//! use digipin_rs::{decode, encode};
//!
//! # fn main() -> Result<(), digipin_rs::DigipinError> {
//! let code = encode(28.6139, 77.2090)?;
//! assert_eq!(code, "39J-438-TJC7");
//!
//! let (lat, lon) = decode(&code)?;
//! assert!((lat - 28.6139).abs() < 1e-4);
//! assert!((lon - 77.2090).abs() < 1e-4);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `PinCell` / `PinGrid` - Cell Geometry
//!
//! ```
//! use digipin_rs::{PinCell, PinGrid};
//!
//! # fn main() -> Result<(), digipin_rs::DigipinError> {
//! let cell = PinCell::from_latlon(28.6139, 77.2090)?;
//! let polygon = cell.to_polygon();
//!
//! let grid = PinGrid::builder()
//!     .extent(77.2085, 28.6135, 77.2095, 28.6143)
//!     .build()?;
//! assert!(!grid.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToDigipin` - CSV File Conversion
//!
//! Convert CSV files with latitude/longitude columns to DIGIPIN-indexed CSVs:
//!
//! ```no_run
//! use digipin_rs::{CsvPinConfig, CsvToDigipin, GeometryFormat};
//!
//! let config = CsvPinConfig::from_coords("Latitude", "Longitude")
//!     .exclude(vec!["Remarks".into()])
//!     .with_cell_geometry(GeometryFormat::Wkt);
//!
//! // Using trait method
//! "offices.csv".to_digipin_csv("offices_digipin.csv", &config).unwrap();
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{
    CsvPinConfig, CsvToDigipin, GeometryFormat, MAX_GRID_CELLS, PinCell, PinGrid, PinGridBuilder,
    csv_to_digipin_csv,
};
pub use crate::core::{
    CELLS_PER_AXIS, CODE_LENGTH, GRID_DIM, REGION_EXTENTS, Region, SEPARATOR, SEPARATOR_POSITIONS,
    SYMBOL_GRID, TERMINAL_LAT_SPAN, TERMINAL_LON_SPAN, decode, decode_cell, encode, encode_cell,
    format_code, parse_code, symbol_position,
};
pub use crate::util::{Coordinate, DigipinError};

pub use geo_types;
