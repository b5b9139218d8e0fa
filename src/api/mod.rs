pub mod cell;
pub mod pin_csv;
pub mod pin_grid;

pub use cell::PinCell;
pub use pin_csv::{CsvPinConfig, CsvToDigipin, GeometryFormat, csv_to_digipin_csv};
pub use pin_grid::{MAX_GRID_CELLS, PinGrid, PinGridBuilder};
