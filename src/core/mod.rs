pub mod codec;
pub mod constants;
pub mod format;

pub use codec::{Region, decode, decode_cell, encode, encode_cell};
pub use constants::{
    CELLS_PER_AXIS, CODE_LENGTH, GRID_DIM, REGION_EXTENTS, SEPARATOR, SEPARATOR_POSITIONS,
    SYMBOL_GRID, TERMINAL_LAT_SPAN, TERMINAL_LON_SPAN, symbol_position,
};
pub use format::{format_code, parse_code};
