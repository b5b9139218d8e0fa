/// The 4x4 DIGIPIN symbol grid.
///
/// Authored in visual map orientation: row 0 is the northernmost latitude
/// band, column 0 the westernmost longitude band.
pub const SYMBOL_GRID: [[char; 4]; 4] = [
    ['F', 'C', '9', '8'],
    ['J', '3', '2', '7'],
    ['K', '4', '5', '6'],
    ['L', 'M', 'P', 'T'],
];

/// Grid dimension per axis (4 rows x 4 columns per subdivision level)
pub const GRID_DIM: usize = 4;

/// Supported region extents [min_lon, min_lat, max_lon, max_lat], inclusive
pub const REGION_EXTENTS: [f64; 4] = [63.5, 2.5, 99.5, 38.5];

/// Number of subdivision levels, one output symbol per level
pub const CODE_LENGTH: usize = 10;

/// Separator character used when grouping a code for display
pub const SEPARATOR: char = '-';

/// Symbol offsets at which a separator is inserted (XXX-XXX-XXXX)
pub const SEPARATOR_POSITIONS: [usize; 2] = [3, 6];

/// Terminal cells per axis after all levels (4^10)
pub const CELLS_PER_AXIS: u64 = 1 << (2 * CODE_LENGTH);

/// Latitude span of a terminal cell in degrees
pub const TERMINAL_LAT_SPAN: f64 = (REGION_EXTENTS[3] - REGION_EXTENTS[1]) / CELLS_PER_AXIS as f64;

/// Longitude span of a terminal cell in degrees
pub const TERMINAL_LON_SPAN: f64 = (REGION_EXTENTS[2] - REGION_EXTENTS[0]) / CELLS_PER_AXIS as f64;

/// Looks up a symbol's (row, col) position in [`SYMBOL_GRID`].
///
/// Returns `None` for characters outside the 16-symbol alphabet. Lookup is
/// case-sensitive; callers normalise to upper case first.
pub fn symbol_position(symbol: char) -> Option<(usize, usize)> {
    for (row, symbols) in SYMBOL_GRID.iter().enumerate() {
        for (col, &s) in symbols.iter().enumerate() {
            if s == symbol {
                return Some((row, col));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: HashSet<char> = SYMBOL_GRID.iter().flatten().copied().collect();
        assert_eq!(symbols.len(), GRID_DIM * GRID_DIM);
    }

    #[test]
    fn test_symbol_position_inverse() {
        for (row, symbols) in SYMBOL_GRID.iter().enumerate() {
            for (col, &s) in symbols.iter().enumerate() {
                assert_eq!(symbol_position(s), Some((row, col)));
            }
        }
    }

    #[test]
    fn test_symbol_position_rejects_unknown() {
        assert_eq!(symbol_position('A'), None);
        assert_eq!(symbol_position('0'), None);
        assert_eq!(symbol_position('-'), None);
        assert_eq!(symbol_position('f'), None);
    }

    #[test]
    fn test_region_extents_are_ordered() {
        assert!(REGION_EXTENTS[0] < REGION_EXTENTS[2]);
        assert!(REGION_EXTENTS[1] < REGION_EXTENTS[3]);
    }

    #[test]
    fn test_terminal_spans() {
        assert!((TERMINAL_LAT_SPAN - 36.0 / 1_048_576.0).abs() < 1e-15);
        assert!((TERMINAL_LON_SPAN - 36.0 / 1_048_576.0).abs() < 1e-15);
    }
}
