/// Error type for digipin-rs operations.
#[derive(Debug, PartialEq)]
pub enum DigipinError {
    /// A coordinate value is not a finite number.
    InvalidCoordinate,
    /// A coordinate lies outside the supported bounding region.
    OutOfRegion { lat: f64, lon: f64 },
    /// A code has the wrong symbol count or contains an unknown character.
    MalformedCode(String),
    /// A requested grid extent spans more terminal cells than the limit.
    ExtentTooLarge(u64),
    /// CSV parsing or writing error.
    CsvError(String),
    /// File I/O error.
    IoError(String),
}

impl std::fmt::Display for DigipinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigipinError::InvalidCoordinate => write!(f, "Coordinate is not a finite number"),
            DigipinError::OutOfRegion { lat, lon } => {
                write!(f, "Coordinate ({}, {}) is outside the supported region", lat, lon)
            }
            DigipinError::MalformedCode(msg) => write!(f, "Malformed DIGIPIN code: {}", msg),
            DigipinError::ExtentTooLarge(cells) => {
                write!(f, "Extent spans {} terminal cells, over the grid limit", cells)
            }
            DigipinError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            DigipinError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for DigipinError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = DigipinError::OutOfRegion { lat: 51.5, lon: -0.1 };
        assert!(err.to_string().contains("51.5"));
        assert!(err.to_string().contains("outside"));

        let err = DigipinError::MalformedCode("invalid character 'A'".to_string());
        assert!(err.to_string().contains("'A'"));
    }
}
