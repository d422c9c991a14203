//! Error types
//!
//! Only the edges of the emulator can fail: building a controller for a
//! geometry the HD44780U cannot drive, and loading a configuration file.
//! Everything the bus can send is accepted.

use hd44780_specs::{MAX_COLUMNS, MIN_COLUMNS, SUPPORTED_ROWS};
use thiserror::Error;

/// Construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LcdError {
    /// Column count outside 8-40
    #[error("invalid column count {0} (supported: 8-40)")]
    InvalidColumns(u8),
    /// Row count other than 1, 2 or 4
    #[error("invalid row count {0} (supported: 1, 2 or 4)")]
    InvalidRows(u8),
}

impl LcdError {
    /// Check a geometry, reporting columns before rows
    pub fn check_geometry(columns: u8, rows: u8) -> Result<(), Self> {
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&columns) {
            return Err(LcdError::InvalidColumns(columns));
        }
        if !SUPPORTED_ROWS.contains(&rows) {
            return Err(LcdError::InvalidRows(rows));
        }
        Ok(())
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON did not parse or did not match the schema
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// JSON parsed but describes an unsupported display
    #[error("unsupported geometry: {0}")]
    Geometry(#[from] LcdError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_geometry() {
        assert_eq!(LcdError::check_geometry(16, 2), Ok(()));
        assert_eq!(LcdError::check_geometry(8, 1), Ok(()));
        assert_eq!(LcdError::check_geometry(40, 4), Ok(()));
        assert_eq!(
            LcdError::check_geometry(7, 2),
            Err(LcdError::InvalidColumns(7))
        );
        assert_eq!(
            LcdError::check_geometry(41, 3),
            Err(LcdError::InvalidColumns(41))
        );
        assert_eq!(LcdError::check_geometry(16, 0), Err(LcdError::InvalidRows(0)));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            LcdError::InvalidColumns(41).to_string(),
            "invalid column count 41 (supported: 8-40)"
        );
        assert_eq!(
            LcdError::InvalidRows(3).to_string(),
            "invalid row count 3 (supported: 1, 2 or 4)"
        );
        let wrapped = ConfigError::from(LcdError::InvalidRows(0));
        assert!(wrapped.to_string().starts_with("unsupported geometry"));
    }
}
