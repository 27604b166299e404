//! Error types shared by the voxmap crates.

use thiserror::Error;

/// Errors raised by grid construction, rasterization and mesh synthesis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    /// Non-positive pitch, zero voxel size, non-finite origin and similar.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// One feature row per point: the row counts differ.
    #[error("shape mismatch: expected {expected} feature rows, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    /// A feature row is not `nchannel` wide.
    #[error("feature row {row} has {got} channels, grid stores {expected}")]
    ChannelMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// The geometry factory returned something the synthesizer cannot color.
    #[error("geometry error: {message}")]
    Geometry { message: String },

    #[error(transparent)]
    Config(#[from] ConfigLoadError),
}

impl MappingError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        MappingError::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Failure to read or parse a configuration document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    #[error("failed to read config: {0}")]
    Io(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, MappingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_details() {
        let err = MappingError::ShapeMismatch {
            expected: 12,
            got: 9,
        };
        let text = err.to_string();
        assert!(text.contains("12"));
        assert!(text.contains('9'));

        let err = MappingError::ChannelMismatch {
            row: 4,
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "feature row 4 has 2 channels, grid stores 3");

        let err = MappingError::invalid_config("pitch must be > 0");
        assert_eq!(err.to_string(), "invalid configuration: pitch must be > 0");
    }

    #[test]
    fn config_errors_convert() {
        let err: MappingError = ConfigLoadError::Parse("bad yaml".into()).into();
        assert_eq!(err.to_string(), "failed to parse config: bad yaml");
    }
}
