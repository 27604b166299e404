//! Grid configuration, loadable from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use voxmap_core::point::{self, Point3};
use voxmap_core::{ConfigLoadError, MappingError, Result};

/// Frame and shape of a voxel grid. Immutable once a grid is built from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// World position of the outer corner of voxel `(0, 0, 0)`.
    pub origin: Point3,

    /// Edge length of one voxel in world units.
    pub pitch: f32,

    /// Number of voxels along each axis.
    pub voxel_size: usize,

    /// Width of the feature vector stored per voxel.
    pub nchannel: usize,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            origin: [0.0; 3],
            pitch: 0.01,
            voxel_size: 32,
            nchannel: 3,
        }
    }
}

impl MappingConfig {
    pub fn new(origin: Point3, pitch: f32, voxel_size: usize, nchannel: usize) -> Self {
        Self {
            origin,
            pitch,
            voxel_size,
            nchannel,
        }
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a YAML document. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigLoadError::Parse(e.to_string()).into())
    }

    pub fn validate(&self) -> Result<()> {
        if self.voxel_size == 0 {
            return Err(MappingError::invalid_config("voxel_size must be > 0"));
        }
        if !self.pitch.is_finite() || self.pitch <= 0.0 {
            return Err(MappingError::invalid_config(format!(
                "pitch must be > 0 and finite, got {}",
                self.pitch
            )));
        }
        if !point::is_finite(&self.origin) {
            return Err(MappingError::invalid_config(format!(
                "origin must be finite, got {:?}",
                self.origin
            )));
        }

        let cells = self
            .voxel_size
            .checked_pow(3)
            .and_then(|c| c.checked_mul(self.nchannel.max(1)));
        if cells.is_none() {
            return Err(MappingError::invalid_config(format!(
                "voxel_size {} with {} channels does not fit in memory",
                self.voxel_size, self.nchannel
            )));
        }
        Ok(())
    }

    /// World-space edge length of the whole grid on each axis.
    pub fn bounding_extent(&self) -> Point3 {
        [self.voxel_size as f32 * self.pitch; 3]
    }
}
