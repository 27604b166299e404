#![forbid(unsafe_code)]

pub mod bbox;
pub mod cloud;
pub mod color;
pub mod error;
pub mod point;

pub use bbox::Aabb;
pub use cloud::FeatureCloud;
pub use color::Rgba;
pub use error::{ConfigLoadError, MappingError, Result};
pub use point::Point3;
