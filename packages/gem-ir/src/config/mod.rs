//! Configuration for flop counting
//!
//! Two levels:
//! - Level 1: Preset - `FlopCountConfig::from_preset(Preset::Fast)`
//! - Level 2: Field override - builder methods or a YAML file
//!
//! # Examples
//!
//! ```rust,ignore
//! use gem_ir::config::{FlopCountConfig, Preset};
//!
//! let config = FlopCountConfig::from_preset(Preset::Thorough).hotspot_limit(25);
//! config.validate()?;
//!
//! let config = FlopCountConfig::from_yaml("flops.yaml")?;
//! ```

pub mod error;
pub mod flop_config;
pub mod io;
pub mod preset;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use flop_config::FlopCountConfig;
pub use io::{ConfigExportV1, FlopCountOverrides};
pub use preset::Preset;
pub use validation::Validatable;
