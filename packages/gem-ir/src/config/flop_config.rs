//! Flop counting configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, FlopCountOverrides};
use super::preset::Preset;
use super::validation::Validatable;

/// Upper bound for `hotspot_limit`
pub const MAX_HOTSPOT_LIMIT: usize = 10_000;

/// Settings for `FlopAnalyzer` reports
///
/// The total flop count itself is not configurable; these fields only shape
/// the extra detail a report carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlopCountConfig {
    /// Number of most expensive nodes to report (0..=10000)
    pub hotspot_limit: usize,

    /// Collect per-kind node and flop totals
    pub kind_breakdown: bool,
}

impl FlopCountConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                hotspot_limit: 0,
                kind_breakdown: false,
            },
            Preset::Balanced => Self {
                hotspot_limit: 10,
                kind_breakdown: true,
            },
            Preset::Thorough => Self {
                hotspot_limit: 100,
                kind_breakdown: true,
            },
        }
    }

    /// Builder: set hotspot limit
    pub fn hotspot_limit(mut self, limit: usize) -> Self {
        self.hotspot_limit = limit;
        self
    }

    /// Builder: enable or disable the per-kind breakdown
    pub fn kind_breakdown(mut self, enabled: bool) -> Self {
        self.kind_breakdown = enabled;
        self
    }

    /// Apply overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: FlopCountOverrides) -> Self {
        if let Some(v) = overrides.hotspot_limit {
            self.hotspot_limit = v;
        }
        if let Some(v) = overrides.kind_breakdown {
            self.kind_breakdown = v;
        }
        self
    }

    /// Load and validate a YAML v1 configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML v1 configuration document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        match export.version {
            None => return Err(ConfigError::MissingVersion),
            Some(1) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![1],
                })
            }
        }

        let preset = match export.preset.as_deref() {
            Some(name) => Preset::from_str(name)?,
            None => Preset::default(),
        };

        let mut config = Self::from_preset(preset);
        if let Some(overrides) = export.overrides {
            config = config.with_overrides(overrides);
        }

        config.validate()?;
        tracing::debug!(
            "Loaded flop count config: preset={}, hotspot_limit={}, kind_breakdown={}",
            preset,
            config.hotspot_limit,
            config.kind_breakdown
        );
        Ok(config)
    }

    /// Serialize as a YAML v1 document (balanced preset plus full overrides)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: Some(Preset::default().to_string()),
            overrides: Some(FlopCountOverrides {
                hotspot_limit: Some(self.hotspot_limit),
                kind_breakdown: Some(self.kind_breakdown),
            }),
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }
}

impl Default for FlopCountConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl Validatable for FlopCountConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.hotspot_limit > MAX_HOTSPOT_LIMIT {
            return Err(ConfigError::range_with_hint(
                "hotspot_limit",
                self.hotspot_limit,
                0,
                MAX_HOTSPOT_LIMIT,
                format!(
                    "{} reports at most {} hotspots",
                    self.config_name(),
                    MAX_HOTSPOT_LIMIT
                ),
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "FlopCountConfig"
    }
}
