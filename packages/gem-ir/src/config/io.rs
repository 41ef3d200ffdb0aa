//! Configuration I/O schema (YAML)
//!
//! Defines the on-disk schema types. Loading and saving live on
//! `FlopCountConfig`.

use serde::{Deserialize, Serialize};

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (must be 1). Optional here so a missing field gets a
    /// dedicated error instead of a generic parse failure.
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset (defaults to balanced)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Field overrides applied on top of the preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<FlopCountOverrides>,
}

/// Field overrides (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlopCountOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotspot_limit: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind_breakdown: Option<bool>,
}
