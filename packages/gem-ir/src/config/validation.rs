//! Configuration validation
//!
//! Code that accepts a configuration depends on the `Validatable` trait, not
//! on concrete config types.

use super::error::ConfigResult;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use gem_ir::config::Validatable;
///
/// fn build_analyzer<C: Validatable>(config: C) -> Result<Analyzer, ConfigError> {
///     config.validate()?;
///     // ... build analyzer
/// }
/// ```
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}
