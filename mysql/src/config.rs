//! Configuration types for ddlkit.toml

use ddlkit_core::ConfigError;
use ddlkit_types::mysql::DialectLimits;
use serde::{Deserialize, Serialize};

/// Table options applied to every generated CREATE TABLE
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Storage engine, e.g. `InnoDB`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    /// Default character set, e.g. `utf8mb4`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    /// Drop an existing table before creating it
    #[serde(default)]
    pub overwrite: bool,
}

/// Main configuration struct for ddlkit.toml
///
/// Loaded once, then only borrowed.
///
/// # Examples
///
/// ```
/// use ddlkit_mysql::DdlConfig;
///
/// let config = DdlConfig::parse(r#"
///     [limits]
///     default_string_length = 100
///
///     [table]
///     engine = "InnoDB"
/// "#).unwrap();
///
/// assert_eq!(config.limits.default_string_length, 100);
/// assert_eq!(config.limits.max_indexable_varchar_length, 255);
/// assert_eq!(config.table.engine.as_deref(), Some("InnoDB"));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DdlConfig {
    /// Dialect limits; unset keys keep the stock MySQL values
    #[serde(default)]
    pub limits: DialectLimits,
    /// Table options
    #[serde(default)]
    pub table: TableOptions,
}

impl DdlConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject limits that contradict each other
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        if limits.default_string_length == 0 {
            return Err(ConfigError::ParseError(
                "limits.default_string_length must be positive".into(),
            ));
        }
        if limits
            .tier_for_length(limits.default_string_length)
            .is_some()
        {
            return Err(ConfigError::ParseError(format!(
                "limits.default_string_length {} collides with a TEXT tier length",
                limits.default_string_length
            )));
        }
        if limits.default_string_length > limits.max_indexable_varchar_length {
            return Err(ConfigError::ParseError(format!(
                "limits.default_string_length {} exceeds limits.max_indexable_varchar_length {}",
                limits.default_string_length, limits.max_indexable_varchar_length
            )));
        }
        Ok(())
    }
}
