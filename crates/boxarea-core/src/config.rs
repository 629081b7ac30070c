//! Loader configuration
//!
//! Defaults match the reference dataset: comma-delimited, header detected
//! automatically, building id separated from the box sequence by `_`.
//!
//! ```toml
//! delimiter = ";"
//! header = "present"
//! building_separator = "-"
//! ```

use crate::building::DEFAULT_SEPARATOR;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the first line of a file is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Skip the first line when its coordinates do not parse as numbers
    #[default]
    Auto,
    /// First line is always a header
    Present,
    /// Every line is data
    Absent,
}

/// Settings for reading box files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Field delimiter
    pub delimiter: char,
    /// Header handling
    pub header: HeaderMode,
    /// Separator between building id and the rest of a box id
    pub building_separator: char,
}

impl LoaderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With field delimiter
    #[inline]
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// With header mode
    #[inline]
    #[must_use]
    pub fn with_header(mut self, header: HeaderMode) -> Self {
        self.header = header;
        self
    }

    /// With building id separator
    #[inline]
    #[must_use]
    pub fn with_building_separator(mut self, separator: char) -> Self {
        self.building_separator = separator;
        self
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    /// - `ConfigError::Toml` on malformed TOML
    /// - `ConfigError::Invalid` if the delimiter would clash with numbers
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a TOML file
    ///
    /// # Errors
    /// `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check that the delimiter cannot occur inside a numeric field
    ///
    /// # Errors
    /// `ConfigError::Invalid` describing the offending value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = self.delimiter;
        if d.is_alphanumeric() || d.is_whitespace() || matches!(d, '.' | '-' | '+') {
            return Err(ConfigError::Invalid(format!(
                "delimiter {d:?} clashes with numeric fields"
            )));
        }
        Ok(())
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            header: HeaderMode::Auto,
            building_separator: DEFAULT_SEPARATOR,
        }
    }
}
