#![forbid(unsafe_code)]

//! Tunable constants of the resolver as data.
//!
//! [`ResolverConfig::default()`] reproduces the built-in behavior exactly, so
//! loading a config is only needed to change it. With the `config` feature
//! it can be read from TOML or JSON:
//!
//! ```toml
//! # tagloc.toml
//! default_font_size = 14.0
//! style_markers = ["regular", "medium", "semibold", "bold", "light", "italic"]
//! style_key_prefix = "font"
//! warn_on_empty_key = true
//! ```
//!
//! ```rust,ignore
//! let config = ResolverConfig::from_toml_file("tagloc.toml")?;
//! let resolver = KeyResolver::with_config(catalog, config);
//! ```

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::font::{FontStyle, STYLE_KEY_PREFIX};

/// Point size used when neither a size key nor an observed font gives one.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Resolver parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ResolverConfig {
    /// Fallback point size.
    pub default_font_size: f64,
    /// Markers searched in font names, in match order.
    pub style_markers: Vec<String>,
    /// Prefix of inferred style keys (`<prefix>.<marker>`).
    pub style_key_prefix: String,
    /// Emit a warning when a widget carries an empty key.
    pub warn_on_empty_key: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_font_size: DEFAULT_FONT_SIZE,
            style_markers: FontStyle::ALL
                .into_iter()
                .map(|s| s.marker().to_string())
                .collect(),
            style_key_prefix: STYLE_KEY_PREFIX.to_string(),
            warn_on_empty_key: true,
        }
    }
}

impl ResolverConfig {
    /// Load from a TOML string and validate.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file on disk and validate.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string and validate.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check every field; reports all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !(self.default_font_size.is_finite() && self.default_font_size > 0.0) {
            errors.push(format!(
                "default_font_size must be a positive number, got {}",
                self.default_font_size
            ));
        }
        if self.style_markers.is_empty() {
            errors.push("style_markers must not be empty".to_string());
        }
        for (i, marker) in self.style_markers.iter().enumerate() {
            if marker.trim().is_empty() {
                errors.push(format!("style_markers[{i}] is blank"));
            }
        }
        if self.style_key_prefix.contains(char::is_whitespace) {
            errors.push(format!(
                "style_key_prefix must not contain whitespace, got {:?}",
                self.style_key_prefix
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
