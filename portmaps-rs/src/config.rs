/**
 * config.rs
 * Parser for .portmap.yaml files
 *
 * Format:
 * ```yaml
 * fallback:
 *   label: "Port {code}"
 *   color: "#6c757d"
 * format: table
 * ```
 *
 * The fallback is consumer policy for codes the table does not define.
 * The table itself never gains entries from here.
 */

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::errors::{PortmapError, Result};
use crate::export::OutputFormat;
use crate::port::{color_of, is_hex_color, label_of, PortCode};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".portmap.yaml";

/// Placeholder replaced by the port number in fallback labels
pub const CODE_PLACEHOLDER: &str = "{code}";

pub const DEFAULT_FALLBACK_LABEL: &str = "Port {code}";
pub const DEFAULT_FALLBACK_COLOR: &str = "#6c757d";

/// Rendering used for unmapped codes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Fallback {
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_label() -> String {
    DEFAULT_FALLBACK_LABEL.to_string()
}

fn default_color() -> String {
    DEFAULT_FALLBACK_COLOR.to_string()
}

impl Default for Fallback {
    fn default() -> Self {
        Fallback {
            label: default_label(),
            color: default_color(),
        }
    }
}

/// .portmap.yaml file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default)]
    pub fallback: Fallback,
    #[serde(default)]
    pub format: OutputFormat,
}

impl DisplayConfig {
    /// Load config from a YAML file
    ///
    /// A missing file yields the default config.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(DisplayConfig::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `.portmap.yaml` from a directory
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::load(dir.as_ref().join(CONFIG_FILE_NAME))
    }

    /// Parse and validate YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(DisplayConfig::default());
        }

        let config: DisplayConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !is_hex_color(&self.fallback.color) {
            return Err(PortmapError::Config(format!(
                "fallback.color must be #rrggbb, got: {}",
                self.fallback.color
            )));
        }
        if self.fallback.label.trim().is_empty() {
            return Err(PortmapError::Config("fallback.label must not be empty".to_string()));
        }
        Ok(())
    }

    /// Save config as YAML
    ///
    /// Refuses configs that `load` would reject.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate()?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path.as_ref(), yaml)?;
        Ok(())
    }

    pub fn fallback_label(&self, code: PortCode) -> String {
        self.fallback.label.replace(CODE_PLACEHOLDER, &code.to_string())
    }

    pub fn fallback_color(&self) -> &str {
        &self.fallback.color
    }

    /// Table label, or the fallback for unmapped codes
    pub fn label_or_fallback(&self, code: PortCode) -> Cow<'static, str> {
        match label_of(code) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(self.fallback_label(code)),
        }
    }

    /// Table color, or the fallback for unmapped codes
    pub fn color_or_fallback(&self, code: PortCode) -> Cow<'static, str> {
        match color_of(code) {
            Some(color) => Cow::Borrowed(color),
            None => Cow::Owned(self.fallback.color.clone()),
        }
    }
}
