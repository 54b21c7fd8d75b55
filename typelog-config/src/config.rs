//! Logger configuration types, parsing and loading.

use crate::defaults;
use crate::env;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A single log type preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConfig {
    /// Label printed in front of each line, e.g. `log` or `error`.
    pub name: String,
    /// SGR parameter including the terminating `m`, e.g. `36m`.
    ///
    /// Falls back to [`LoggerConfig::default_color`] when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TypeConfig {
    pub fn new(name: impl Into<String>, color: Option<&str>) -> Self {
        Self {
            name: name.into(),
            color: color.map(str::to_string),
        }
    }
}

/// Log types to register at construction plus rendering switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Types in registration order.
    pub types: Vec<TypeConfig>,

    /// Emit SGR color sequences around type labels.
    #[serde(default = "defaults::colors")]
    pub colors: bool,

    /// Color used for types that do not name one.
    #[serde(default = "defaults::default_color")]
    pub default_color: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            types: Vec::new(),
            colors: defaults::colors(),
            default_color: defaults::default_color(),
        }
    }
}

impl LoggerConfig {
    /// The conventional pair of types: cyan `log` and red `error`.
    pub fn standard() -> Self {
        Self {
            types: vec![
                TypeConfig::new("log", Some("36m")),
                TypeConfig::new("error", Some("31m")),
            ],
            ..Self::default()
        }
    }

    /// Parse a configuration from YAML source.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(source)?)
    }

    /// Parse a configuration from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load and validate a configuration file.
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading logger config from {:?}", path);

        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to read logger config: {:?}", path))?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let config = if is_toml {
            Self::from_toml_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
        .with_context(|| format!("Failed to parse logger config: {:?}", path))?;

        config
            .validate()
            .with_context(|| format!("Invalid logger config: {:?}", path))?;

        log::info!(
            "Logger config loaded with {} types (colors: {})",
            config.types.len(),
            config.colors
        );
        Ok(config)
    }

    /// Location of the per-user configuration file.
    ///
    /// `<config dir>/typelog/config.yaml`, or `config.yaml` in the working
    /// directory when no config directory is known for the platform.
    pub fn default_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("typelog").join("config.yaml"),
            None => PathBuf::from("config.yaml"),
        }
    }

    /// Load the per-user configuration, or defaults when it does not exist.
    pub fn load_default() -> Result<Self> {
        Self::load_or_default(&Self::default_path())
    }

    /// Load `path`, or return defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No logger config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Check that every type has a non-empty, unique name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, ty) in self.types.iter().enumerate() {
            if ty.name.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "type #{} has an empty name",
                    index + 1
                )));
            }
            if !seen.insert(ty.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "type '{}' is listed more than once",
                    ty.name
                )));
            }
        }
        Ok(())
    }

    /// Apply `NO_COLOR` / `TYPELOG_COLORS` from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply the color overrides using `lookup` in place of the environment.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.colors = env::resolve_colors(self.colors, lookup);
    }

    /// Color to register `ty` with.
    pub fn color_for<'a>(&'a self, ty: &'a TypeConfig) -> &'a str {
        match ty.color.as_deref() {
            Some(color) if !color.is_empty() => color,
            _ if !self.default_color.is_empty() => self.default_color.as_str(),
            _ => defaults::DEFAULT_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert!(config.types.is_empty());
        assert!(config.colors);
        assert_eq!(config.default_color, "30m");
    }

    #[test]
    fn test_standard_preset() {
        let config = LoggerConfig::standard();
        let names: Vec<&str> = config.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["log", "error"]);
        assert_eq!(config.color_for(&config.types[1]), "31m");
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let config = LoggerConfig::from_yaml_str("types:\n  - name: log\n").unwrap();
        assert_eq!(config.types, vec![TypeConfig::new("log", None)]);
        assert!(config.colors);
        assert_eq!(config.color_for(&config.types[0]), "30m");
    }

    #[test]
    fn test_toml_parsing() {
        let source = r#"
colors = false
default_color = "37m"

[[types]]
name = "log"
color = "36m"

[[types]]
name = "warn"
"#;
        let config = LoggerConfig::from_toml_str(source).unwrap();
        assert!(!config.colors);
        assert_eq!(config.types.len(), 2);
        assert_eq!(config.color_for(&config.types[0]), "36m");
        assert_eq!(config.color_for(&config.types[1]), "37m");
    }

    #[test]
    fn test_empty_color_falls_back() {
        let config = LoggerConfig {
            default_color: String::new(),
            ..LoggerConfig::default()
        };
        let ty = TypeConfig::new("log", Some(""));
        assert_eq!(config.color_for(&ty), "30m");
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = LoggerConfig::from_yaml_str("types: [name: {").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let config = LoggerConfig {
            types: vec![
                TypeConfig::new("log", None),
                TypeConfig::new("log", Some("31m")),
            ],
            ..LoggerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'log' is listed more than once"));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let config = LoggerConfig {
            types: vec![TypeConfig::new("", None)],
            ..LoggerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_apply_env_with() {
        let mut config = LoggerConfig::default();
        config.apply_env_with(|key| (key == "NO_COLOR").then(|| "1".to_string()));
        assert!(!config.colors);
    }

    #[test]
    fn test_yaml_round_trip_omits_missing_color() {
        let yaml = serde_yaml_ng::to_string(&LoggerConfig {
            types: vec![TypeConfig::new("log", None)],
            ..LoggerConfig::default()
        })
        .unwrap();
        assert!(!yaml.contains("color: null"));
        let parsed = LoggerConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.types[0].color, None);
    }
}
