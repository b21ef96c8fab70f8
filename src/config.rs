//! CLI configuration.
//!
//! An optional TOML file supplies defaults that command-line flags override:
//!
//! ```toml
//! data = "data/HEART_Model.xlsx"
//!
//! [bounds]
//! min = -10.0
//! max = 60.0
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use heartscore_engine::score::Bounds;
use serde::Deserialize;

const MAX_CONFIG_FILE_BYTES: u64 = 65_536;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default data file; relative paths resolve against the working dir.
    pub data: Option<PathBuf>,
    pub bounds: Option<BoundsConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsConfig {
    pub min: f64,
    pub max: f64,
}

impl Config {
    /// Normalization bounds for ad-hoc calculations: the fixed reference
    /// bounds unless the config overrides them.
    pub fn calc_bounds(&self) -> Bounds {
        match &self.bounds {
            Some(b) => Bounds::new(b.min, b.max),
            None => Bounds::REFERENCE,
        }
    }
}

/// Load configuration from an explicit path or the user config dir.
///
/// Config problems are warnings, never fatal: the CLI runs unconfigured.
pub fn load_config(explicit: Option<&Path>) -> (Config, Vec<String>) {
    let mut warnings = Vec::new();
    let path = match explicit.map(Path::to_path_buf).or_else(user_config_path) {
        Some(p) => p,
        None => return (Config::default(), warnings),
    };
    if !path.exists() {
        if explicit.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
        }
        Ok(_) => match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(config) => return (config, warnings),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                }
            },
            Err(err) => warnings.push(format!("Failed to read {}: {}", path.display(), err)),
        },
        Err(err) => warnings.push(format!("Failed to stat {}: {}", path.display(), err)),
    }
    (Config::default(), warnings)
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "heartscore").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            "data = \"data/heart.csv\"\n\n[bounds]\nmin = -5.0\nmax = 40.0\n",
        )
        .unwrap();
        assert_eq!(config.data.as_deref(), Some(Path::new("data/heart.csv")));
        assert_eq!(config.calc_bounds(), Bounds::new(-5.0, 40.0));
    }

    #[test]
    fn test_empty_config_uses_reference_bounds() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.data.is_none());
        assert_eq!(config.calc_bounds(), Bounds::REFERENCE);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("datafile = \"x\"").is_err());
    }

    #[test]
    fn test_missing_explicit_path_warns() {
        let (config, warnings) = load_config(Some(Path::new("/no/such/config.toml")));
        assert!(config.data.is_none());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not found"));
    }
}
