use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use joiner_engine::{SurfaceConfig, DEFAULT_ACCEPTED_EXTENSIONS, DEFAULT_MAX_FILES};
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_PATH: &str = "./file_joiner.ron";
const DEFAULT_OUTPUT_DIR: &str = "output";

/// Startup settings read from a RON file. Every field is optional in the
/// file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub accepted_extensions: Vec<String>,
    pub max_files: usize,
    pub output_dir: PathBuf,
    pub log: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: DEFAULT_ACCEPTED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            max_files: DEFAULT_MAX_FILES,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn surface_config(&self) -> SurfaceConfig {
        SurfaceConfig {
            accepted_extensions: self.accepted_extensions.clone(),
            max_files: self.max_files,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Returns `Ok(None)` when the file does not exist.
pub fn load_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let loaded = load_config(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("file_joiner.ron");
        fs::write(
            &path,
            r#"(accepted_extensions: [".rs", ".toml"], output_dir: "joined", log: Both)"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.accepted_extensions, vec![".rs", ".toml"]);
        assert_eq!(config.output_dir, PathBuf::from("joined"));
        assert_eq!(config.log, LogDestination::Both);
        assert_eq!(config.max_files, DEFAULT_MAX_FILES);
        assert_eq!(config.surface_config().max_files, DEFAULT_MAX_FILES);
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("broken.ron");
        fs::write(&path, "(max_files: \"many\")").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn default_config_round_trips_through_ron() {
        let text = ron::ser::to_string_pretty(&AppConfig::default(), Default::default()).unwrap();
        let parsed: AppConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
