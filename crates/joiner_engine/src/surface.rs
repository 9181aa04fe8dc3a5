use std::fs;
use std::path::{Path, PathBuf};

use joiner_logging::{joiner_debug, joiner_info, joiner_warn};

pub const DEFAULT_MAX_FILES: usize = 100;

pub const DEFAULT_ACCEPTED_EXTENSIONS: &[&str] = &[
    ".txt", ".md", ".markdown", ".js", ".jsx", ".ts", ".tsx", ".json", ".html", ".htm", ".css",
    ".scss", ".less", ".xml", ".csv", ".yml", ".yaml", ".ini", ".cfg", ".conf", ".log", ".sh",
    ".bat", ".ps1",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// Suffixes such as `.md`; a missing leading dot is tolerated.
    pub accepted_extensions: Vec<String>,
    /// Largest batch accepted at once; 0 means unlimited.
    pub max_files: usize,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: DEFAULT_ACCEPTED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

/// Filters dropped or picked paths before they reach the file list. Never
/// reads file contents.
#[derive(Debug, Clone)]
pub struct DropSurface {
    config: SurfaceConfig,
    suffixes: Vec<String>,
}

impl DropSurface {
    pub fn new(config: SurfaceConfig) -> Self {
        let suffixes = config
            .accepted_extensions
            .iter()
            .map(|ext| {
                let ext = ext.trim().to_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .filter(|ext| ext.len() > 1)
            .collect();
        Self { config, suffixes }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn is_accepted_name(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix))
    }

    /// Returns the accepted files of one batch, in the given order.
    ///
    /// Files with other extensions and paths that are not regular files are
    /// dropped silently. A batch with more accepted files than `max_files`
    /// is rejected as a whole.
    pub fn accept<I, P>(&self, paths: I) -> Vec<AcceptedFile>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut accepted = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                joiner_debug!("Ignoring {:?}: no file name", path);
                continue;
            };
            if !self.is_accepted_name(&name) {
                joiner_debug!("Ignoring {:?}: extension not accepted", path);
                continue;
            }
            match fs::metadata(path) {
                Ok(meta) if meta.is_file() => accepted.push(AcceptedFile {
                    path: path.to_path_buf(),
                    name,
                    size: meta.len(),
                }),
                Ok(_) => joiner_warn!("Ignoring {:?}: not a regular file", path),
                Err(err) => joiner_warn!("Ignoring {:?}: {}", path, err),
            }
        }

        if self.config.max_files > 0 && accepted.len() > self.config.max_files {
            joiner_warn!(
                "Rejected batch of {} files; at most {} per batch",
                accepted.len(),
                self.config.max_files
            );
            return Vec::new();
        }
        joiner_info!("Accepted {} files", accepted.len());
        accepted
    }
}

impl Default for DropSurface {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}
