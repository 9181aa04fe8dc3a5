use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

const MAX_NAME_ATTEMPTS: usize = 1000;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("no free file name derived from {0}")]
    NamesExhausted(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Writes whole files into one directory via a temp file and a rename, so a
/// reader never observes a partially written file.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Writes `content` under `filename`, or under `name (1).ext`,
    /// `name (2).ext`, ... when that name is taken. Existing files are never
    /// replaced.
    pub fn write_new(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let target = self.dir.join(numbered_name(filename, attempt));
            match tmp.persist_noclobber(&target) {
                Ok(_) => return Ok(target),
                Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => tmp = err.file,
                Err(err) => return Err(PersistError::Io(err.error)),
            }
        }
        Err(PersistError::NamesExhausted(filename.to_string()))
    }
}

fn numbered_name(filename: &str, attempt: usize) -> String {
    if attempt == 0 {
        return filename.to_string();
    }
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({attempt}).{ext}"),
        _ => format!("{filename} ({attempt})"),
    }
}

#[cfg(test)]
mod tests {
    use super::numbered_name;

    #[test]
    fn numbering_goes_before_the_extension() {
        assert_eq!(numbered_name("a.md", 0), "a.md");
        assert_eq!(numbered_name("a.md", 2), "a (2).md");
        assert_eq!(numbered_name("noext", 1), "noext (1)");
    }
}
