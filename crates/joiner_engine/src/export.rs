use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use joiner_logging::joiner_info;

use crate::filename::joined_filename;
use crate::persist::{AtomicFileWriter, PersistError};

/// Saves the joined text as `joined-files-<now>.<extension>` in `output_dir`.
pub fn save_joined(
    output_dir: &Path,
    content: &str,
    extension: &str,
) -> Result<PathBuf, PersistError> {
    save_joined_at(output_dir, content, extension, Local::now().naive_local())
}

pub fn save_joined_at(
    output_dir: &Path,
    content: &str,
    extension: &str,
    timestamp: NaiveDateTime,
) -> Result<PathBuf, PersistError> {
    let filename = joined_filename(timestamp, extension);
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    let path = writer.write_new(&filename, content)?;
    joiner_info!("Saved {} bytes to {:?}", content.len(), path);
    Ok(path)
}
