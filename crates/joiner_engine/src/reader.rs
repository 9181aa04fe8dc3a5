use std::io;
use std::path::{Path, PathBuf};

use joiner_logging::joiner_trace;

use crate::decode::{decode_text, DecodeError};

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} is not valid text: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

impl ReadError {
    pub fn path(&self) -> &Path {
        match self {
            ReadError::Io { path, .. } | ReadError::Decode { path, .. } => path,
        }
    }
}

/// Reads one file's full contents as text.
#[async_trait::async_trait]
pub trait TextSource: Send + Sync {
    async fn read_text(&self, path: &Path) -> Result<String, ReadError>;
}

/// Reads from the local filesystem and decodes with [`decode_text`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTextSource;

#[async_trait::async_trait]
impl TextSource for FsTextSource {
    async fn read_text(&self, path: &Path) -> Result<String, ReadError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = decode_text(&bytes).map_err(|source| ReadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        joiner_trace!(
            "Read {:?}: {} bytes as {}",
            path,
            bytes.len(),
            decoded.encoding_label
        );
        Ok(decoded.text)
    }
}
