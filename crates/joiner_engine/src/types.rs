use std::fmt;
use std::path::PathBuf;

/// Correlates a join command with its completion event.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    JoinCompleted {
        request_id: RequestId,
        result: Result<JoinOutput, JoinFailure>,
    },
    SaveCompleted {
        result: Result<PathBuf, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutput {
    pub content: String,
    pub file_count: usize,
}

/// First file that could not be read; every later file was left unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinFailure {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for JoinFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

impl From<crate::ReadError> for JoinFailure {
    fn from(err: crate::ReadError) -> Self {
        Self {
            path: err.path().to_path_buf(),
            message: err.to_string(),
        }
    }
}
