#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read every file in order, join, and answer with `Msg::JoinFinished`.
    JoinFiles {
        generation: u64,
        files: Vec<crate::PendingFile>,
    },
    /// Save the joined text and answer with `Msg::DownloadFinished`.
    SaveJoined {
        content: String,
        format: crate::OutputFormat,
    },
}
