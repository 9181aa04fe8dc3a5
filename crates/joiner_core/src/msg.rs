use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Drop surface accepted a batch of files.
    FilesAdded(Vec<crate::DroppedFile>),
    /// User removed the file at this position.
    RemoveFile { index: usize },
    /// Replace the whole order; must be a permutation of the current ids.
    FilesReordered(Vec<crate::FileId>),
    /// User picked up the file at this position.
    DragStarted { index: usize },
    /// The dragged file crossed over this position.
    DraggedOver { index: usize },
    /// User released the dragged file.
    DragEnded,
    /// User clicked Join.
    JoinClicked,
    /// Engine finished reading and joining the files of a join request.
    JoinFinished {
        generation: u64,
        result: Result<String, String>,
    },
    /// User picked an output format from the fixed choices.
    OutputFormatSelected(String),
    /// User clicked Download.
    DownloadClicked,
    /// Engine finished saving the joined file.
    DownloadFinished { result: Result<PathBuf, String> },
    /// User clicked Clear All.
    ClearAll,
    /// Leaves state untouched and asks for nothing.
    NoOp,
}
