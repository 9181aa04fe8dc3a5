//! Joiner core: pure state machine and view-model helpers.
mod drag;
mod effect;
mod file_list;
mod format;
mod msg;
mod state;
mod update;
mod view_model;

pub use drag::DragTracker;
pub use effect::Effect;
pub use file_list::{DroppedFile, FileId, PendingFile, PendingFileList};
pub use format::{OutputFormat, OUTPUT_FORMAT_CHOICES};
pub use msg::Msg;
pub use state::{AppState, EMPTY_JOIN_ERROR, READ_FAILURE_ERROR};
pub use update::update;
pub use view_model::{format_size_kb, AppViewModel, FileRowView};
