use std::path::PathBuf;

use crate::view_model::{format_size_kb, AppViewModel, FileRowView};
use crate::{DragTracker, DroppedFile, OutputFormat, PendingFile, PendingFileList};

pub const EMPTY_JOIN_ERROR: &str = "Please add at least one file to join.";
pub const READ_FAILURE_ERROR: &str =
    "Error reading files. Make sure all files are valid text files.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    files: PendingFileList,
    drag: DragTracker,
    is_joining: bool,
    error: Option<String>,
    joined_content: Option<String>,
    output_format: OutputFormat,
    last_saved: Option<PathBuf>,
    /// Bumped on every list change so late join results can be recognised.
    generation: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let dragged = self.drag.dragged_index();
        let files = self
            .files
            .iter()
            .enumerate()
            .map(|(index, file)| FileRowView {
                id: file.id,
                position: index + 1,
                name: file.name.clone(),
                size_label: format_size_kb(file.size),
                is_dragged: dragged == Some(index),
            })
            .collect();

        AppViewModel {
            files,
            file_count: self.files.len(),
            is_joining: self.is_joining,
            can_join: !self.files.is_empty() && !self.is_joining,
            error: self.error.clone(),
            joined_content: self.joined_content.clone(),
            output_format: self.output_format.to_string(),
            last_saved: self.last_saved.clone(),
        }
    }

    pub fn files(&self) -> &PendingFileList {
        &self.files
    }

    pub fn joined_content(&self) -> Option<&str> {
        self.joined_content.as_deref()
    }

    pub fn output_format(&self) -> &OutputFormat {
        &self.output_format
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_joining(&self) -> bool {
        self.is_joining
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn drag(&self) -> DragTracker {
        self.drag
    }

    /// Returns whether anything changed since the last call, and resets it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn add_files(&mut self, dropped: Vec<DroppedFile>) {
        self.files.append(dropped);
        self.invalidate_join();
    }

    pub(crate) fn remove_file(&mut self, index: usize) -> Option<PendingFile> {
        let removed = self.files.remove(index)?;
        self.drag.end();
        self.invalidate_join();
        Some(removed)
    }

    pub(crate) fn reorder_files(&mut self, order: &[crate::FileId]) -> bool {
        if !self.files.reorder(order) {
            return false;
        }
        self.drag.end();
        self.invalidate_join();
        true
    }

    pub(crate) fn start_drag(&mut self, index: usize) -> bool {
        if index >= self.files.len() {
            return false;
        }
        self.drag.start(index);
        self.mark_dirty();
        true
    }

    pub(crate) fn drag_over(&mut self, index: usize) -> bool {
        if index >= self.files.len() {
            return false;
        }
        let Some((from, to)) = self.drag.over(index) else {
            return false;
        };
        if self.files.move_item(from, to) {
            self.invalidate_join();
        }
        true
    }

    pub(crate) fn end_drag(&mut self) -> bool {
        if self.drag == DragTracker::Idle {
            return false;
        }
        self.drag.end();
        self.mark_dirty();
        true
    }

    /// Starts a join. Returns the request generation and the files to read,
    /// or `None` when the list is empty or a join is already running.
    pub(crate) fn begin_join(&mut self) -> Option<(u64, Vec<PendingFile>)> {
        if self.is_joining {
            return None;
        }
        if self.files.is_empty() {
            self.error = Some(EMPTY_JOIN_ERROR.to_string());
            self.mark_dirty();
            return None;
        }
        self.is_joining = true;
        self.error = None;
        self.mark_dirty();
        Some((self.generation, self.files.to_vec()))
    }

    pub(crate) fn finish_join(&mut self, generation: u64, result: Result<String, String>) {
        self.is_joining = false;
        self.mark_dirty();
        if generation != self.generation {
            return;
        }
        match result {
            Ok(content) => {
                if let Some(first) = self.files.first() {
                    self.output_format = OutputFormat::infer_from_name(&first.name);
                }
                // Nothing to show or save when every file was empty.
                self.joined_content = (!content.is_empty()).then_some(content);
            }
            Err(_) => self.error = Some(READ_FAILURE_ERROR.to_string()),
        }
    }

    pub(crate) fn set_output_format(&mut self, format: OutputFormat) {
        if self.output_format != format {
            self.output_format = format;
            self.mark_dirty();
        }
    }

    pub(crate) fn record_saved(&mut self, result: Result<PathBuf, String>) {
        match result {
            Ok(path) => self.last_saved = Some(path),
            Err(detail) => {
                self.error = Some(format!("Could not save the joined file: {detail}"));
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn clear_all(&mut self) {
        self.files.clear();
        self.drag.end();
        self.invalidate_join();
    }

    fn invalidate_join(&mut self) {
        self.joined_content = None;
        self.error = None;
        self.last_saved = None;
        self.generation += 1;
        self.mark_dirty();
    }
}
