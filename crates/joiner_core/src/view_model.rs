use std::path::PathBuf;

use crate::FileId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub files: Vec<FileRowView>,
    pub file_count: usize,
    pub is_joining: bool,
    /// Join trigger is enabled: files present and no join running.
    pub can_join: bool,
    pub error: Option<String>,
    pub joined_content: Option<String>,
    pub output_format: String,
    pub last_saved: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRowView {
    pub id: FileId,
    /// 1-based position shown next to the name.
    pub position: usize,
    pub name: String,
    pub size_label: String,
    pub is_dragged: bool,
}

/// `1536` -> `"1.5 KB"`. Halves round up.
pub fn format_size_kb(bytes: u64) -> String {
    let tenths = bytes.saturating_mul(10).saturating_add(512) / 1024;
    format!("{}.{} KB", tenths / 10, tenths % 10)
}
