use std::path::PathBuf;

pub type FileId = u64;

/// A file accepted by the drop surface, not yet owned by the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

impl DroppedFile {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub id: FileId,
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

/// Ordered pending files. Position is join order; ids are the only identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PendingFileList {
    files: Vec<PendingFile>,
    next_id: FileId,
}

impl PendingFileList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingFile> {
        self.files.iter()
    }

    pub fn first(&self) -> Option<&PendingFile> {
        self.files.first()
    }

    pub fn ids(&self) -> Vec<FileId> {
        self.files.iter().map(|f| f.id).collect()
    }

    pub fn to_vec(&self) -> Vec<PendingFile> {
        self.files.clone()
    }

    /// Appends the batch in its given order and returns the assigned ids.
    pub fn append(&mut self, dropped: Vec<DroppedFile>) -> Vec<FileId> {
        let mut ids = Vec::with_capacity(dropped.len());
        for file in dropped {
            self.next_id += 1;
            let id = self.next_id;
            self.files.push(PendingFile {
                id,
                path: file.path,
                name: file.name,
                size: file.size,
            });
            ids.push(id);
        }
        ids
    }

    pub fn remove(&mut self, index: usize) -> Option<PendingFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    /// Extracts the entry at `from` and reinserts it at `to`.
    ///
    /// Returns false (and leaves the list untouched) when either index is out
    /// of range or both are equal.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.files.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let item = self.files.remove(from);
        self.files.insert(to, item);
        true
    }

    /// Replaces the order wholesale. `order` must be a permutation of the
    /// current ids, otherwise nothing changes and false is returned.
    pub fn reorder(&mut self, order: &[FileId]) -> bool {
        let mut requested = order.to_vec();
        let mut current = self.ids();
        requested.sort_unstable();
        current.sort_unstable();
        if requested != current {
            return false;
        }

        let mut remaining = std::mem::take(&mut self.files);
        for id in order {
            if let Some(pos) = remaining.iter().position(|f| f.id == *id) {
                self.files.push(remaining.swap_remove(pos));
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
