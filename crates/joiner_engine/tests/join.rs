use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use joiner_engine::{read_and_join, DecodeError, FsTextSource, ReadError, TextSource};
use pretty_assertions::assert_eq;

/// Serves canned texts and records when each read starts and finishes.
struct RecordingSource {
    texts: HashMap<PathBuf, Option<String>>,
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingSource {
    fn new(entries: &[(&str, Option<&str>)]) -> Self {
        Self {
            texts: entries
                .iter()
                .map(|(name, text)| (PathBuf::from(name), text.map(str::to_string)))
                .collect(),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TextSource for RecordingSource {
    async fn read_text(&self, path: &Path) -> Result<String, ReadError> {
        let name = path.display().to_string();
        self.log.lock().unwrap().push(format!("start {name}"));
        // Give any concurrently polled read a chance to interleave.
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        self.log.lock().unwrap().push(format!("end {name}"));
        match self.texts.get(path).cloned().flatten() {
            Some(text) => Ok(text),
            None => Err(ReadError::Decode {
                path: path.to_path_buf(),
                source: DecodeError::Binary { offset: 0 },
            }),
        }
    }
}

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

#[tokio::test]
async fn reads_one_file_at_a_time_in_list_order() {
    let source = RecordingSource::new(&[
        ("c.md", Some("C")),
        ("a.md", Some("A")),
        ("b.md", Some("B")),
    ]);

    let output = read_and_join(&source, &paths(&["c.md", "a.md", "b.md"]))
        .await
        .unwrap();

    assert_eq!(output.content, "C\n\nA\n\nB");
    assert_eq!(output.file_count, 3);
    assert_eq!(
        source.log(),
        vec![
            "start c.md",
            "end c.md",
            "start a.md",
            "end a.md",
            "start b.md",
            "end b.md",
        ]
    );
}

#[tokio::test]
async fn first_failure_stops_without_reading_the_rest() {
    let source = RecordingSource::new(&[("a.md", Some("A")), ("bad.md", None), ("c.md", Some("C"))]);

    let err = read_and_join(&source, &paths(&["a.md", "bad.md", "c.md"]))
        .await
        .unwrap_err();

    assert_eq!(err.path(), Path::new("bad.md"));
    assert!(!source.log().iter().any(|entry| entry.contains("c.md")));
}

#[tokio::test]
async fn duplicate_entries_are_read_each_time() {
    let source = RecordingSource::new(&[("a.md", Some("A"))]);
    let output = read_and_join(&source, &paths(&["a.md", "a.md"]))
        .await
        .unwrap();
    assert_eq!(output.content, "A\n\nA");
}

#[tokio::test]
async fn filesystem_files_join_with_blank_line() {
    let temp = tempfile::TempDir::new().unwrap();
    let a = temp.path().join("a.md");
    let b = temp.path().join("b.md");
    std::fs::write(&a, "Hello").unwrap();
    std::fs::write(&b, "World").unwrap();

    let output = read_and_join(&FsTextSource, &[a, b]).await.unwrap();
    assert_eq!(output.content, "Hello\n\nWorld");
}

#[tokio::test]
async fn trailing_newlines_are_preserved() {
    let temp = tempfile::TempDir::new().unwrap();
    let a = temp.path().join("a.txt");
    let b = temp.path().join("b.txt");
    std::fs::write(&a, "one\n").unwrap();
    std::fs::write(&b, "two\n").unwrap();

    let output = read_and_join(&FsTextSource, &[a, b]).await.unwrap();
    assert_eq!(output.content, "one\n\n\ntwo\n");
}

#[tokio::test]
async fn missing_or_binary_files_fail_the_join() {
    let temp = tempfile::TempDir::new().unwrap();
    let good = temp.path().join("good.txt");
    let binary = temp.path().join("image.txt");
    std::fs::write(&good, "fine").unwrap();
    std::fs::write(&binary, [0x89, b'P', b'N', b'G', 0x00, 0x1A]).unwrap();

    let err = read_and_join(&FsTextSource, &[good.clone(), binary.clone()])
        .await
        .unwrap_err();
    assert!(matches!(err, ReadError::Decode { .. }));
    assert_eq!(err.path(), binary.as_path());

    let missing = temp.path().join("gone.txt");
    let err = read_and_join(&FsTextSource, &[missing.clone(), good])
        .await
        .unwrap_err();
    assert!(matches!(err, ReadError::Io { .. }));
    assert_eq!(err.path(), missing.as_path());
}
