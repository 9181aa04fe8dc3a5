use std::path::PathBuf;

use futures_util::{stream, StreamExt, TryStreamExt};
use joiner_logging::joiner_debug;

use crate::reader::{ReadError, TextSource};
use crate::JoinOutput;

/// One blank line between consecutive files.
pub const JOIN_SEPARATOR: &str = "\n\n";

pub fn join_texts<S: AsRef<str>>(parts: &[S]) -> String {
    let total: usize = parts.iter().map(|p| p.as_ref().len()).sum::<usize>()
        + JOIN_SEPARATOR.len() * parts.len().saturating_sub(1);
    let mut joined = String::with_capacity(total);
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            joined.push_str(JOIN_SEPARATOR);
        }
        joined.push_str(part.as_ref());
    }
    joined
}

/// Reads `paths` strictly one after another, in the given order, and joins
/// the texts. Stops at the first failure without reading the rest.
pub async fn read_and_join(
    source: &dyn TextSource,
    paths: &[PathBuf],
) -> Result<JoinOutput, ReadError> {
    let texts: Vec<String> = stream::iter(paths)
        .then(|path| source.read_text(path))
        .try_collect()
        .await?;

    joiner_debug!("Joined {} files", texts.len());
    Ok(JoinOutput {
        content: join_texts(&texts),
        file_count: texts.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::join_texts;

    #[test]
    fn separator_only_between_entries() {
        assert_eq!(join_texts(&["Hello", "World"]), "Hello\n\nWorld");
        assert_eq!(join_texts(&["only"]), "only");
        assert_eq!(join_texts::<&str>(&[]), "");
        assert_eq!(join_texts(&["a\n", "", "b"]), "a\n\n\n\n\nb");
    }
}
