const TRUNCATED_MARKER: &str = "\n[truncated; `show` prints the full text]";
pub const MAX_PREVIEW_CONTENT: usize = 2_048;

pub fn prepare_preview_content(joined: &str) -> String {
    if joined.len() <= MAX_PREVIEW_CONTENT {
        joined.to_string()
    } else {
        let mut end = MAX_PREVIEW_CONTENT;
        while end > 0 && !joined.is_char_boundary(end) {
            end -= 1;
        }
        let truncated = &joined[..end];
        format!("{truncated}{TRUNCATED_MARKER}")
    }
}

#[cfg(test)]
mod tests {
    use super::{prepare_preview_content, MAX_PREVIEW_CONTENT, TRUNCATED_MARKER};

    #[test]
    fn short_content_kept_as_is() {
        let content = "short preview";
        assert_eq!(prepare_preview_content(content), content);
    }

    #[test]
    fn truncated_content_appends_marker() {
        let content: String = "a".repeat(MAX_PREVIEW_CONTENT + 128);
        let preview = prepare_preview_content(&content);
        assert!(preview.ends_with(TRUNCATED_MARKER));
        assert_eq!(preview.len(), MAX_PREVIEW_CONTENT + TRUNCATED_MARKER.len());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let content: String = "é".repeat(MAX_PREVIEW_CONTENT);
        let preview = prepare_preview_content(&content);
        let body = preview.strip_suffix(TRUNCATED_MARKER).unwrap();
        assert!(body.len() <= MAX_PREVIEW_CONTENT);
        assert!(body.chars().all(|c| c == 'é'));
    }
}
