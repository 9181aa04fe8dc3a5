use chrono::NaiveDateTime;

pub const OUTPUT_PREFIX: &str = "joined-files-";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";
const FALLBACK_EXTENSION: &str = "txt";

/// `joined-files-YYYY-MM-DD-HH-mm-ss.{extension}`
pub fn joined_filename(timestamp: NaiveDateTime, extension: &str) -> String {
    format!(
        "{OUTPUT_PREFIX}{}.{}",
        timestamp.format(TIMESTAMP_FORMAT),
        sanitize_extension(extension)
    )
}

fn sanitize_extension(input: &str) -> String {
    let cleaned: String = input
        .trim()
        .trim_start_matches('.')
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches(&['_', ' ', '.'][..]);
    if cleaned.is_empty() {
        FALLBACK_EXTENSION.to_string()
    } else {
        cleaned.to_string()
    }
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}
