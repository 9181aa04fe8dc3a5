use std::fmt;

/// Extensions offered by the output format selector.
pub const OUTPUT_FORMAT_CHOICES: [&str; 9] =
    ["txt", "js", "jsx", "ts", "tsx", "json", "html", "css", "md"];

const DEFAULT_FORMAT: &str = "txt";

/// Extension applied to the saved joined file, without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat(String);

impl OutputFormat {
    /// Accepts only one of [`OUTPUT_FORMAT_CHOICES`].
    pub fn choice(value: &str) -> Option<Self> {
        let value = value.trim().trim_start_matches('.').to_ascii_lowercase();
        OUTPUT_FORMAT_CHOICES
            .contains(&value.as_str())
            .then_some(Self(value))
    }

    /// Lower-cased suffix after the last dot of `name`, or `txt` when there
    /// is none.
    pub fn infer_from_name(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => Self(ext.to_lowercase()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self(DEFAULT_FORMAT.to_string())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::OutputFormat;

    #[test]
    fn infers_lowercase_suffix() {
        assert_eq!(OutputFormat::infer_from_name("README.MD").as_str(), "md");
        assert_eq!(OutputFormat::infer_from_name("archive.tar.GZ").as_str(), "gz");
        assert_eq!(OutputFormat::infer_from_name(".bashrc").as_str(), "bashrc");
    }

    #[test]
    fn missing_suffix_falls_back_to_txt() {
        assert_eq!(OutputFormat::infer_from_name("Makefile").as_str(), "txt");
        assert_eq!(OutputFormat::infer_from_name("trailing.").as_str(), "txt");
    }

    #[test]
    fn choice_only_accepts_the_fixed_set() {
        assert_eq!(OutputFormat::choice("JSON").unwrap().as_str(), "json");
        assert_eq!(OutputFormat::choice(".md").unwrap().as_str(), "md");
        assert!(OutputFormat::choice("yaml").is_none());
        assert!(OutputFormat::choice("").is_none());
    }
}
