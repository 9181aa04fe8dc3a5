use std::path::PathBuf;

use clap::Parser;

use super::config::{AppConfig, DEFAULT_CONFIG_PATH};
use super::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "file-joiner")]
#[command(about = "Join text files in a chosen order into a single file", long_about = None)]
pub struct Args {
    /// Files to add before the session starts
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory that receives joined files (default: ./output)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// RON configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Where log records go
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
}

impl Args {
    /// Command-line flags win over the configuration file.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(log) = self.log {
            config.log = log;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "file-joiner",
            "--output-dir",
            "/tmp/joined",
            "--log",
            "terminal",
            "a.md",
            "b.md",
        ]);
        let mut config = AppConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(args.files, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/joined"));
        assert_eq!(config.log, LogDestination::Terminal);
    }

    #[test]
    fn missing_flags_keep_config_values() {
        let args = Args::parse_from(["file-joiner"]);
        let mut config = AppConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(config, AppConfig::default());
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }
}
