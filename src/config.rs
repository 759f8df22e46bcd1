use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Portfolio terminal: browse a developer profile through a simulated shell.
#[derive(Parser, Debug)]
#[command(name = "portfolio-term")]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Directory holding persisted history and theme.
    #[arg(long, env = "PORTFOLIO_TERM_DATA_DIR")]
    pub(crate) data_dir: Option<PathBuf>,

    /// Append logs to this file (the TUI owns the screen, so nothing is logged without it).
    #[arg(long, env = "PORTFOLIO_TERM_LOG_FILE")]
    pub(crate) log_file: Option<PathBuf>,

    /// Keep at most this many transcript lines; unbounded when unset.
    #[arg(long, env = "PORTFOLIO_TERM_MAX_TRANSCRIPT")]
    pub(crate) max_transcript_lines: Option<usize>,

    /// Keep history and theme in memory only.
    #[arg(long)]
    pub(crate) ephemeral: bool,

    /// Run a single command, print its output and exit.
    #[arg(long, num_args = 1.., value_name = "COMMAND")]
    pub(crate) run: Option<Vec<String>>,

    /// Output format for --run.
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub(crate) format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub(crate) struct Config {
    pub(crate) data_dir: PathBuf,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) max_transcript_lines: Option<usize>,
    pub(crate) ephemeral: bool,
}

impl Config {
    pub(crate) fn from_cli(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone().unwrap_or_else(default_data_dir),
            log_file: cli.log_file.clone(),
            // A zero cap would hide every line, treat it as "no cap".
            max_transcript_lines: cli.max_transcript_lines.filter(|n| *n > 0),
            ephemeral: cli.ephemeral,
        }
    }

    pub(crate) fn storage_path(&self) -> PathBuf {
        self.data_dir.join("storage.db")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_file: None,
            max_transcript_lines: None,
            ephemeral: true,
        }
    }
}

fn default_data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".portfolio-term")
    } else {
        PathBuf::from(".portfolio-term")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_collects_trailing_words() {
        let cli = Cli::try_parse_from(["portfolio-term", "--run", "theme", "blue"])
            .expect("parse args");
        assert_eq!(
            cli.run,
            Some(vec!["theme".to_string(), "blue".to_string()])
        );
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn zero_transcript_cap_means_unbounded() {
        let cli = Cli::try_parse_from([
            "portfolio-term",
            "--max-transcript-lines",
            "0",
            "--data-dir",
            "/tmp/pt",
        ])
        .expect("parse args");
        let config = Config::from_cli(&cli);
        assert_eq!(config.max_transcript_lines, None);
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/pt/storage.db"));
    }
}
