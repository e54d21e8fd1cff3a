//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use profitbook_core::models::settings::{EditorSettings, LoaderSettings, DEFAULT_TEXT_CAPACITY};

/// Mini text editor with single-step undo over full-text snapshots
#[derive(Parser, Debug)]
#[command(name = "mini-editor")]
#[command(version, about, long_about = None)]
pub struct EditorArgs {
    /// Maximum document length in bytes
    #[arg(long, default_value_t = DEFAULT_TEXT_CAPACITY)]
    pub capacity: usize,
}

impl EditorArgs {
    pub fn settings(&self) -> EditorSettings {
        EditorSettings {
            capacity: self.capacity,
        }
    }
}

/// Output format of the gain report
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single line, average percent gain with two decimals
    #[default]
    Text,
    /// Full summary with per-record gains
    Json,
}

/// Print the average percent gain of a stock record file
#[derive(Parser, Debug)]
#[command(name = "percent-gain")]
#[command(version, about, long_about = None)]
pub struct GainArgs {
    /// Record file: one `<name> <id> <buy_price> <sell_price>` per line
    pub input_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip malformed lines with a warning instead of failing
    #[arg(long)]
    pub skip_invalid: bool,
}

impl GainArgs {
    pub fn settings(&self) -> LoaderSettings {
        LoaderSettings {
            skip_invalid: self.skip_invalid,
        }
    }
}

/// Parse command line arguments. Usage errors exit with status 1,
/// `--help` and `--version` with status 0.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print().ok();
            std::process::exit(code);
        }
    }
}
