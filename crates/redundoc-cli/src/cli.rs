//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use redundoc_cli::config::SettingsOverrides;

#[derive(Parser)]
#[command(
    name = "redundoc",
    version,
    about = "Find doc comments that only restate the code",
    long_about = "Find doc comments that only restate the name or type of what they document.\n\n\
                  Comments and block tags are normalized (camel case split, short words and \n\
                  stop words dropped) and compared by edit distance against the declaration."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct SettingsArgs {
    /// Settings file (default: ./redundoc.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Similarity ratio in [0, 1] at or above which text is flagged.
    #[arg(long = "threshold", value_name = "RATIO", global = true)]
    pub threshold: Option<f64>,

    /// Only flag near-identical text.
    #[arg(long = "strict", global = true)]
    pub strict: bool,

    /// Additional stop word (repeatable).
    #[arg(long = "stop-word", value_name = "WORD", global = true)]
    pub stop_words: Vec<String>,

    /// Ignore the configured stop words; only --stop-word values apply.
    #[arg(long = "no-default-stop-words", global = true)]
    pub no_default_stop_words: bool,
}

impl SettingsArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            threshold: self.threshold,
            strict: self.strict,
            extra_stop_words: self.stop_words.clone(),
            no_default_stop_words: self.no_default_stop_words,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Check source files or directories for redundant doc comments.
    Check(CheckArgs),

    /// List the stop words in effect.
    StopWords,

    /// Print the normalized form of a text.
    Normalize {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Normalize two texts and print their similarity.
    Compare {
        #[arg(value_name = "LEFT")]
        left: String,
        #[arg(value_name = "RIGHT")]
        right: String,
    },
}

#[derive(Args)]
pub struct CheckArgs {
    /// Files or directories to check.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// File extension to include when walking directories (repeatable).
    #[arg(long = "ext", value_name = "EXT", default_value = "java")]
    pub extensions: Vec<String>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Delete flagged comments and tags in place.
    #[arg(long = "fix")]
    pub fix: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
