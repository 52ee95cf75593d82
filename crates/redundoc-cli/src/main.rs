//! `redundoc` command-line entry point.
//!
//! Exit codes: 0 when clean, 1 when problems were found, 2 on errors.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use redundoc_check::Settings;
use redundoc_cli::config::load_settings;
use redundoc_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ReportFormatArg};
use crate::commands::{run_check, run_compare, run_normalize, run_stop_words};
use crate::summary::{print_report, print_report_json};

const EXIT_CLEAN: i32 = 0;
const EXIT_PROBLEMS: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_ERROR);
    }

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            EXIT_ERROR
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let settings = resolve_settings(cli)?;
    let code = match &cli.command {
        Command::Check(args) => {
            let report = run_check(args, &settings)?;
            match args.format {
                ReportFormatArg::Table => print_report(&report),
                ReportFormatArg::Json => print_report_json(&report)?,
            }
            if !report.errors.is_empty() {
                EXIT_ERROR
            } else if report.has_problems() && !args.fix {
                EXIT_PROBLEMS
            } else {
                EXIT_CLEAN
            }
        }
        Command::StopWords => {
            run_stop_words(&settings);
            EXIT_CLEAN
        }
        Command::Normalize { text } => {
            run_normalize(text, &settings);
            EXIT_CLEAN
        }
        Command::Compare { left, right } => {
            if run_compare(left, right, &settings) {
                EXIT_PROBLEMS
            } else {
                EXIT_CLEAN
            }
        }
    };
    Ok(code)
}

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    let settings = load_settings(cli.settings.config.as_deref(), &cwd)?;
    cli.settings.overrides().apply(settings)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
