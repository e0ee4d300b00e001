// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use log::{error, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use srtprep::app_config::{self, Config};
use srtprep::app_controller::{Controller, RunRequest};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for srtprep
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct ProcessArgs {
    /// Subtitle file to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output file (default: <stem>.<suffix>.srt next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Variables file (default: variables.json next to the input)
    #[arg(short, long, conflicts_with = "no_variables")]
    variables: Option<PathBuf>,

    /// Disable placeholder substitution
    #[arg(long)]
    no_variables: bool,

    /// Rewrite the input file
    #[arg(short, long, conflicts_with = "output")]
    in_place: bool,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Fail when any subtitle error is found
    #[arg(long)]
    strict: bool,

    /// Report problems without writing any file
    #[arg(short = 'n', long)]
    dry_run: bool,
}

/// srtprep - SRT subtitle normalizer
///
/// Renumbers segments, repairs missing end times, reports timing problems
/// and fills in {{placeholders}} from a variables file.
#[derive(Parser, Debug)]
#[command(name = "srtprep")]
#[command(version)]
#[command(about = "SRT subtitle normalizer with template variables")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "srtprep normalizes SRT subtitle files and substitutes template variables.

EXAMPLES:
    srtprep movie.srt                       # Write movie.fixed.srt
    srtprep -i movie.srt                    # Rewrite movie.srt
    srtprep -n movie.srt                    # Only report problems
    srtprep -v names.json movie.srt         # Use a specific variables file
    srtprep --strict movie.srt              # Exit with an error on any subtitle error
    srtprep completions bash > srtprep.bash # Generate bash completions

VARIABLES:
    Placeholders look like {{name}}. Values come from a JSON object file
    (variables.json next to the input by default). Unknown names are added
    to that file with an empty value so they can be filled in later.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    process: ProcessArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Marker and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "\x1B[1;31m"),
            Level::Warn => ("🚧", "\x1B[1;33m"),
            Level::Info => (" ", "\x1B[1;32m"),
            Level::Debug => ("🔍", "\x1B[1;36m"),
            Level::Trace => ("📋", "\x1B[1;35m"),
        }
    }
}

impl Log for CustomLogger {
    // The global max level filters first; `level` only bounds it from above
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (marker, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, marker, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Install with the most verbose level; the effective level is set below
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "srtprep", &mut std::io::stdout());
        return Ok(());
    }

    run_process(cli.process)
}

fn run_process(options: ProcessArgs) -> Result<()> {
    if let Some(level) = options.log_level {
        let level: app_config::LogLevel = level.into();
        log::set_max_level(level.to_level_filter());
    }

    let input_path = options
        .input_path
        .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

    let mut config = Config::load_or_create(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(level) = options.log_level {
        config.log_level = level.into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    if options.no_variables {
        config.variables.enabled = false;
    } else if options.variables.is_some() {
        config.variables.enabled = true;
    }

    if options.strict {
        config.strict = true;
    }

    let controller = Controller::with_config(config)?;

    let request = RunRequest {
        input_path,
        output_path: options.output,
        variables_path: options.variables,
        in_place: options.in_place,
        force_overwrite: options.force_overwrite,
        dry_run: options.dry_run,
    };

    controller.run(&request)?;
    Ok(())
}
