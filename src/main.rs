// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use scormtran::app_config::{self, Config};
use scormtran::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate the HTML documents of an extracted SCORM package
    Translate(TranslateArgs),

    /// Apply a reviewed revision sheet to an extracted SCORM package
    Revise(ReviseArgs),

    /// Report which revision rows would match, without changing anything
    Preview(PreviewArgs),

    /// Generate shell completions for scormtran
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Extracted package directory to translate
    #[arg(value_name = "PACKAGE_DIR")]
    input_dir: PathBuf,

    /// Output directory for the translated package
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Target language code (e.g. 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Path for the exported audit sheet
    #[arg(short, long)]
    sheet: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct ReviseArgs {
    /// Extracted package directory to revise
    #[arg(value_name = "PACKAGE_DIR")]
    input_dir: PathBuf,

    /// Reviewed revision sheet (CSV)
    #[arg(value_name = "SHEET")]
    sheet: PathBuf,

    /// Output directory for the revised package
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Extracted package directory to check
    #[arg(value_name = "PACKAGE_DIR")]
    input_dir: PathBuf,

    /// Reviewed revision sheet (CSV)
    #[arg(value_name = "SHEET")]
    sheet: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
#[command(
    name = "scormtran",
    about = "Translate SCORM package HTML content and reapply reviewed revisions",
    long_about = "scormtran translates the visible HTML text of an extracted SCORM package \
through a translation provider, exports a CSV audit sheet of every translated \
text run, and can later reapply reviewer-edited revisions from that sheet back \
into a package - for real or as a dry-run preview.

If no configuration file exists at the given path, a default one will be \
created automatically."
)]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is updated after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "scormtran", &mut std::io::stdout());
            Ok(())
        }
        Commands::Translate(args) => run_translate(args).await,
        Commands::Revise(args) => run_revise(args),
        Commands::Preview(args) => run_preview(args),
    }
}

/// Load the config file, creating a default one when missing, and fold in
/// CLI overrides
fn load_config(config_path: &str, log_level: Option<CliLogLevel>) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        config
            .save_to_file(config_path)
            .context("Failed to write default config")?;
        config
    };

    if let Some(cli_level) = log_level {
        config.log_level = cli_level.into();
    }
    log::set_max_level(level_filter(&config.log_level));

    Ok(config)
}

/// Directory name prefixed the way the original export names its artifacts
fn prefixed_sibling(input_dir: &Path, prefix: &str) -> PathBuf {
    let base = input_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "package".to_string());
    input_dir.with_file_name(format!("{}{}", prefix, base))
}

async fn run_translate(args: TranslateArgs) -> Result<()> {
    let mut config = load_config(&args.config_path, args.log_level)?;
    if let Some(target_language) = args.target_language {
        config.target_language = target_language;
    }

    let output_dir = args
        .output_dir
        .unwrap_or_else(|| prefixed_sibling(&args.input_dir, "TRANSLATED-"));
    let sheet_path = args.sheet.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}-translations.csv",
            config.target_language.to_uppercase()
        ))
    });

    let controller = Controller::with_config(config)?;
    let translator = controller.build_translator();
    let summary = controller
        .run_translation(&args.input_dir, &output_dir, &sheet_path, &translator)
        .await?;

    info!(
        "Done: {} files, {} text runs translated, {} skipped",
        summary.files, summary.translated, summary.skipped
    );
    info!("Translated package: {:?}", output_dir);
    info!("Audit sheet: {:?}", sheet_path);

    Ok(())
}

fn run_revise(args: ReviseArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level)?;

    let output_dir = args
        .output_dir
        .unwrap_or_else(|| prefixed_sibling(&args.input_dir, "REVISED-"));

    let controller = Controller::with_config(config)?;
    let summary = controller.run_revision(&args.input_dir, &args.sheet, &output_dir)?;

    info!(
        "Done: {} revisions applied across {} files",
        summary.applied, summary.files
    );
    info!("Revised package: {:?}", output_dir);

    Ok(())
}

fn run_preview(args: PreviewArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level)?;

    let controller = Controller::with_config(config)?;
    let report = controller.run_preview(&args.input_dir, &args.sheet)?;

    if report.is_empty() {
        info!("No revision rows currently match the package");
    }

    let json = serde_json::to_string_pretty(&report).context("Failed to render preview report")?;
    println!("{}", json);

    Ok(())
}
