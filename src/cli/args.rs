//! CLI argument definitions for arlington-to-vscode.

use std::path::PathBuf;

use arlington_completion::ConversionConfig;
use clap::{Parser, ValueEnum};

/// Converts an Arlington PDF Model "pandas.tsv" monolithic model into a
/// JSON file for editor code completion.
#[derive(Parser, Debug)]
#[command(name = "arlington-to-vscode")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Filename of a single pandas-compatible TSV
    #[arg(short, long = "pandas", value_name = "FILE", default_value = "pandas.tsv")]
    pub pandas: PathBuf,

    /// Filename of the JSON output file
    #[arg(short, long = "json", value_name = "FILE", default_value = "arlington.json")]
    pub json: PathBuf,

    /// Spaces per indentation level in the JSON output
    #[arg(long, default_value_t = 2)]
    pub indent: usize,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn conversion_config(&self) -> ConversionConfig {
        ConversionConfig::builder().indent(self.indent).build()
    }
}

/// Log level argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level (default)
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
