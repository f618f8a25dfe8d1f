//! Platform logging initialization for newsdesk.
//!
//! The terminal belongs to the UI, so logs go to a file (`./newsdesk.log` by
//! default) unless the caller asks for stderr.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
pub enum LogDestination<'a> {
    /// Write to the given file, truncating it.
    File(&'a Path),
    /// Write to stderr.
    Terminal,
}

/// Initialize the global logger. Falls back to stderr if the file cannot be created.
pub fn initialize(destination: LogDestination<'_>, level: LevelFilter) {
    let config = build_config();

    let logger: Box<dyn SharedLogger> = match destination {
        LogDestination::File(path) => match create_file_logger(path, level, config.clone()) {
            Some(file_logger) => file_logger,
            None => terminal_logger(level, config),
        },
        LogDestination::Terminal => terminal_logger(level, config),
    };

    let _ = CombinedLogger::init(vec![logger]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        // Keep HTTP stack chatter out of the session log.
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("reqwest")
        .add_filter_ignore_str("rustls")
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<dyn SharedLogger>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
