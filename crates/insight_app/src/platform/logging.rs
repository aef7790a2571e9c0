//! Platform logging initialization for insight_app.
//!
//! The dashboard owns the terminal, so logs default to `./insight.log` in
//! the current working directory; terminal output is only useful when the
//! UI is not running.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
#[allow(dead_code)]
pub enum LogDestination {
    /// Write to ./insight.log in current directory.
    File,
    /// Write to terminal (stdout).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Initialize the logger with the specified destination.
///
/// For `LogDestination::File` or `Both`, creates `./insight.log` in the
/// current working directory.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let want_terminal = matches!(
        destination,
        LogDestination::Terminal | LogDestination::Both
    );
    let want_file = matches!(destination, LogDestination::File | LogDestination::Both);

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if want_terminal {
        loggers.push(TermLogger::new(
            level,
            build_config(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if want_file {
        let log_path = PathBuf::from("./insight.log");
        match File::create(&log_path) {
            Ok(file) => loggers.push(WriteLogger::new(level, build_config(), file)),
            Err(err) => {
                eprintln!(
                    "Warning: Could not create log file at {:?}: {}",
                    log_path, err
                );
            }
        }
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}

fn build_config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
