//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

/// Initialise logging from a log4rs YAML file, or a stdout logger at `info` if it is missing.
pub fn init_logging(config_file: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(config_file).exists() {
        log4rs::init_file(config_file, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {config_file}: {e}"))?;
        log::info!("Logging configured from {config_file}");
    } else {
        log4rs::init_config(console_config(LevelFilter::Info)?)
            .map_err(|e| format!("Error initializing log4rs: {e}"))?;
        log::warn!("Log config {config_file} not found, logging to stdout");
    }
    Ok(())
}

/// A log4rs config with a single stdout appender.
pub fn console_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| format!("Invalid log4rs config: {e}"))?;
    Ok(config)
}
