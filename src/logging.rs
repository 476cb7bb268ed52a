//! log4rs set-up.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Load the YAML config at `path`, or fall back to warnings on stderr.
pub fn init(path: &Path) {
    match log4rs::init_file(path, Default::default()) {
        Ok(()) => log::debug!("log4rs configured from {}", path.display()),
        Err(file_err) => match init_stderr(LevelFilter::Warn) {
            Ok(()) => log::debug!("log4rs file {} not used: {file_err}", path.display()),
            Err(e) => eprintln!("Error initializing log4rs: {e}"),
        },
    }
}

/// Programmatic console logger on stderr, stdout stays clean for results.
pub fn init_stderr(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
