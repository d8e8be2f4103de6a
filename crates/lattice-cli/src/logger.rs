use log::{LevelFilter, Log, Metadata, Record};

/// Writes every enabled record to stderr as `LEVEL target: message`.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level for a repeated `-v` count; warnings are always shown.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. Calling it twice keeps the first logger and
/// only updates the level.
pub fn init(verbose: u8) {
    log::set_logger(&LOGGER).ok();
    log::set_max_level(level_for(verbose));
    log::debug!("log level {}", log::max_level());
}
