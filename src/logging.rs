use std::io::{self, Write};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

/// Logger that writes timestamped lines to stderr.
///
/// Stdout is reserved for the console reporter, so diagnostics about the
/// run itself must never end up there.
struct StderrLogger {
    stream: Mutex<io::Stderr>,
}

impl StderrLogger {
    fn new() -> Self {
        StderrLogger {
            stream: Mutex::new(io::stderr()),
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut stream) = self.stream.lock() {
                let _ = writeln!(
                    stream,
                    "[{}] [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                );
                let _ = stream.flush();
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut stream) = self.stream.lock() {
            let _ = stream.flush();
        }
    }
}

/// Initialize the logger. Verbose mode lowers the threshold to Debug,
/// otherwise only warnings and errors are shown.
pub fn init_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    log::set_boxed_logger(Box::new(StderrLogger::new())).map(|()| log::set_max_level(level))
}
