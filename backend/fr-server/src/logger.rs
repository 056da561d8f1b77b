use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::{Arguments, Display};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Crates whose own logging is capped at `warn`: sqlx logs every statement,
/// the HTTP client stack logs every connection.
const CHATTY_TARGETS: [&str; 4] = ["sqlx", "reqwest", "hyper", "hyper_util"];

enum Sink {
    File(PathBuf),
    ColoredStdout,
    PlainStdout,
}

impl Sink {
    fn describe(&self) -> String {
        match self {
            Self::File(path) => format!("file={}", path.display()),
            Self::ColoredStdout => "stdout (colored)".to_string(),
            Self::PlainStdout => "stdout".to_string(),
        }
    }
}

fn write_line(out: FormatCallback, message: &Arguments, record: &Record, level: impl Display) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

/// Install the global logger.
///
/// Logs go to `log_file` when set, otherwise to stdout, colored unless
/// `colored` is false (systemd, docker logs).
pub fn initialize(
    log_level: fr_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let sink = match log_file {
        Some(path) => Sink::File(path),
        None if colored => Sink::ColoredStdout,
        None => Sink::PlainStdout,
    };

    let mut root = Dispatch::new().level(level_filter);
    for target in CHATTY_TARGETS {
        root = root.level_for(target, level_filter.min(LevelFilter::Warn));
    }

    let output = match &sink {
        Sink::File(path) => {
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;
            Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(file)
        }
        Sink::ColoredStdout => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        Sink::PlainStdout => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    root.chain(output).apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    info!("Logger initialized: level={:?}, {}", level_filter, sink.describe());

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}
