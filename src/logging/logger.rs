use chrono::{Local, NaiveDateTime};
use once_cell::sync::Lazy;
use std::{fmt, fs::OpenOptions, io::Write, path::PathBuf, sync::Mutex};

static LOGGER: Lazy<Mutex<Logger>> = Lazy::new(|| Mutex::new(Logger { path: None }));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => "ERROR",
        };
        f.pad(tag)
    }
}

struct Logger {
    path: Option<PathBuf>,
}

impl Logger {
    fn append(&self, level: Level, message: &str) {
        let Some(path) = &self.path else {
            return;
        };
        let line = format_line(Local::now().naive_local(), level, message);
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// One entry per line: response bodies may carry newlines of their own.
fn format_line(at: NaiveDateTime, level: Level, message: &str) -> String {
    format!(
        "[{}] {:<5} {}\n",
        at.format("%Y-%m-%d %H:%M:%S"),
        level,
        message.replace(['\r', '\n'], " ")
    )
}

/// Until this is called every log function is a no-op.
pub fn init_logger(log_path: PathBuf) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.path = Some(log_path);
    }
}

pub fn log(level: Level, message: &str) {
    if let Ok(logger) = LOGGER.lock() {
        logger.append(level, message);
    }
}

pub fn log_info(message: &str) {
    log(Level::Info, message);
}

pub fn log_warning(message: &str) {
    log(Level::Warning, message);
}

pub fn log_error(message: &str) {
    log(Level::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn entries_stay_on_one_line() {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(
            format_line(at, Level::Warning, "GET /api/times answered 500 with:\n{}"),
            "[2024-05-01 09:30:00] WARN  GET /api/times answered 500 with: {}\n"
        );
        assert_eq!(
            format_line(at, Level::Error, "boom"),
            "[2024-05-01 09:30:00] ERROR boom\n"
        );
    }
}
