//! Console implementations.

use std::io::Write;

use crate::infrastructure::ports::ConsolePort;

/// Prefix every console line carries.
pub const CONSOLE_PREFIX: &str = "[Nicknames]: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warning,
    Error,
}

impl ConsoleLevel {
    fn tag(self) -> &'static str {
        match self {
            ConsoleLevel::Info => "",
            ConsoleLevel::Warning => "[warn] ",
            ConsoleLevel::Error => "[error] ",
        }
    }
}

/// Format a console line the way the stdout console prints it.
pub fn format_line(level: ConsoleLevel, message: &str) -> String {
    format!("{}{}{}", level.tag(), CONSOLE_PREFIX, message)
}

/// Console writing to stdout (info) and stderr (warning, error).
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }

    fn write(&self, level: ConsoleLevel, message: &str) {
        let line = format_line(level, message);
        let result = match level {
            ConsoleLevel::Info => {
                writeln!(std::io::stdout().lock(), "{line}")
            }
            ConsoleLevel::Warning | ConsoleLevel::Error => {
                writeln!(std::io::stderr().lock(), "{line}")
            }
        };
        if let Err(e) = result {
            tracing::debug!(error = %e, "Console write failed");
        }
    }
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for StdoutConsole {
    fn log(&self, message: &str) {
        self.write(ConsoleLevel::Info, message);
    }

    fn log_warning(&self, message: &str) {
        self.write(ConsoleLevel::Warning, message);
    }

    fn log_error(&self, message: &str) {
        self.write(ConsoleLevel::Error, message);
    }
}

/// Console that records lines for assertions.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingConsole {
    lines: std::sync::Mutex<Vec<(ConsoleLevel, String)>>,
}

#[cfg(test)]
impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(ConsoleLevel, String)> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn contains(&self, level: ConsoleLevel, message: &str) -> bool {
        self.lines()
            .iter()
            .any(|(l, m)| *l == level && m == message)
    }

    fn push(&self, level: ConsoleLevel, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, message.to_string()));
        }
    }
}

#[cfg(test)]
impl ConsolePort for RecordingConsole {
    fn log(&self, message: &str) {
        self.push(ConsoleLevel::Info, message);
    }

    fn log_warning(&self, message: &str) {
        self.push(ConsoleLevel::Warning, message);
    }

    fn log_error(&self, message: &str) {
        self.push(ConsoleLevel::Error, message);
    }
}
