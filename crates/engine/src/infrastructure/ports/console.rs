//! User-facing diagnostic output.

/// Line-oriented console the nickname command and hooks report to.
///
/// Implementations add their own prefix and routing; callers pass the bare
/// message.
#[cfg_attr(test, mockall::automock)]
pub trait ConsolePort: Send + Sync {
    /// Informational line.
    fn log(&self, message: &str);
    fn log_warning(&self, message: &str);
    fn log_error(&self, message: &str);
}
