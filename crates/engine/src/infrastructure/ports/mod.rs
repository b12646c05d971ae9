//! Port traits for the host collaborators the engine talks to.

mod console;

pub use console::ConsolePort;

#[cfg(test)]
pub use console::MockConsolePort;
