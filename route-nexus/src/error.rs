use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to lock mutex: poisoned"))]
    LockPoisoned,

    #[snafu(display("Terminal error: {source}"))]
    TerminalError { source: std::io::Error },

    #[snafu(display("IO error: {source}"))]
    IoError { source: std::io::Error },

    #[snafu(display("Invalid transition on screen {screen}: expected {expected}, found {found}"))]
    InvalidTransition {
        screen: &'static str,
        expected: String,
        found: String,
    },

    #[snafu(display("Binding for screen {screen} cannot be set to {value}; only false is accepted"))]
    BindingContract { screen: &'static str, value: bool },

    #[snafu(display("Failed to set up logging: {message}"))]
    LogSetup { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Contract policy for routing invariants.
///
/// A violated routing invariant is a wiring bug, never a user-facing error.
/// It is always logged; debug builds then panic, release builds carry on
/// with the offending transition dropped.
pub mod contract {
    use super::Error;

    #[track_caller]
    pub fn violated(err: Error) {
        tracing::error!(error = %err, "routing contract violated");
        if cfg!(debug_assertions) {
            panic!("{err}");
        }
    }

    /// Run a fallible transition, handing any error to [`violated`].
    #[track_caller]
    pub fn enforce(result: super::Result<()>) {
        if let Err(err) = result {
            violated(err);
        }
    }
}
