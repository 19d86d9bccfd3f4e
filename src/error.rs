// src/error.rs
use std::io;
use thiserror::Error;

/// Errors a handler can hand back to the menu loop.
///
/// Subprocess failures are not errors here; they come back as a
/// [`crate::exec::CommandOutcome`] and are reported where they happen.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Stdin reached EOF or the prompt was interrupted.
    #[error("input closed")]
    InputClosed,

    #[error("invalid {kind} name '{name}': names must not start with '-'")]
    InvalidName { kind: &'static str, name: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ManagerError>;
