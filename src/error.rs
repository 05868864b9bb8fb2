use std::{io, path::PathBuf, process::ExitStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StencilError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("No glyph for character {0:?}")]
    UnknownGlyph(char),

    #[error("Glyph for {ch:?} has ragged rows: width {got}, expected {expected}")]
    GlyphWidth {
        ch: char,
        got: usize,
        expected: usize,
    },

    #[error("git {operation} failed with {status}: {stderr}")]
    GitFailed {
        operation: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to run git {operation}")]
    GitSpawn {
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, StencilError>;
