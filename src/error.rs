//! Crate-level error types.

use std::fmt;

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// Fly-through planning with a zero inbetween count.
    InvalidInbetweens(u32),
    /// Fly-through playback with a zero frame duration.
    InvalidFrameDuration(u32),
    /// Fly-through playback requested with nothing to play.
    EmptySequence,
    /// A viewpoint with a non-positive distance or magnification, or a
    /// degenerate look direction.
    InvalidViewpoint(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options or viewpoint list parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInbetweens(n) => {
                write!(f, "inbetween count must be positive, got {n}")
            }
            Self::InvalidFrameDuration(ms) => {
                write!(f, "frame duration must be positive, got {ms} ms")
            }
            Self::EmptySequence => write!(f, "fly-through sequence is empty"),
            Self::InvalidViewpoint(msg) => {
                write!(f, "invalid viewpoint: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
