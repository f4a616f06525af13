//! Error types

use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum WavCodecError {
    /// Input the fallback reader cannot handle (non-mono, non-16-bit, etc.).
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// File missing, unreadable, or unwritable.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or corrupt audio container.
    #[error("format error: {0}")]
    Format(String),

    /// Buffer that cannot be peak-normalized (empty or constant signal).
    #[error("degenerate input: buffer has no peak to normalize")]
    DegenerateInput,
}

pub type Result<T> = std::result::Result<T, WavCodecError>;

impl From<hound::Error> for WavCodecError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => Self::Io(e),
            hound::Error::Unsupported => {
                Self::UnsupportedFormat("codec cannot handle this WAV encoding".to_string())
            }
            other => Self::Format(other.to_string()),
        }
    }
}

#[cfg(feature = "symphonia")]
impl From<symphonia::core::errors::Error> for WavCodecError {
    fn from(err: symphonia::core::errors::Error) -> Self {
        use symphonia::core::errors::Error;
        match err {
            Error::IoError(e) => Self::Io(e),
            Error::Unsupported(what) => Self::UnsupportedFormat(what.to_string()),
            other => Self::Format(other.to_string()),
        }
    }
}
