use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for tocgen operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for tocgen operations
#[derive(Debug)]
pub enum TocgenError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Markdown processing error
    Markdown(String),
    /// Module export error
    Export(String),
    /// Value serialization error
    Serialization(String),
    /// Heading depth outside 1..=6
    InvalidDepth(u8),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocgenError::Io(err) => write!(f, "IO error: {}", err),
            TocgenError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocgenError::Markdown(msg) => write!(f, "Markdown error: {}", msg),
            TocgenError::Export(msg) => write!(f, "Export error: {}", msg),
            TocgenError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            TocgenError::InvalidDepth(depth) => {
                write!(f, "Invalid heading depth: {} (expected 1 to 6)", depth)
            }
            TocgenError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocgenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TocgenError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TocgenError {
    fn from(err: io::Error) -> Self {
        TocgenError::Io(err)
    }
}

impl From<serde_json::Error> for TocgenError {
    fn from(err: serde_json::Error) -> Self {
        TocgenError::Serialization(err.to_string())
    }
}

impl From<String> for TocgenError {
    fn from(msg: String) -> Self {
        TocgenError::Generic(msg)
    }
}

impl From<&str> for TocgenError {
    fn from(msg: &str) -> Self {
        TocgenError::Generic(msg.to_string())
    }
}
