use std::fmt;

/// Result type for member messages operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end a page fetch
#[derive(Debug)]
pub enum Error {
    /// Connection refused, timeout or other transport failure
    TransportError(String),

    /// The API answered with a non-success status
    StatusError { status: u16 },

    /// The body could not be decoded as a page
    DecodeError(String),

    /// Client construction failed
    ConfigurationError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TransportError(msg) => write!(f, "Transport error: {}", msg),
            Error::StatusError { status } => {
                write!(f, "Member messages API returned status {}", status)
            }
            Error::DecodeError(msg) => write!(f, "Malformed page: {}", msg),
            Error::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Convert reqwest errors to member messages errors
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Error::DecodeError(err.to_string());
        }
        if let Some(status) = err.status() {
            return Error::StatusError {
                status: status.as_u16(),
            };
        }
        Error::TransportError(err.to_string())
    }
}

/// Convert JSON errors to member messages errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::DecodeError(err.to_string())
    }
}
