use thiserror::Error;

/// Library result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the device client.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    Argument(#[from] ArgumentError),

    /// Failure reported by the [RequestExecutor](crate::RequestExecutor).
    #[error("transport: {0}")]
    Transport(String),

    #[error("malformed {field} page: {reason}")]
    MalformedPage { field: String, reason: String },

    #[error("response body has no `{0}` object")]
    MissingField(&'static str),

    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn malformed_page(field: &str, reason: impl Into<String>) -> Self {
        Self::MalformedPage {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error was raised by identifier validation (no request was sent).
    pub fn is_argument(&self) -> bool {
        matches!(self, Self::Argument(_))
    }
}

/// Identifier validation errors. Raised before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{what} must be a non-empty string")]
    Missing { what: &'static str },

    #[error("device pin must be an 8 digit hex string, got {pin:?}")]
    InvalidDevicePin { pin: String },
}
