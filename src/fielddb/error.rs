use thiserror::Error;

/// Failure reported by a [`Transport`](crate::transport::Transport).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The remote side answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
}

impl TransportError {
    /// The human-readable part, without the status prefix.
    pub fn message(&self) -> &str {
        match self {
            TransportError::Status { message, .. } => message,
            TransportError::Network(message) => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Network(_) => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum FieldError {
    #[error("{0}")]
    SchemaViolation(String),

    #[error("Save error: ({0})")]
    Save(String),

    #[error("FieldDB connection error: ({0})")]
    Connection(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;
