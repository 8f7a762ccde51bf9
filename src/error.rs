use std::fmt;

pub type Result<T> = std::result::Result<T, NetError>;

/// All errors that can occur while building, training or persisting a network.
#[derive(Debug)]
pub enum NetError {
    /// Invalid construction or training parameters.
    InvalidConfig(String),
    /// A vector or dataset length disagrees with the network topology.
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Reading or writing a model / config file failed.
    Io(std::io::Error),
    /// The document could not be encoded or decoded.
    Json(serde_json::Error),
    /// The document parsed but does not describe a consistent network.
    MalformedModel(String),
}

impl NetError {
    pub(crate) fn shape(context: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { context, expected, actual }
    }

    /// True for the errors raised by save/load.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Json(_) | Self::MalformedModel(_))
    }
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::ShapeMismatch { context, expected, actual } => {
                write!(f, "shape mismatch in {context}: expected {expected}, got {actual}")
            }
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
            Self::MalformedModel(msg) => write!(f, "malformed model: {msg}"),
        }
    }
}

impl std::error::Error for NetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NetError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
