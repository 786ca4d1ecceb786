use thiserror::Error;

/// Errors surfaced by the recorder and the export helper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DcError {
    /// No element with the given id exists in the document.
    #[error("element not found: #{0}")]
    ElementNotFound(String),

    /// A recorder call received a malformed numeric or string argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A host (DOM) call raised an exception.
    #[error("host error: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, DcError>;

impl DcError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        DcError::InvalidArgument(msg.into())
    }
}
