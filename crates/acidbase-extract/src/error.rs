use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("extraction credential is not configured: set {0}")]
    MissingCredential(String),

    #[error("the extraction service is still overloaded after {attempts} attempts, try again later")]
    Overloaded { attempts: u32 },

    #[error("extraction timed out after {0:?}")]
    Timeout(Duration),

    #[error("extraction reply is not a valid report: {0}")]
    ResponseParse(String),

    #[error("extraction failed: {0}")]
    Invocation(String),

    #[error("unsupported document type: {0}")]
    UnsupportedDocument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Transient service overload, the only failure worth retrying.
    pub fn is_overloaded(&self) -> bool {
        match self {
            Self::Invocation(message) => {
                let message = message.to_ascii_lowercase();
                message.contains("503") || message.contains("overloaded")
            }
            _ => false,
        }
    }
}
