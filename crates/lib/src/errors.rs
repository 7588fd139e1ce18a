use thiserror::Error;

/// Errors surfaced by the helpers and the provider clients behind them.
///
/// Provider failures are carried as they arrive: transport errors keep the
/// original `reqwest::Error`, and rejected calls keep the provider's status
/// code and response body.
#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Failed to build Reqwest client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Failed to send request to provider: {0}")]
    Request(reqwest::Error),
    #[error("Failed to deserialize provider response: {0}")]
    Deserialization(reqwest::Error),
    #[error("Provider returned an error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("Invalid resource reference: {0}")]
    InvalidReference(String),
}

impl HelperError {
    /// The HTTP status of a provider rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            HelperError::Api { status, .. } => Some(*status),
            HelperError::Request(e) | HelperError::Deserialization(e) => {
                e.status().map(|s| s.as_u16())
            }
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
