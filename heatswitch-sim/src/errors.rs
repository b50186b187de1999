use thiserror::Error;

/// Rejection of a subsidy request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubsidyError {
    #[error("invalid investment amount: {0}")]
    InvalidInvestment(f64),
}

/// Failure at the JSON request/response boundary.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The body is not a complete request. The detail stays internal.
    #[error("Invalid input")]
    Malformed(#[source] serde_json::Error),
    /// A well-formed request failed validation. The message is shown to the caller as is.
    #[error(transparent)]
    Validation(#[from] SubsidyError),
    #[error("Could not encode result: {0}")]
    Encode(#[source] serde_json::Error),
}

impl RequestError {
    /// HTTP-style status for the request-handling collaborator.
    pub fn status(&self) -> u16 {
        match self {
            RequestError::Malformed(_) | RequestError::Validation(_) => 400,
            RequestError::Encode(_) => 500,
        }
    }
}
