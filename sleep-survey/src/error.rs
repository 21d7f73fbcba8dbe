use crate::{Missing, ScaleError};

/// Error type for the prediction client boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// No response: connection refused, timeout, DNS failure, failed health probe.
    #[error("Cannot reach prediction server: {0}")]
    Connectivity(String),

    /// The server answered with a non-2xx status.
    #[error("Prediction server returned HTTP {status}")]
    Server { status: u16, body: String },

    /// A 2xx answer without a usable `prediction` field.
    #[error("Unexpected response from prediction server: {0}")]
    MalformedResponse(String),
}

/// Why a submit cycle did not produce a prediction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Validation failed; nothing was sent.
    #[error("Survey incomplete, missing: {}", list(.missing))]
    IncompleteForm { missing: Vec<Missing> },

    /// A stored rating has no label on its scale.
    #[error(transparent)]
    UnknownRating(#[from] ScaleError),

    #[error("Cannot reach prediction server: {0}")]
    Connectivity(String),

    #[error("Prediction server returned HTTP {status}")]
    Server { status: u16, body: String },

    #[error("Unexpected response from prediction server: {0}")]
    MalformedResponse(String),
}

impl SubmitError {
    /// Whether the user can fix this by retrying or correcting input.
    ///
    /// `UnknownRating` means the input widgets emitted a value the scale does
    /// not know about, which retrying will not fix.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::UnknownRating(_))
    }
}

fn list(missing: &[Missing]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ClientError> for SubmitError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Connectivity(detail) => Self::Connectivity(detail),
            ClientError::Server { status, body } => Self::Server { status, body },
            ClientError::MalformedResponse(detail) => Self::MalformedResponse(detail),
        }
    }
}
