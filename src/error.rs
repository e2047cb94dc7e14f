//! Common error.

/// Common error.
#[derive(Debug)]
pub enum Error {
    InvalidInput(String),
    MissingConfiguration(String),
    StorageFailure(String),
    UnknownOutcome(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInput(s) => write!(f, "Invalid input: {}", s),
            Error::MissingConfiguration(s) => write!(f, "Missing configuration: {}", s),
            Error::StorageFailure(s) => write!(f, "Storage failure: {}", s),
            Error::UnknownOutcome(s) => write!(f, "Unknown outcome: {}", s),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidInput(format!("malformed JSON: {}", e))
    }
}

impl<E, R> From<aws_sdk_dynamodb::error::SdkError<E, R>> for Error {
    fn from(e: aws_sdk_dynamodb::error::SdkError<E, R>) -> Self {
        Error::StorageFailure(format!("{}", e))
    }
}

impl From<tokio::time::error::Elapsed> for Error {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Error::UnknownOutcome(
            "the store did not acknowledge the write in time".to_string(),
        )
    }
}
