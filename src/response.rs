//! Response envelope returned to the hosting platform.

use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;

use crate::error::Error;

/// Fixed body identifying the service.
pub const WELCOME_BODY: &str = "Welcome from OpenBrew API";

/// Response envelope.
///
/// Serializes with the field names the hosting platform expects
/// (`statusCode`, `headers`, `body`).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: String,
}

impl Response {
    fn new(status_code: u16, body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            "application/json".to_string(),
        );
        Response { status_code, headers, body }
    }

    /// Fixed 200 envelope returned by the fetch handler.
    pub fn welcome() -> Self {
        Response::new(200, WELCOME_BODY.to_string())
    }

    /// Fixed 201 envelope acknowledging a stored recipe.
    pub fn created() -> Self {
        Response::new(201, WELCOME_BODY.to_string())
    }

    /// Converts an error into its envelope.
    ///
    /// Invalid input keeps its explanation; everything else gets a generic
    /// message so store and configuration details stay out of responses.
    pub fn from_error(error: &Error) -> Self {
        let (status_code, code, message) = match error {
            Error::InvalidInput(s) => (400, "invalid-input", s.clone()),
            Error::MissingConfiguration(_) => (
                500,
                "not-configured",
                "the recipe store is not configured".to_string(),
            ),
            Error::StorageFailure(_) => (
                500,
                "storage-failure",
                "storing the recipe failed".to_string(),
            ),
            Error::UnknownOutcome(_) => (
                500,
                "unknown-outcome",
                "the outcome of the write is unknown".to_string(),
            ),
        };
        Response::new(
            status_code,
            json!({ "error": code, "message": message }).to_string(),
        )
    }
}
