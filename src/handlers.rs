//! Request handlers for the OpenBrew API.

use serde_json::Value;

use crate::error::Error;
use crate::recipes::Recipe;
use crate::response::Response;
use crate::store::RecipeStore;

/// Returns the fixed welcome payload.
///
/// The event contents are ignored, so this handler cannot fail.
pub fn handle_fetch(_event: &Value) -> Response {
    Response::welcome()
}

/// Parses the event's body and stores it as a recipe.
///
/// Every failure is converted into a response envelope here; nothing
/// propagates to the hosting platform as an unhandled fault.
pub async fn handle_create<S: RecipeStore>(store: &S, event: &Value) -> Response {
    match create_recipe(store, event).await {
        Ok(()) => Response::created(),
        Err(error) => {
            tracing::error!("failed to create a recipe: {}", error);
            Response::from_error(&error)
        },
    }
}

async fn create_recipe<S: RecipeStore>(
    store: &S,
    event: &Value,
) -> Result<(), Error> {
    let body = request_body(event)?;
    let recipe = Recipe::parse(body)?;
    store.put_recipe(&recipe).await
}

/// Extracts the `body` field from an inbound event.
///
/// Other event fields may exist and are ignored.
fn request_body(event: &Value) -> Result<&str, Error> {
    match event.get("body") {
        Some(Value::String(body)) => Ok(body),
        Some(_) => Err(Error::InvalidInput(
            "the \"body\" field must be a string".to_string(),
        )),
        None => Err(Error::InvalidInput(
            "missing \"body\" field".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    use crate::response::WELCOME_BODY;

    // In-memory store recording every accepted recipe.
    #[derive(Clone, Default)]
    struct RecordingStore {
        recipes: Arc<Mutex<Vec<Recipe>>>,
        failure: Option<fn() -> Error>,
    }

    impl RecordingStore {
        fn new() -> Self {
            RecordingStore::default()
        }

        fn failing(failure: fn() -> Error) -> Self {
            RecordingStore {
                failure: Some(failure),
                ..RecordingStore::default()
            }
        }

        fn recipes(&self) -> Vec<Recipe> {
            self.recipes.lock().expect("recipes mutex poisoned").clone()
        }
    }

    #[async_trait]
    impl RecipeStore for RecordingStore {
        async fn put_recipe(&self, recipe: &Recipe) -> Result<(), Error> {
            if let Some(failure) = self.failure {
                return Err(failure());
            }
            let mut guard = self.recipes.lock().expect("recipes mutex poisoned");
            guard.push(recipe.clone());
            Ok(())
        }
    }

    fn error_code(response: &Response) -> String {
        let body: Value = serde_json::from_str(&response.body).unwrap();
        body["error"].as_str().unwrap().to_string()
    }

    #[test]
    fn handle_fetch_returns_the_welcome_envelope_for_any_event() {
        let events = [
            json!(null),
            json!({}),
            json!({ "body": "{invalid" }),
            json!({ "httpMethod": "GET", "path": "/recipes" }),
            json!([1, 2, 3]),
        ];
        for event in events {
            let response = handle_fetch(&event);
            assert_eq!(response.status_code, 200);
            assert_eq!(response.body, WELCOME_BODY);
            assert_eq!(
                response.headers.get("Content-Type").map(String::as_str),
                Some("application/json"),
            );
        }
    }

    #[tokio::test]
    async fn handle_create_stores_the_parsed_recipe() {
        let store = RecordingStore::new();
        let event = json!({
            "body": "{\"name\": \"Pale Ale\", \"abv\": 5.2}",
        });

        let response = handle_create(&store, &event).await;

        assert_eq!(response.status_code, 201);
        assert_eq!(response.body, WELCOME_BODY);
        let recipes = store.recipes();
        assert_eq!(recipes.len(), 1);
        assert_eq!(
            Value::Object(recipes[0].attributes().clone()),
            json!({ "name": "Pale Ale", "abv": 5.2 }),
        );
    }

    #[tokio::test]
    async fn handle_create_ignores_other_event_fields() {
        let store = RecordingStore::new();
        let event = json!({
            "body": "{\"name\": \"Stout\"}",
            "httpMethod": "POST",
            "headers": { "X-Forwarded-For": "10.0.0.1" },
        });

        let response = handle_create(&store, &event).await;

        assert_eq!(response.status_code, 201);
        assert_eq!(store.recipes().len(), 1);
    }

    #[tokio::test]
    async fn handle_create_rejects_malformed_json_without_writing() {
        let store = RecordingStore::new();
        let event = json!({ "body": "not json" });

        let response = handle_create(&store, &event).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(error_code(&response), "invalid-input");
        assert!(store.recipes().is_empty());
    }

    #[tokio::test]
    async fn handle_create_rejects_a_missing_body_without_writing() {
        let store = RecordingStore::new();
        let event = json!({ "httpMethod": "POST" });

        let response = handle_create(&store, &event).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(error_code(&response), "invalid-input");
        assert!(store.recipes().is_empty());
    }

    #[tokio::test]
    async fn handle_create_rejects_a_non_string_body_without_writing() {
        let store = RecordingStore::new();
        let event = json!({ "body": { "name": "Pale Ale" } });

        let response = handle_create(&store, &event).await;

        assert_eq!(response.status_code, 400);
        assert!(store.recipes().is_empty());
    }

    #[tokio::test]
    async fn handle_create_reports_storage_failures_as_500() {
        let store = RecordingStore::failing(|| {
            Error::StorageFailure("throttled".to_string())
        });
        let event = json!({ "body": "{\"name\": \"Pale Ale\"}" });

        let response = handle_create(&store, &event).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(error_code(&response), "storage-failure");
    }

    #[tokio::test]
    async fn handle_create_reports_an_unknown_outcome_distinctly() {
        let store = RecordingStore::failing(|| {
            Error::UnknownOutcome("deadline elapsed".to_string())
        });
        let event = json!({ "body": "{\"name\": \"Pale Ale\"}" });

        let response = handle_create(&store, &event).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(error_code(&response), "unknown-outcome");
    }
}
