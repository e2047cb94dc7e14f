//! Dealing with recipes.

use serde_json::{Map, Value};

use crate::error::Error;

/// Attribute identifying a recipe in the store.
///
/// Doubles as the table's partition key, so it must be a non-empty string.
pub const KEY_ATTRIBUTE: &str = "name";

/// Recipe accepted for storage.
///
/// Wraps the caller-supplied JSON object after validation; all attributes
/// are passed through to the store verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct Recipe(Map<String, Value>);

impl Recipe {
    /// Parses a request body into a recipe.
    pub fn parse(body: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(body)?;
        let attributes = match value {
            Value::Object(attributes) => attributes,
            other => return Err(Error::InvalidInput(
                format!("expected a JSON object, got {}", type_name(&other)),
            )),
        };
        match attributes.get(KEY_ATTRIBUTE) {
            Some(Value::String(name)) if !name.is_empty() => {},
            Some(_) => return Err(Error::InvalidInput(
                format!("\"{}\" must be a non-empty string", KEY_ATTRIBUTE),
            )),
            None => return Err(Error::InvalidInput(
                format!("missing \"{}\" attribute", KEY_ATTRIBUTE),
            )),
        }
        Ok(Recipe(attributes))
    }

    /// Name of the recipe.
    pub fn name(&self) -> &str {
        match self.0.get(KEY_ATTRIBUTE) {
            Some(Value::String(name)) => name,
            // parse guarantees the key attribute
            _ => unreachable!("recipe without a \"{}\" attribute", KEY_ATTRIBUTE),
        }
    }

    /// Attributes to be stored.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.0
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
