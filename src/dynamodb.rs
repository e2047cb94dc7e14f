//! Deals with Amazon DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnConsumedCapacity};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::Config;
use crate::error::Error;
use crate::recipes::Recipe;
use crate::store::RecipeStore;

/// Upper bound on a single put before its outcome is treated as unknown.
pub const PUT_DEADLINE: Duration = Duration::from_secs(10);

/// Recipe table on DynamoDB.
pub struct RecipeTable {
    table_name: String,
    dynamodb: aws_sdk_dynamodb::Client,
}

impl RecipeTable {
    /// Creates a table bound to the configured table name.
    pub fn new(config: &Config, dynamodb: aws_sdk_dynamodb::Client) -> Self {
        RecipeTable {
            table_name: config.table_name.clone(),
            dynamodb,
        }
    }
}

#[async_trait]
impl RecipeStore for RecipeTable {
    async fn put_recipe(&self, recipe: &Recipe) -> Result<(), Error> {
        let request = self.dynamodb.put_item()
            .table_name(self.table_name.clone())
            .set_item(Some(to_attribute_map(recipe.attributes())))
            .return_consumed_capacity(ReturnConsumedCapacity::Total)
            .send();
        let output = timeout(PUT_DEADLINE, request).await??;
        tracing::info!(
            "stored recipe in {}: {:?}",
            self.table_name,
            output.consumed_capacity(),
        );
        Ok(())
    }
}

/// Converts a JSON object into DynamoDB item attributes.
pub fn to_attribute_map(
    object: &Map<String, Value>,
) -> HashMap<String, AttributeValue> {
    object
        .iter()
        .map(|(name, value)| (name.clone(), to_attribute_value(value)))
        .collect()
}

fn to_attribute_value(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(*flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text.clone()),
        Value::Array(items) => AttributeValue::L(
            items.iter().map(to_attribute_value).collect(),
        ),
        Value::Object(object) => AttributeValue::M(to_attribute_map(object)),
    }
}
