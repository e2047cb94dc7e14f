//! Process configuration.

use std::env;

use crate::error::Error;

/// Environment variable naming the recipe table.
pub const TABLE_NAME_VAR: &str = "openbrew_dynamo_table";

/// Settings resolved once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// DynamoDB table that stores recipes.
    pub table_name: String,
}

impl Config {
    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        let table_name = env::var(TABLE_NAME_VAR)
            .map_err(|_| Error::MissingConfiguration(
                format!("no {} set", TABLE_NAME_VAR),
            ))?;
        if table_name.is_empty() {
            return Err(Error::MissingConfiguration(
                format!("{} is empty", TABLE_NAME_VAR),
            ));
        }
        Ok(Config { table_name })
    }
}
