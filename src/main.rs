use anyhow::{Context, Error};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::read_to_string;

use openbrew_api::config::Config;
use openbrew_api::dynamodb::RecipeTable;
use openbrew_api::handlers::{handle_create, handle_fetch};
use openbrew_api::recipes::Recipe;
use openbrew_api::store::RecipeStore;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands
}

#[derive(Subcommand)]
enum Commands {
    /// Stores a recipe from a JSON file in the recipe table.
    Put {
        /// Path to the recipe JSON file.
        recipe_file: String,
    },
    /// Runs a handler locally on an event read from a JSON file.
    Invoke {
        /// Handler to run.
        #[arg(value_enum)]
        handler: Handler,
        /// Path to the event JSON file.
        event_file: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Handler {
    /// Returns the welcome payload.
    Fetch,
    /// Stores the recipe carried in the event's body.
    Create,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Put { recipe_file } => {
            put(recipe_file).await?;
        },
        Commands::Invoke { handler, event_file } => {
            invoke(handler, event_file).await?;
        },
    }
    Ok(())
}

async fn put(recipe_file: String) -> Result<(), Error> {
    let config = Config::from_env()
        .context("recipe table is not configured")?;
    println!("recipe table: {}", config.table_name);
    let body = read_to_string(&recipe_file)
        .with_context(|| format!("failed to read {}", recipe_file))?;
    let recipe = Recipe::parse(&body)
        .with_context(|| format!("invalid recipe in {}", recipe_file))?;
    let table = recipe_table(&config).await;
    table.put_recipe(&recipe).await?;
    println!("stored recipe: {}", recipe.name());
    Ok(())
}

async fn invoke(handler: Handler, event_file: String) -> Result<(), Error> {
    let event = read_to_string(&event_file)
        .with_context(|| format!("failed to read {}", event_file))?;
    let event = serde_json::from_str(&event)
        .with_context(|| format!("invalid event in {}", event_file))?;
    let response = match handler {
        Handler::Fetch => handle_fetch(&event),
        Handler::Create => {
            let config = Config::from_env()
                .context("recipe table is not configured")?;
            let table = recipe_table(&config).await;
            handle_create(&table, &event).await
        },
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn recipe_table(config: &Config) -> RecipeTable {
    let sdk_config = aws_config::load_from_env().await;
    RecipeTable::new(config, aws_sdk_dynamodb::Client::new(&sdk_config))
}
