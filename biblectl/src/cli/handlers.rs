//! Command execution handlers

use anyhow::Result;
use bible_core::RandomFilter;
use serde_json::Value;

use crate::client::BibleClient;
use crate::config::CliConfig;
use crate::format::render_json;

use super::commands::*;

/// Print the server's JSON and hand it back to the caller.
fn emit(data: Value) -> Result<Value> {
    println!("{}", render_json(&data)?);
    Ok(data)
}

/// Handle verse command
pub async fn handle_verse(
    client: &BibleClient,
    reference: &str,
    translation: Option<&str>,
) -> Result<Value> {
    let data = client.get_verse(reference, translation).await?;
    emit(data)
}

/// Handle translations command
pub async fn handle_translations(client: &BibleClient) -> Result<Value> {
    let data = client.get_translations().await?;
    emit(data)
}

/// Handle books command
pub async fn handle_books(client: &BibleClient, translation: &str) -> Result<Value> {
    let data = client.get_books(translation).await?;
    emit(data)
}

/// Handle chapters command
pub async fn handle_chapters(client: &BibleClient, translation: &str, book: &str) -> Result<Value> {
    let data = client.get_chapters(translation, book).await?;
    emit(data)
}

/// Handle random command
///
/// `--books` and `--testament` are rejected together at parse time, so at
/// most one filter reaches this point. A `--books` value with no usable IDs
/// behaves as if the flag were absent.
pub async fn handle_random(
    client: &BibleClient,
    books: Option<Vec<String>>,
    testament: Option<TestamentArg>,
) -> Result<Value> {
    let filter = match (books, testament) {
        (Some(books), _) => {
            let books: Vec<String> = books.into_iter().filter(|b| !b.is_empty()).collect();
            if books.is_empty() {
                None
            } else {
                Some(RandomFilter::Books(books))
            }
        }
        (None, Some(testament)) => Some(RandomFilter::Testament(testament.into())),
        (None, None) => None,
    };

    let data = client.get_random(filter).await?;
    emit(data)
}

/// Handle config commands
pub fn handle_config(command: ConfigCommands, current_config: &CliConfig) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            println!("{}", serde_json::to_string_pretty(current_config)?);
        }
        ConfigCommands::Set { key, value } => {
            let mut config = current_config.clone();
            let value_clone = value.clone();
            match key.as_str() {
                "server_url" => {
                    if !value.starts_with("http://") && !value.starts_with("https://") {
                        return Err(anyhow::anyhow!(
                            "Server URL must start with http:// or https://"
                        ));
                    }
                    config.server_url = value;
                }
                "verbose" => {
                    config.verbose = value.to_lowercase() == "true" || value == "1";
                }
                _ => return Err(anyhow::anyhow!("Unknown config key: {}", key)),
            }

            config.save()?;
            println!("Set {} = {}", key, value_clone);
        }
        ConfigCommands::Reset => {
            let default_config = CliConfig::default();
            default_config.save()?;
            println!("Configuration reset to defaults");
        }
    }

    Ok(())
}

/// Generate shell completion script
pub fn generate_completion(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
