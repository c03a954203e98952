//! Bible API CLI
//!
//! Command-line interface for querying a bible-api server.

use anyhow::Result;
use biblectl::cli::{
    generate_completion, handle_books, handle_chapters, handle_config, handle_random,
    handle_translations, handle_verse, Cli, Commands,
};
use biblectl::client::BibleClient;
use biblectl::config::CliConfig;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Build configuration using priority chain: defaults → file → env → CLI args
    let mut builder = CliConfig::builder();

    // Load config file (unless --no-config is specified)
    builder = builder.with_config_file(!cli.no_config)?;

    // Apply environment variable overrides
    builder = builder.with_env_overrides();

    // Apply CLI argument overrides (highest priority)
    if let Some(ref server) = cli.server {
        builder = builder.with_server_url(server)?;
    }
    if let Some(verbose) = cli.verbose {
        builder = builder.with_verbose(verbose);
    }

    // Build final configuration with validation
    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let verbose = config.verbose;
    if verbose {
        eprintln!("Verbose mode enabled");
        eprintln!("Server URL: {}", config.server_url);
    }

    // Construction performs no network access; the single request happens
    // when the command executes.
    let client = BibleClient::new(&config.server_url)?;

    // Execute commands
    let result = match cli.command {
        Commands::Verse {
            reference,
            translation,
        } => handle_verse(&client, &reference, translation.as_deref())
            .await
            .map(|_| ()),
        Commands::Translations => handle_translations(&client).await.map(|_| ()),
        Commands::Books { translation } => handle_books(&client, &translation).await.map(|_| ()),
        Commands::Chapters { book, translation } => {
            handle_chapters(&client, &translation, &book).await.map(|_| ())
        }
        Commands::Random { books, testament } => {
            handle_random(&client, books, testament).await.map(|_| ())
        }
        Commands::Config { command } => handle_config(command, &config),
        Commands::Completion { shell } => {
            generate_completion(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if verbose {
            eprintln!("Error details: {:?}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
