//! Bible API CLI Library
//!
//! This library provides the core functionality for the biblectl tool.
//!
//! # Public API
//!
//! The primary public API is the [`client::BibleClient`] which provides
//! programmatic access to a bible-api server. Configuration types are also
//! available via [`config::CliConfig`] and [`config::ConfigBuilder`].
//!
//! ```no_run
//! use biblectl::client::BibleClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = BibleClient::new("http://localhost:4567")?;
//!
//! let verse = client.get_verse("John 3:16", Some("kjv")).await?;
//! println!("{}", verse["text"]);
//! # Ok(())
//! # }
//! ```

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// HTTP client for communicating with a bible-api server.
pub mod client;

/// Configuration types for the CLI tool.
pub mod config;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;

#[cfg(test)]
pub mod test_utils;
