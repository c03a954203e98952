//! CLI command and subcommand definitions

use bible_core::{Testament, DEFAULT_TRANSLATION};
use clap::{Parser, Subcommand};

/// Bible API CLI
#[derive(Parser, Debug)]
#[command(name = "biblectl")]
#[command(version, about = "Bible API CLI", long_about = None)]
pub struct Cli {
    /// Base URL of the bible-api server (overrides config file)
    #[arg(short, long)]
    pub server: Option<String>,

    /// Enable verbose logging (overrides config file)
    #[arg(short, long)]
    pub verbose: Option<bool>,

    /// Don't load config file
    #[arg(long)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Old or New Testament, spelled the way the server expects it.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TestamentArg {
    /// Old Testament
    #[value(name = "OT")]
    Old,
    /// New Testament
    #[value(name = "NT")]
    New,
}

impl From<TestamentArg> for Testament {
    fn from(testament: TestamentArg) -> Self {
        match testament {
            TestamentArg::Old => Testament::Old,
            TestamentArg::New => Testament::New,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a verse or passage
    Verse {
        /// Bible reference, e.g. 'John 3:16'
        reference: String,

        /// Translation ID
        #[arg(short, long)]
        translation: Option<String>,
    },

    /// List translations
    Translations,

    /// List books for a translation
    Books {
        /// Translation ID (default: web)
        #[arg(short, long, default_value = DEFAULT_TRANSLATION)]
        translation: String,
    },

    /// List chapters for a book in a translation
    Chapters {
        /// Book ID (e.g. JHN)
        book: String,

        /// Translation ID (default: web)
        #[arg(short, long, default_value = DEFAULT_TRANSLATION)]
        translation: String,
    },

    /// Get a random verse
    Random {
        /// Comma-separated list of book IDs
        #[arg(long, value_delimiter = ',', conflicts_with = "testament")]
        books: Option<Vec<String>>,

        /// Limit to Old or New Testament
        #[arg(long, value_enum)]
        testament: Option<TestamentArg>,
    },

    /// Show or manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },

    /// Reset configuration to defaults
    Reset,
}
