/// Console error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog line {line}: {message}")]
    CatalogParse { line: usize, message: String },

    #[error("Catalog error: {0}")]
    Catalog(#[from] reel_core::CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Command line parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),

    #[error("Missing argument for {command}: expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
}
