//! Errors the `bst` driver reports to the user. The tree itself never fails.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the driver before it prints a tree.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: `{token}` is not an integer: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("`{token}` is not an integer: {source}")]
    Value {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid log filter `{filter}`: {source}")]
    LogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Result type for driver operations.
pub type CliResult<T> = Result<T, CliError>;
