//! Command line arguments for the `bst` driver.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use rand::Rng;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Range random values are drawn from.
const RANDOM_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

/// Build a balanced binary search tree, edit it, and print what's left.
#[derive(Parser, Debug)]
#[command(name = "bst")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Values to build the tree from, separated by commas or whitespace
    #[arg(value_delimiter = ',', env = "BST_VALUES")]
    pub values: Vec<String>,

    /// Build from whitespace separated values in this file instead
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Build from this many random values between 1 and 100 instead
    #[arg(short, long, value_name = "COUNT", conflicts_with = "input")]
    pub random: Option<usize>,

    /// Insert a value after building
    #[arg(long, value_name = "VALUE")]
    pub insert: Vec<i64>,

    /// Delete a value after inserting
    #[arg(long, value_name = "VALUE")]
    pub delete: Vec<i64>,

    /// Look up a value and report its height and depth
    #[arg(long, value_name = "VALUE")]
    pub find: Vec<i64>,

    /// Traversal orders to print
    #[arg(short, long, value_enum, value_delimiter = ',', default_values_t = [Order::In])]
    pub order: Vec<Order>,

    /// Draw the tree
    #[arg(short, long)]
    pub print: bool,

    /// Log filter, e.g. `debug` or `bst=trace`
    #[arg(long, env = "BST_LOG", default_value = "warn")]
    pub log: String,
}

/// A traversal order.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, left, right
    Pre,
    /// Left, node, right
    In,
    /// Left, right, node
    Post,
    /// Breadth first
    Level,
    /// Every order above, one after the other
    All,
}

/// A single traversal an [`Order`] expands to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    Pre,
    In,
    Post,
    Level,
}

impl Order {
    /// The traversals to print for this order.
    pub fn traversals(self) -> &'static [Traversal] {
        match self {
            Order::Pre => &[Traversal::Pre],
            Order::In => &[Traversal::In],
            Order::Post => &[Traversal::Post],
            Order::Level => &[Traversal::Level],
            Order::All => &[
                Traversal::Pre,
                Traversal::In,
                Traversal::Post,
                Traversal::Level,
            ],
        }
    }
}

impl Cli {
    /// The values to build the tree from. A file wins over random values, which win over values
    /// given on the command line.
    pub fn load_values(&self) -> CliResult<Vec<i64>> {
        if let Some(path) = &self.input {
            let text = fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            return parse_values(&text, path);
        }

        if let Some(count) = self.random {
            debug!(count, "generating random values");
            let mut rng = rand::rng();
            return Ok((0..count)
                .map(|_| rng.random_range(RANDOM_RANGE))
                .collect());
        }

        parse_tokens(&self.values)
    }
}

/// Parses values given as arguments or through `BST_VALUES`. Clap already split them on commas;
/// each piece may still hold several whitespace separated integers.
pub fn parse_tokens(raw: &[String]) -> CliResult<Vec<i64>> {
    raw.iter()
        .flat_map(|piece| piece.split_whitespace())
        .map(|token| {
            token.parse().map_err(|source| CliError::Value {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Parses whitespace separated integers. `path` is only used to point errors at the input.
pub fn parse_values(text: &str, path: &Path) -> CliResult<Vec<i64>> {
    let mut values = Vec::new();
    for (i, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let value = token.parse().map_err(|source| CliError::Parse {
                path: path.to_path_buf(),
                line: i + 1,
                token: token.to_string(),
                source,
            })?;
            values.push(value);
        }
    }

    Ok(values)
}
