use std::process::ExitCode;

use bst::Tree;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Order, Traversal};
use crate::error::{CliError, CliResult};

mod cli;
mod error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    setup_logging(&cli.log)?;

    let values = cli.load_values()?;
    let mut tree = Tree::build(values);
    info!(len = tree.len(), height = tree.height(), "built tree");

    for value in &cli.insert {
        if !tree.insert(*value) {
            warn!(value, "already in the tree, not inserted");
        }
    }
    for value in &cli.delete {
        if tree.delete(value).is_none() {
            warn!(value, "not in the tree, nothing deleted");
        }
    }

    for value in &cli.find {
        match (tree.find(value), tree.depth(value)) {
            (Some(node), Some(depth)) => {
                println!("{value}: height {}, depth {depth}", node.height());
            }
            _ => println!("{value}: not found"),
        }
    }

    for traversal in expand(&cli.order) {
        println!("{:<6} {}", label(traversal), traverse(&tree, traversal).join(" "));
    }

    if cli.print {
        print!("{tree}");
        println!(
            "height {}, {} values, {}",
            tree.height(),
            tree.len(),
            if tree.is_balanced() {
                "balanced"
            } else {
                "unbalanced"
            }
        );
    }

    Ok(())
}

/// Sends `tracing` output to stderr, filtered by `filter`.
fn setup_logging(filter: &str) -> CliResult<()> {
    let env_filter = EnvFilter::try_new(filter).map_err(|source| CliError::LogFilter {
        filter: filter.to_string(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    Ok(())
}

/// Flattens the requested orders into the traversals to print, in request order.
fn expand(orders: &[Order]) -> Vec<Traversal> {
    orders
        .iter()
        .flat_map(|order| order.traversals().iter().copied())
        .collect()
}

fn label(traversal: Traversal) -> &'static str {
    match traversal {
        Traversal::Pre => "pre:",
        Traversal::In => "in:",
        Traversal::Post => "post:",
        Traversal::Level => "level:",
    }
}

fn traverse(tree: &Tree<i64>, traversal: Traversal) -> Vec<String> {
    let values: Vec<&i64> = match traversal {
        Traversal::Pre => tree.preorder().collect(),
        Traversal::In => tree.inorder().collect(),
        Traversal::Post => tree.postorder().collect(),
        Traversal::Level => tree.level_order().collect(),
    };

    values.into_iter().map(ToString::to_string).collect()
}
