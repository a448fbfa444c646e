//! rootsum CLI - Command line interface for rootsum
//!
//! Thin wrapper around the library: hashes single values and computes or
//! compares Merkle roots over JSON arrays of items read from files.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rootsum::MerkleTree;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rootsum")]
#[command(about = "Merkle root digests for auditing ordered data collections")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a single value and print its digest
    Hash {
        /// The value, as JSON; a bare word is treated as a string
        value: String,
    },

    /// Compute the Merkle root of a JSON array of items
    Root {
        /// Path to a file holding a JSON array
        file: PathBuf,
    },

    /// Compare the Merkle roots of two JSON arrays of items
    Compare {
        /// Path to the first file
        a: PathBuf,
        /// Path to the second file
        b: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hash { value } => {
            // Accept either a JSON literal or a bare string
            let parsed: Value =
                serde_json::from_str(&value).unwrap_or_else(|_| Value::String(value.clone()));
            let hashing = rootsum::Hashing::new();
            let digest = hashing.hash_from(&parsed)?;

            output(
                &cli.format,
                &json!({
                    "digest": digest.to_hex(),
                    "engine": hashing.engine_name(),
                }),
            );
        }

        Commands::Root { file } => {
            let mut tree = load_tree(&file)?;
            let root = tree.root_hash()?;

            output(
                &cli.format,
                &json!({
                    "root": root.to_hex(),
                    "leaves": tree.len(),
                }),
            );
        }

        Commands::Compare { a, b } => {
            let mut left = load_tree(&a)?;
            let mut right = load_tree(&b)?;
            let equal = left.matches(&mut right)?;

            output(
                &cli.format,
                &json!({
                    "equal": equal,
                    "left_root": left.root_hash()?.to_hex(),
                    "right_root": right.root_hash()?.to_hex(),
                }),
            );
        }
    }

    Ok(())
}

/// Read a JSON array of items from a file and build a tree over it
fn load_tree(path: &Path) -> anyhow::Result<MerkleTree> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let items: Vec<Value> = serde_json::from_str(&text)
        .with_context(|| format!("{} does not hold a JSON array", path.display()))?;

    Ok(MerkleTree::from_values(&items)?)
}

fn output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value).unwrap());
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
    }
}
