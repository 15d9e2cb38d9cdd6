// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use fieldmask_core::{apply, copy_present, extract, split_field_list, FieldMask};
use fieldmask_logging::CliLoggingArgs;
use serde_json::Value as J;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Select or update fields of JSON documents by dotted path"
)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, env = "FIELDMASK_PRETTY")]
    pretty: bool,

    #[command(flatten)]
    logging: CliLoggingArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print only the selected fields of a document, null for missing ones
    Extract {
        /// JSON object to read (use '-' for stdin)
        #[arg(long, default_value = "-")]
        input: PathBuf,
        /// Comma-separated dotted paths; empty selects the whole document
        #[arg(long, env = "FIELDMASK_FIELDS", default_value = "")]
        fields: String,
    },
    /// Print the value at a dotted path, failing when it does not resolve
    Get {
        /// JSON object to read (use '-' for stdin)
        #[arg(long, default_value = "-")]
        input: PathBuf,
        /// Dotted path such as address.city
        path: String,
    },
    /// Overwrite fields of a target document with the values present in a patch
    Update {
        /// JSON object to update (use '-' for stdin)
        #[arg(long)]
        target: PathBuf,
        /// JSON object holding the new values (use '-' for stdin)
        #[arg(long)]
        patch: PathBuf,
        /// Comma-separated dotted paths allowed to change; empty or omitted
        /// means every leaf present in the patch
        #[arg(long, env = "FIELDMASK_FIELDS")]
        fields: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.logging.init(env!("CARGO_CRATE_NAME"))?;

    let output = match cli.command {
        Command::Extract { input, fields } => {
            let doc = read_document(&input)?;
            let paths = split_field_list(&fields);
            tracing::debug!(count = paths.len(), "extracting fields");
            J::from(extract(&doc, &paths)?.into_owned())
        }
        Command::Get { input, path } => {
            let doc = read_document(&input)?;
            doc.get(&path)
                .cloned()
                .ok_or_else(|| anyhow!("path {path:?} not found in {}", input.display()))?
        }
        Command::Update {
            target,
            patch,
            fields,
        } => {
            if is_stdin(&target) && is_stdin(&patch) {
                bail!("--target and --patch cannot both read from stdin");
            }
            let mut doc = read_document(&target)?;
            let patch = read_document(&patch)?;

            // Same as extract: no fields means everything in the patch
            let paths = fields.as_deref().map(split_field_list).unwrap_or_default();
            let mask = if paths.is_empty() {
                patch
            } else {
                let mut mask = FieldMask::new();
                copy_present(&mut mask, &patch, &paths)?;
                mask
            };
            tracing::debug!(fields = ?mask.leaf_paths(), "applying update");
            apply(&mut doc, &mask);
            J::from(doc)
        }
    };

    print_json(&output, cli.pretty)
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_document(path: &Path) -> Result<FieldMask> {
    let content = if is_stdin(path) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("reading document from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading document {:?}", path))?
    };

    let value: J =
        serde_json::from_str(&content).with_context(|| format!("parsing JSON from {:?}", path))?;
    FieldMask::try_from(value).with_context(|| format!("document {:?} is not a JSON object", path))
}

fn print_json(value: &J, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
