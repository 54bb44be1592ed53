//! file-catalog CLI
//!
//! Bulk-loads a `name, directory, date` source and runs one query against it

use anyhow::Context;
use clap::{Parser, Subcommand};
use file_catalog::{BulkLoader, CatalogConfig, FileCatalog, FileRecord};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "file-catalog")]
#[command(about = "Query file metadata indexed by name and modification date")]
struct Args {
    /// TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Source file to load (overrides the configured source)
    #[arg(short = 's', long)]
    source: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every indexed file name
    Names,
    /// List every indexed modification date
    Dates,
    /// Look up one file by name and directory
    Find { name: String, directory: String },
    /// List files with this name
    ByName { name: String },
    /// List files last modified on this date
    ByDate { date: String },
    /// List files on this date whose name appears more than once
    MultiDir { date: String },
    /// Show index occupancy
    Stats,
}

#[derive(Serialize)]
struct Stats {
    records: usize,
    name_index: file_catalog::TableStats,
    date_index: file_catalog::TableStats,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CatalogConfig::from_path(path)
            .with_context(|| format!("reading config {:?}", path))?,
        None => CatalogConfig::default(),
    };

    let mut catalog = FileCatalog::with_config(&config)?;
    let loader = BulkLoader::from_config(&config)?;

    match args.source.as_ref().or(config.source.as_ref()) {
        Some(source) => {
            // A missing source leaves the catalog empty
            if let Err(e) = loader.load_path(&mut catalog, source) {
                warn!("Could not load {:?}: {}", source, e);
            }
        }
        None => info!("No source configured, starting with an empty catalog"),
    }

    match args.command {
        Command::Names => print_strings(sorted(catalog.find_all_names()), args.json)?,
        Command::Dates => print_strings(sorted(catalog.find_all_dates()), args.json)?,
        Command::Find { name, directory } => {
            let found: Vec<FileRecord> = catalog
                .find_file(&name, &directory)?
                .cloned()
                .into_iter()
                .collect();
            print_records(&found, args.json)?;
        }
        Command::ByName { name } => print_records(&catalog.find_files_by_name(&name)?, args.json)?,
        Command::ByDate { date } => print_records(&catalog.find_files_by_date(&date)?, args.json)?,
        Command::MultiDir { date } => {
            print_records(&catalog.find_files_in_multiple_directories(&date)?, args.json)?
        }
        Command::Stats => {
            let stats = Stats {
                records: catalog.len(),
                name_index: catalog.name_index_stats(),
                date_index: catalog.date_index_stats(),
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("records: {}", stats.records);
                let tables = [
                    ("name index", stats.name_index),
                    ("date index", stats.date_index),
                ];
                for (label, table) in tables {
                    println!(
                        "{}: {} keys in {} buckets ({} occupied, longest chain {}, load {:.2})",
                        label,
                        table.len,
                        table.capacity,
                        table.occupied_buckets,
                        table.longest_chain,
                        table.load
                    );
                }
            }
        }
    }

    Ok(())
}

fn sorted(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values
}

fn print_strings(values: Vec<String>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for value in values {
            println!("{}", value);
        }
    }
    Ok(())
}

fn print_records(records: &[FileRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else if records.is_empty() {
        println!("No matching files");
    } else {
        for record in records {
            println!("{}", record);
        }
    }
    Ok(())
}
