//! Command-line access to fpkit helpers.
//!
//! Record commands read a JSON array of objects, apply one identifier-keyed
//! operation, and print the result as JSON. Inputs are never modified unless
//! `--write` is passed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use fpkit::core::collection::{find_by, remove_by, update_by};
use fpkit::core::record::{field_equal, parse_id};
use fpkit::core::text::highlight;
use fpkit::core::url::{QueryParams, get_query_params};
use fpkit::exit_codes;
use fpkit::io::config::{FpkitConfig, load_config, write_config};
use fpkit::io::history::{History, MemoryHistory, append_query_params};
use fpkit::io::records::{load_records, write_records};
use fpkit::logging;
use fpkit::random::create_random_string;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "fpkit",
    version,
    about = "Functional helpers for records, strings and URLs"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = "fpkit.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the first record whose id matches.
    Find {
        #[arg(long)]
        file: PathBuf,
        /// Identifier; JSON scalars keep their type (`2` vs `"2"`).
        #[arg(long)]
        id: String,
    },
    /// Replace the first record whose id matches.
    Update {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        id: String,
        /// Replacement record as a JSON object.
        #[arg(long)]
        record: String,
        /// Write the result back to `--file` instead of printing it.
        #[arg(long)]
        write: bool,
    },
    /// Remove the first record whose id matches.
    Remove {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        id: String,
        /// Write the result back to `--file` instead of printing it.
        #[arg(long)]
        write: bool,
    },
    /// Print the query parameters of a URL, or the URL with parameters merged in.
    Query {
        url: String,
        /// `key=value` pairs to merge into the URL's query string.
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
    /// Wrap occurrences of the search words in `<mark>` tags.
    Highlight { word: String, text: String },
    /// Print a random alphanumeric string.
    Random {
        #[arg(long)]
        length: Option<usize>,
    },
    /// Write a config file with default values.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config_path = cli.config;
    match cli.command {
        Command::InitConfig { force } => cmd_init_config(&config_path, force),
        Command::Find { file, id } => cmd_find(&config(&config_path)?, &file, &id),
        Command::Update {
            file,
            id,
            record,
            write,
        } => cmd_update(&config(&config_path)?, &file, &id, &record, write),
        Command::Remove { file, id, write } => {
            cmd_remove(&config(&config_path)?, &file, &id, write)
        }
        Command::Query { url, set } => cmd_query(&url, &set),
        Command::Highlight { word, text } => {
            let cfg = config(&config_path)?;
            println!("{}", highlight(&word, &cfg.highlight_delimiter)(&text));
            Ok(exit_codes::OK)
        }
        Command::Random { length } => {
            let length = match length {
                Some(length) => length,
                None => config(&config_path)?.random_string_length,
            };
            println!("{}", create_random_string(length));
            Ok(exit_codes::OK)
        }
    }
}

fn config(path: &Path) -> Result<FpkitConfig> {
    let cfg = load_config(path)?;
    debug!(config = %path.display(), id_field = %cfg.id_field, "loaded config");
    Ok(cfg)
}

fn cmd_init_config(path: &Path, force: bool) -> Result<i32> {
    if path.exists() && !force {
        info!(path = %path.display(), "config exists; leaving it unchanged");
        return Ok(exit_codes::OK);
    }
    write_config(path, &FpkitConfig::default())?;
    Ok(exit_codes::OK)
}

fn cmd_find(cfg: &FpkitConfig, file: &Path, raw_id: &str) -> Result<i32> {
    let records = load_records(file)?;
    let id = parse_id(raw_id);
    match find_by(field_equal(&cfg.id_field, &id), &records) {
        Some(record) => {
            print_json(record)?;
            Ok(exit_codes::OK)
        }
        None => {
            eprintln!("no record with {} = {}", cfg.id_field, id);
            Ok(exit_codes::NOT_FOUND)
        }
    }
}

fn cmd_update(
    cfg: &FpkitConfig,
    file: &Path,
    raw_id: &str,
    raw_record: &str,
    write: bool,
) -> Result<i32> {
    let records = load_records(file)?;
    let id = parse_id(raw_id);
    let replacement: Value = serde_json::from_str(raw_record).context("parse --record json")?;
    if !replacement.is_object() {
        return Err(anyhow!("--record must be a JSON object"));
    }
    let next = update_by(field_equal(&cfg.id_field, &id), replacement)(&records);
    emit_records(file, &next, write)
}

fn cmd_remove(cfg: &FpkitConfig, file: &Path, raw_id: &str, write: bool) -> Result<i32> {
    let records = load_records(file)?;
    let id = parse_id(raw_id);
    let next = remove_by(field_equal(&cfg.id_field, &id))(&records);
    emit_records(file, &next, write)
}

fn cmd_query(url: &str, pairs: &[String]) -> Result<i32> {
    if pairs.is_empty() {
        print_json(&get_query_params(url))?;
        return Ok(exit_codes::OK);
    }
    let params = parse_pairs(pairs)?;
    let mut history = MemoryHistory::new(url);
    append_query_params(&mut history, &params);
    println!("{}", history.location());
    Ok(exit_codes::OK)
}

fn parse_pairs(pairs: &[String]) -> Result<QueryParams> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| anyhow!("--set expects KEY=VALUE, got '{}'", pair))
        })
        .collect::<Result<Vec<_>>>()
        .map(|entries| entries.into_iter().collect())
}

fn emit_records(file: &Path, records: &[Value], write: bool) -> Result<i32> {
    if write {
        write_records(file, records)?;
    } else {
        print_json(records)?;
    }
    Ok(exit_codes::OK)
}

/// Print `value` as pretty-printed JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{}", payload);
    Ok(())
}
