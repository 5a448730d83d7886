use crate::{
    error::AppResult,
    settings::{OutputFormat, Settings},
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use s7addr_core::{
    classify_access_area, extract_address, format_address, parse_access_area, PlcTag,
    Softdatatype,
};
use serde::Serialize;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Render classic S7 absolute addresses (DB10.DBX4.2, MW100, T5)
/// from S7CommPlus tag descriptors.
#[derive(Debug, Parser)]
#[command(name = "s7addr")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "S7 classic address formatter", long_about = None)]
pub struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, 's7addr.toml' in the current working directory is used
    /// when present.
    #[arg(short, long, env = "S7ADDR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the classic address of every tag in a JSON tag export
    Extract {
        /// JSON array of tags: {"name", "address": {"accessArea", "lids"}, "datatype"}
        #[arg(short, long)]
        tags: PathBuf,
    },
    /// Render an address from already extracted fields
    Format {
        /// Area token: DB, I, Q, M, C, T (anything else is printed verbatim)
        #[arg(short, long)]
        area: Option<String>,
        /// Data block number
        #[arg(long, default_value_t = 0)]
        db: u32,
        /// Softdatatype name (BOOL, WORD, ...) or numeric code
        #[arg(short, long, value_parser = parse_datatype)]
        datatype: Softdatatype,
        /// Byte offset, or cell number for counters and timers
        #[arg(short, long)]
        byte: u32,
        /// Bit offset for BOOL
        #[arg(long)]
        bit: Option<u32>,
    },
    /// Show the memory area of a raw access-area code (decimal or 0x hex)
    Classify {
        #[arg(value_parser = parse_code)]
        code: u32,
    },
}

fn parse_datatype(s: &str) -> Result<Softdatatype, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_code(s: &str) -> Result<u32, String> {
    parse_access_area(s).map_err(|e| format!("{e}"))
}

#[derive(Debug, Serialize)]
struct TagLine<'a> {
    name: &'a str,
    address: &'a str,
}

/// Load a JSON tag export.
pub fn load_tags(path: &Path) -> AppResult<Vec<PlcTag>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read tag file {}", path.display()))?;
    let tags: Vec<PlcTag> = serde_json::from_str(&raw)?;
    tracing::debug!(count = tags.len(), path = %path.display(), "loaded tag export");
    Ok(tags)
}

/// Write one line per tag in the configured output format.
pub fn write_tags<W: Write>(out: &mut W, tags: &[PlcTag], settings: &Settings) -> AppResult<usize> {
    let mut written = 0;
    for tag in tags {
        let address = extract_address(Some(tag));
        if address.is_empty() {
            tracing::debug!(tag = %tag.name, "address not available");
            if settings.output.skip_unavailable {
                continue;
            }
        }
        match settings.output.format {
            OutputFormat::Table => writeln!(out, "{}\t{}", tag.name, address)?,
            OutputFormat::Json => {
                serde_json::to_writer(
                    &mut *out,
                    &TagLine {
                        name: &tag.name,
                        address: &address,
                    },
                )?;
                writeln!(out)?;
            }
        }
        written += 1;
    }
    Ok(written)
}

/// Execute the selected subcommand, writing results to `out`.
pub fn run<W: Write>(command: &Command, settings: &Settings, out: &mut W) -> AppResult<()> {
    match command {
        Command::Extract { tags } => {
            let tags = load_tags(tags)?;
            let written = write_tags(out, &tags, settings)?;
            tracing::info!(total = tags.len(), written, "extracted addresses");
        }
        Command::Format {
            area,
            db,
            datatype,
            byte,
            bit,
        } => {
            let address = format_address(area.as_deref(), *db, *datatype, *byte, *bit);
            writeln!(out, "{address}")?;
        }
        Command::Classify { code } => {
            let area = classify_access_area(*code);
            writeln!(out, "{code:#010x}\t{}\t{area:?}", area.token())?;
        }
    }
    Ok(())
}
