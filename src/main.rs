//! CLI for map translation

use std::{
    fs,
    io::{self, BufWriter, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use map_translator::{emit, GameMap};

/// Translate a text map into Jack statements filling the map array `m`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File, where to read the map. Use `-` for stdin.
    file: PathBuf,
}

/// Read map from file, print statements
fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let text = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Reading {}", args.file.display()))?
    };
    let map = GameMap::parse(&text)?;

    let mut out = BufWriter::new(io::stdout().lock());
    emit(&map, &mut out).context("Writing statements")?;
    Ok(())
}
