//! CLI for map generation

use clap::Parser;
use itertools::Itertools;
use map_translator::map_generator::MapGenerator;

/// Random map generator for the map translator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate map, print it
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut gen = MapGenerator::new(args.seed);
    let res: Vec<Vec<char>> = gen.generate_map();
    println!("{}", res.iter().map(|row| row.iter().join("")).join("\n"));
    Ok(())
}
