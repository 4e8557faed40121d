use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use pagesort::generator::{FileGenerator, KeyDomain};

#[derive(Parser)]
#[command(name = "pagesort-gen")]
#[command(about = "Generate random binary record files for sort testing")]
struct Args {
    #[arg(short, long, help = "Output file path")]
    output: PathBuf,

    #[arg(short, long, default_value_t = 1, help = "Number of 4 KiB blocks to generate")]
    blocks: usize,

    #[arg(short, long, help = "RNG seed for a reproducible file")]
    seed: Option<u64>,

    #[arg(short, long, help = "Restrict keys and values to printable ASCII codes")]
    ascii: bool,
}

fn main() -> Result<()> {
    pagesort::logging::init()?;
    let args = Args::parse();

    let domain = if args.ascii {
        KeyDomain::Ascii
    } else {
        KeyDomain::Binary
    };

    let mut generator = FileGenerator::new(&args.output, args.blocks).with_domain(domain);
    if let Some(seed) = args.seed {
        generator = generator.with_seed(seed);
    }
    generator.generate()?;

    println!(
        "Generated {} block(s) at {}",
        args.blocks,
        args.output.display()
    );
    Ok(())
}
