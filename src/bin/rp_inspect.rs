//! Inspect a rangepack frame and decode its values.

use clap::Parser;
use rangepack::{Decoder, EncodedContent};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rp-inspect")]
#[command(about = "Inspect a rangepack frame and decode its values")]
struct Args {
    /// Input file written by rp_pack
    input: PathBuf,

    /// Input is a JSON record instead of a binary frame
    #[arg(long)]
    json: bool,

    /// Print every decoded value, one per line
    #[arg(long)]
    values: bool,
}

fn load(args: &Args) -> Result<EncodedContent, String> {
    let bytes = std::fs::read(&args.input).map_err(|e| format!("Failed to read input: {e}"))?;
    if args.json {
        let content: EncodedContent =
            serde_json::from_slice(&bytes).map_err(|e| format!("Failed to parse JSON: {e}"))?;
        content.usable_bits().map_err(|e| e.to_string())?;
        Ok(content)
    } else {
        EncodedContent::from_bytes(&bytes).map_err(|e| e.to_string())
    }
}

fn run(args: &Args) -> Result<(), String> {
    let content = load(args)?;
    let count = content.value_count().map_err(|e| e.to_string())?;

    println!("=== {} ===", args.input.display());
    println!("Bits per value: {}", content.bits_per_value);
    println!("Shift:          {}", content.shift);
    println!("Padding bits:   {}", content.n_padding_bits);
    println!("Packed bytes:   {}", content.encoded.len());
    println!("Values:         {count}");

    let mut decoder = Decoder::<i32>::new(&content).map_err(|e| e.to_string())?;
    let (mut lo, mut hi) = (i32::MAX, i32::MIN);
    for idx in 0..count {
        let value = decoder
            .decode_next()
            .map_err(|e| format!("Value {idx}: {e}"))?;
        lo = lo.min(value);
        hi = hi.max(value);
        if args.values {
            println!("{value}");
        }
    }
    if count > 0 {
        println!("Observed range: [{lo}, {hi}]");
    }
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rangepack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
