//! Pack an integer series into a rangepack frame.

use clap::Parser;
use rand::Rng;
use rangepack::{encode_all, EncodedContent, Strategy};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rp-pack")]
#[command(about = "Pack an integer series into a rangepack frame")]
#[command(after_help = "INPUT FORMAT:\n  \
    When using --csv, the file should contain one value per line, or index,value pairs\n  \
    - Lines starting with # are comments\n  \
    - Empty lines are skipped\n  \
    - A first line starting with a letter is treated as header and skipped\n  \
    - Values are i32\n\n\
RANGE:\n  \
    Missing --min/--max bounds are inferred from the input.\n  \
    Out-of-range values are logged to stderr; RUST_LOG=rangepack=debug logs more.")]
struct Args {
    /// Output file path
    output: PathBuf,

    /// Input CSV file (overrides random generation)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Number of values to generate
    #[arg(short, long, default_value = "288")]
    count: usize,

    /// Inclusive lower bound of the range
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i32>,

    /// Inclusive upper bound of the range
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i32>,

    /// Out-of-range strategy: ignore, saturate or error
    #[arg(long, default_value_t = Strategy::Saturate)]
    strategy: Strategy,

    /// Write the record as JSON instead of the binary frame
    #[arg(long)]
    json: bool,
}

/// Read values from a CSV file, taking the last column of each line
fn read_csv(path: &PathBuf) -> Result<Vec<i32>, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open CSV: {e}"))?;
    let reader = BufReader::new(file);
    let mut values = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if line_num == 0 && trimmed.starts_with(|c: char| c.is_ascii_alphabetic()) {
            continue;
        }

        let field = trimmed.rsplit(',').next().unwrap_or(trimmed).trim();
        let value: i32 = field
            .parse()
            .map_err(|e| format!("Line {}: invalid value '{}': {}", line_num + 1, field, e))?;

        values.push(value);
    }

    Ok(values)
}

/// Generate a bounded random walk, like a slowly drifting percentage
fn generate_values(count: usize) -> Vec<i32> {
    let mut rng = rand::rng();
    let mut current: i32 = rng.random_range(20..=80);
    let mut values = Vec::with_capacity(count);

    for _ in 0..count {
        current = (current + rng.random_range(-3..=3)).clamp(0, 100);
        values.push(current);
    }

    values
}

fn write_content(args: &Args, content: &EncodedContent) -> Result<usize, String> {
    let bytes = if args.json {
        serde_json::to_vec(content).map_err(|e| format!("Failed to serialize: {e}"))?
    } else {
        content.to_bytes()
    };

    let mut file = File::create(&args.output).map_err(|e| format!("Failed to create output file: {e}"))?;
    file.write_all(&bytes).map_err(|e| format!("Failed to write data: {e}"))?;
    Ok(bytes.len())
}

fn run(args: &Args) -> Result<(), String> {
    let (values, from_csv) = match &args.csv {
        Some(path) => {
            let values = read_csv(path)?;
            println!("Reading {} entries from CSV...", values.len());
            (values, true)
        }
        None => (generate_values(args.count), false),
    };

    let content = encode_all(&values, args.min, args.max, args.strategy).map_err(|e| e.to_string())?;
    let count = content.value_count().map_err(|e| e.to_string())?;
    let size = write_content(args, &content)?;

    if from_csv {
        println!("Encoded {count} values from CSV");
    } else {
        println!("Generated {count} values");
    }
    if count < values.len() {
        println!("Dropped {} out-of-range values", values.len() - count);
    }
    println!(
        "Representable: [{}, {}], {} bits per value, {} padding bits",
        -content.shift,
        -content.shift + (1i64 << content.bits_per_value) - 1,
        content.bits_per_value,
        content.n_padding_bits
    );
    println!("Output: {} ({} bytes)", args.output.display(), size);
    if size > 0 {
        println!("Compression: {:.1}x", (count * 4) as f64 / size as f64);
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
