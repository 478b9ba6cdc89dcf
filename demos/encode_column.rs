//! Encode a categorical CSV column and decode it back.
//!
//! Usage: cargo run --example encode_column -- [path] [column]
//! Defaults to the bundled demos/data/animals.csv, column 0.

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use feature_encoders::{Encoder, EncoderBuilder, EncoderConfig, LabelEncoderBuilder};

fn read_label_column(path: &str, column: usize) -> Result<Vec<Option<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path))?;

    let mut values = Vec::new();
    for result in reader.records() {
        let record = result?;
        let field = record
            .get(column)
            .with_context(|| format!("missing column {} in {}", column, path))?;
        // Empty cells are missing values.
        if field.is_empty() {
            values.push(None);
        } else {
            values.push(Some(field.to_string()));
        }
    }
    Ok(values)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| "demos/data/animals.csv".to_string());
    let column: usize = args.next().map(|c| c.parse()).transpose()?.unwrap_or(0);

    let values = read_label_column(&path, column)?;
    println!("read {} rows from {}", values.len(), path);

    let encoder = LabelEncoderBuilder::new(EncoderConfig::default()).prepare(&values)?;
    println!("learned {} distinct labels", encoder.n_labels());

    let encoded = encoder.encode(&values);
    let decoded = encoder.decode(&encoded);

    for ((value, code), back) in values.iter().zip(encoded.iter()).zip(decoded.iter()).take(10) {
        println!("{:>12?} -> {:.4} -> {:?}", value, code, back);
    }

    let misses = values
        .iter()
        .zip(decoded.iter())
        .filter(|(v, d)| v.is_some() && *v != *d)
        .count();
    println!("non-null rows failing the round trip: {}", misses);

    Ok(())
}
