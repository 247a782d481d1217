//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command. File I/O lives here,
//! at the application boundary; the library itself only ever sees bytes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::wave;

/// Parse and print the WAVE header of a file.
pub fn info(path: &Path, json: bool) -> Result<()> {
    info!("Reading WAVE header from: {}", path.display());

    let bytes = read_file(path)?;
    let header = wave::parse_header(&bytes)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&header)?);
        return Ok(());
    }

    println!("File:            {}", path.display());
    println!(
        "Format:          {:?} (code {})",
        header.format_type,
        header.format_type.code()
    );
    println!("Channels:        {}", header.channels);
    println!("Sample rate:     {} Hz", header.sample_rate);
    println!("Bits per sample: {}", header.bits_per_sample);
    println!("Byte rate:       {} B/s", header.bytes_per_second);
    println!("Block align:     {}", header.block_align);
    println!("Payload size:    {} bytes", header.data_size);
    println!("Duration:        {:.3} s", header.duration());

    Ok(())
}

/// Decode a file's sample payload and report basic statistics.
pub fn decode(path: &Path) -> Result<()> {
    info!("Decoding WAVE file: {}", path.display());

    let bytes = read_file(path)?;
    let decoded = wave::decode(&bytes)?;

    let peak = decoded
        .samples
        .iter()
        .fold(0.0f32, |peak, &sample| peak.max(sample.abs()));

    println!("File:      {}", path.display());
    println!("Samples:   {}", decoded.samples.len());
    println!("Channels:  {}", decoded.header.channels);
    println!("Duration:  {:.3} s", decoded.duration());
    println!("Peak:      {:.4}", peak);

    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
