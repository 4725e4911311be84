use seqkit_rs::{decode, decoded_len, encode, RunEntry};
use std::env;
use std::fs;

/// Run-length encodes a file byte by byte and verifies the roundtrip.
///
/// Usage: cargo run --example rle <filename>
fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <filename>", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];
    let bytes = fs::read(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", filename);
        std::process::exit(1);
    });

    let encoded = encode(&bytes);
    log::info!("encoded {} bytes into {} entries", bytes.len(), encoded.len());

    // Verify by decoding
    if decode(&encoded) != bytes {
        eprintln!("Roundtrip mismatch for \"{}\"", filename);
        std::process::exit(1);
    }

    let runs = encoded
        .iter()
        .filter(|e| matches!(e, RunEntry::Run(..)))
        .count();
    let longest = encoded.iter().map(RunEntry::count).max().unwrap_or(0);

    println!("\n=== Statistics ===");
    println!("Input bytes: {}", bytes.len());
    println!("Decoded length: {}", decoded_len(&encoded));
    println!("Entries: {}", encoded.len());
    println!("Runs (count >= 2): {}", runs);
    println!("Longest run: {}", longest);
    if !bytes.is_empty() {
        println!(
            "Entries per byte: {:.2}%",
            encoded.len() as f64 / bytes.len() as f64 * 100.0
        );
    }
}
