use repair_rs::{compress, decompress};
use std::env;
use std::fs::File;
use std::io::{BufReader, Read};

/// Compresses a file with Re-Pair and verifies the result decompresses back
/// to the original bytes.
///
/// Usage: cargo run --example main <filename>
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <filename>", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];

    let mut file = File::open(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", filename);
        std::process::exit(1);
    });

    let mut bytes = Vec::new();
    let mut reader = BufReader::new(&mut file);
    reader.read_to_end(&mut bytes).expect("error reading file");

    let input_len = bytes.len();
    let (compressed, rules) = compress(bytes.clone());

    let restored = decompress(&compressed, &rules).expect("decompress failed on our own output");
    if restored != bytes {
        eprintln!("Mismatch: decompressed output does not match the original file");
        std::process::exit(1);
    }

    let ratio = if input_len == 0 {
        0.0
    } else {
        100.0 * (1.0 - compressed.len() as f64 / input_len as f64)
    };

    println!("\n=== Statistics ===");
    println!("Input bytes: {}", input_len);
    println!("Compressed symbols: {}", compressed.len());
    println!("Rules created: {}", rules.len());
    println!("Compression ratio: {:.2}%", ratio);
}
