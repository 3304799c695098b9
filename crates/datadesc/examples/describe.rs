//! Example: print the names file for a tabular data file.
//!
//! Usage:
//!   cargo run --example describe -- <file_path>
//!
//! Example:
//!   cargo run --example describe -- test_data/golden/cars/cars.csv

use std::env;
use std::path::Path;

use datadesc::Describer;

fn main() -> datadesc::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example describe -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example describe -- test_data/golden/cars/cars.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let describer = Describer::open(path)?;

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Dataset: {}", describer.dataset_name());
    println!("{}", separator);
    println!();

    for profile in describer.profiles() {
        println!(
            "  {:20} {:10} {:>6} distinct {:>6} missing",
            profile.name,
            profile.kind.to_string(),
            profile.distinct_count(),
            profile.missing_count
        );
    }

    println!();
    println!("{}", describer.render());

    Ok(())
}
