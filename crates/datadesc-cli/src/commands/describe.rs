//! Describe command - load a data file and write its names file.

use std::path::PathBuf;

use colored::Colorize;
use datadesc::Describer;
use tracing::info;

pub fn run(
    input: PathBuf,
    output_dir: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(input = %input.display(), "making dataset description");

    println!(
        "{} {}",
        "Describing".cyan().bold(),
        input.display().to_string().white()
    );

    let describer = Describer::open(&input)?;

    if verbose {
        println!();
        println!("{}", "Columns:".yellow().bold());
        for profile in describer.profiles() {
            println!(
                "  {:20} {:10} {} distinct, {} missing",
                profile.name,
                profile.kind.to_string(),
                profile.distinct_count(),
                profile.missing_count
            );
        }
        println!();
    }

    println!(
        "{} instances, {} attributes, {} missing values",
        describer.instance_count().to_string().white().bold(),
        describer.attribute_count().to_string().white().bold(),
        describer.missing_count().to_string().yellow()
    );

    let written = describer.write_to(&output_dir)?;

    println!(
        "{} {}",
        "Saved to".green().bold(),
        written.display().to_string().white()
    );

    Ok(())
}
