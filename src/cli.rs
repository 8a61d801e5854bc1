use crate::config::{Delimiter, SplitConfig};
use crate::error::SplitError;
use crate::splitter::{SplitOutcome, Splitter};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = "Zip a delimited file and split it into parts when the archive exceeds a size limit")]
struct Cli {
    /// Delimited file to zip and split
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Maximum archive size in MB; larger archives are split into parts
    #[arg(value_name = "MAX_SIZE")]
    max_size: f64,

    /// Field delimiter of the file (a single character, or \t for tab)
    #[arg(short, long, visible_alias = "csv-delimiter", default_value = ";")]
    delimiter: Delimiter,

    /// Do not show the progress bar while writing parts
    #[arg(long)]
    no_progress: bool,

    /// Re-read every written archive and check its records
    #[arg(long)]
    verify: bool,
}

pub fn run() -> Result<(), SplitError> {
    let cli = Cli::parse();

    let config = SplitConfig::new(cli.file, cli.max_size)
        .with_delimiter(cli.delimiter)
        .with_progress(!cli.no_progress)
        .with_verify(cli.verify);
    config.validate()?;

    println!("Zipping {} (delimiter '{}')...", config.source.display(), config.delimiter);

    let start = Instant::now();
    let outcome = Splitter::new(config).run()?;
    let duration = start.elapsed();

    report(&outcome);
    println!("  Elapsed Time:     {:.2?}", duration);
    Ok(())
}

fn report(outcome: &SplitOutcome) {
    match outcome {
        SplitOutcome::WithinLimit { archive, size_mb, max_size_mb, record_count } => {
            println!(
                "Zipped size of file is {:.2} MB, which is not greater than the max file size of {} MB. No need to split.",
                size_mb, max_size_mb
            );
            println!("  Archive:          {}", archive.display());
            println!("  Records:          {}", record_count);
        }
        SplitOutcome::Split { archive, size_mb, max_size_mb, plan, parts } => {
            println!(
                "Zipped size of file is {:.2} MB, which is greater than the max file size of {} MB. Split the file.",
                size_mb, max_size_mb
            );
            println!("  Archive:          {}", archive.display());
            println!("  Records:          {}", plan.record_count);
            println!("  Records per part: {}", plan.records_per_part);
            for part in parts {
                println!(
                    "  Part {:>3}:         {} + {} ({} records, {:.2} MB zipped)",
                    part.index,
                    part.csv_path.display(),
                    part.archive_path.display(),
                    part.records.len(),
                    part.archive_size_mb
                );
            }
            println!("The file has been split into {} parts.", parts.len());
        }
    }
}
