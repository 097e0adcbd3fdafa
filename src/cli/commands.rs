use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{CsvValidator, Partitioner};
use crate::utils::progress::ProgressReporter;
use tracing::Level;

pub fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Validate { file } => {
            let progress = ProgressReporter::new_spinner("Validating coordinate file...", false);
            let report = CsvValidator::new().validate(&file)?;
            progress.finish_with_message(&format!(
                "{}: {} rows, valid",
                file.display(),
                report.row_count
            ));

            if report.needs_partition {
                println!(
                    "File exceeds the 500-row bulk limit; run `prism-pull partition` before submitting"
                );
            } else {
                println!("File is within the bulk row limit");
            }
        }

        Commands::Partition {
            file,
            max_rows,
            validate_first,
        } => {
            if validate_first {
                let report = CsvValidator::new().validate(&file)?;
                println!("Validated {} rows", report.row_count);
            }

            let progress = ProgressReporter::new_spinner("Partitioning coordinate file...", false);
            let paths = Partitioner::with_max_rows(max_rows).partition(&file)?;
            progress.finish_with_message(&format!("Wrote {} partition(s)", paths.len()));

            for path in &paths {
                println!("  {}", path.display());
            }
        }
    }

    Ok(())
}
