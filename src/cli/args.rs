use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prism-pull")]
#[command(about = "Validate and partition coordinate files for PRISM Explorer bulk requests")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a coordinate CSV for structural problems
    Validate {
        #[arg(short, long, help = "Coordinate CSV file")]
        file: PathBuf,
    },

    /// Split an oversized coordinate CSV into submission-sized chunks
    Partition {
        #[arg(short, long, help = "Coordinate CSV file")]
        file: PathBuf,

        #[arg(long, default_value = "500", help = "Maximum rows per partition")]
        max_rows: usize,

        #[arg(long, default_value = "false", help = "Validate before partitioning")]
        validate_first: bool,
    },
}
