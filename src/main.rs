use anyhow::Context;
use clap::Parser;
use prism_pull::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).context("prism-pull failed")
}
