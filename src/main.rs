//! Terminal browser for the Kubernetes curriculum catalog.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
