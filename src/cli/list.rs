use clap::Parser;
use kubelearn::Catalog;
use tracing::instrument;

use super::terminal::{Colorize, level_badge};

#[derive(Debug, Default, Parser)]
#[command(about = "List all curriculum modules")]
pub struct List {
    /// Only show module slugs, one per line
    #[arg(long)]
    quiet: bool,
}

impl List {
    #[instrument(level = "debug", skip(self, catalog))]
    pub fn run(self, catalog: &Catalog) -> anyhow::Result<()> {
        if self.quiet {
            for module in catalog.modules() {
                println!("{}", module.slug());
            }
            return Ok(());
        }

        println!("{}\n", "Curriculum".heading());

        for module in catalog.modules() {
            println!(
                "  {}  {}  {}",
                module.slug().info(),
                level_badge(module.level()),
                module.title()
            );
            println!(
                "      {}",
                format!("{} lessons · {} min", module.lessons().len(), module.total_minutes())
                    .dim()
            );
            println!("      {}", module.description());
        }

        Ok(())
    }
}
