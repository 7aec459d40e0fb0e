use clap::Parser;
use kubelearn::{Catalog, Slug};
use tracing::instrument;

use super::terminal::{Colorize, level_badge};

#[derive(Debug, Parser)]
#[command(about = "Show a module's objectives, lessons, and resources")]
pub struct Show {
    /// The slug of the module to display
    #[clap(value_parser = super::parse_slug)]
    module: Slug,
}

impl Show {
    #[instrument(level = "debug", skip(self, catalog))]
    pub fn run(self, catalog: &Catalog) -> anyhow::Result<()> {
        let Ok(module) = catalog.module(&self.module) else {
            eprintln!("Module '{}' not found", self.module);
            std::process::exit(1);
        };

        println!("{}", module.title().heading());
        println!("{}\n", module.description());
        println!(
            "{} · {}",
            level_badge(module.level()),
            format!("{} lessons · {} min total", module.lessons().len(), module.total_minutes())
                .dim()
        );

        if !module.objectives().is_empty() {
            println!("\n{}", "Learning objectives".heading());
            for objective in module.objectives() {
                println!("  • {objective}");
            }
        }

        println!("\n{}", "Lessons".heading());
        for (i, lesson) in module.lessons().iter().enumerate() {
            println!(
                "  {}. {}  {}",
                i + 1,
                lesson.title(),
                format!("({}, {} min)", lesson.slug(), lesson.duration()).dim()
            );
        }

        if !module.resources().is_empty() {
            println!("\n{}", "Resources".heading());
            for resource in module.resources() {
                println!("  • {} - {}", resource.title.info(), resource.url);
            }
        }

        Ok(())
    }
}
