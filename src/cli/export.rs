use clap::Parser;
use kubelearn::{Catalog, Slug};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Export a module as JSON")]
pub struct Export {
    /// The slug of the module to export; exports the whole catalog if omitted
    #[clap(value_parser = super::parse_slug)]
    module: Option<Slug>,

    /// Compact output instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

impl Export {
    #[instrument(level = "debug", skip(self, catalog))]
    pub fn run(self, catalog: &Catalog) -> anyhow::Result<()> {
        let json = match &self.module {
            Some(slug) => {
                let Ok(module) = catalog.module(slug) else {
                    eprintln!("Module '{slug}' not found");
                    std::process::exit(1);
                };
                self.serialize(module)?
            }
            None => self.serialize(catalog.modules())?,
        };

        println!("{json}");
        Ok(())
    }

    fn serialize<T: serde::Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        if self.compact {
            serde_json::to_string(value)
        } else {
            serde_json::to_string_pretty(value)
        }
    }
}
