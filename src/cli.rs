use clap::ArgAction;
use kubelearn::content;

mod diagram;
mod export;
mod lesson;
mod list;
mod show;
mod terminal;

use diagram::DiagramCmd;
use export::Export;
use lesson::LessonCmd;
use list::List;
use show::Show;

/// Parse a slug from a string, normalizing to lowercase.
///
/// This is a CLI boundary function that accepts mixed-case input and
/// normalizes it before parsing.
fn parse_slug(s: &str) -> Result<kubelearn::Slug, String> {
    let lowercase = s.to_lowercase();
    lowercase.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.unwrap_or_else(|| Command::List(List::default())).run()
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List all curriculum modules (default)
    List(List),

    /// Show a module's objectives, lessons, and resources
    Show(Show),

    /// Read a lesson
    Lesson(LessonCmd),

    /// Print a diagram's steps
    Diagram(DiagramCmd),

    /// Export a module as JSON
    Export(Export),
}

impl Command {
    fn run(self) -> anyhow::Result<()> {
        let catalog = content::catalog();

        match self {
            Self::List(command) => command.run(&catalog),
            Self::Show(command) => command.run(&catalog),
            Self::Lesson(command) => command.run(&catalog, &content::diagrams()),
            Self::Diagram(command) => command.run(&content::diagrams()),
            Self::Export(command) => command.run(&catalog),
        }
    }
}
