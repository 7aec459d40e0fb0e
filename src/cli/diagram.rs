use clap::Parser;
use kubelearn::{Registry, Slug, StepViewer};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Print a diagram's steps", name = "diagram")]
pub struct DiagramCmd {
    /// The id of the diagram to display
    #[clap(value_parser = super::parse_slug)]
    id: Slug,

    /// Print a single step (1-based) instead of all of them
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    step: Option<u64>,
}

impl DiagramCmd {
    #[instrument(level = "debug", skip(self, diagrams))]
    pub fn run(self, diagrams: &Registry) -> anyhow::Result<()> {
        let Ok(diagram) = diagrams.get(&self.id) else {
            eprintln!("Diagram '{}' not found", self.id);
            std::process::exit(1);
        };

        println!("{}", diagram.title().heading());

        let mut viewer = StepViewer::new(diagram);
        if let Some(step) = self.step {
            // Saturates at the last step rather than failing on overshoot.
            for _ in 1..step {
                viewer.next_step();
            }
            print_step(diagram, &viewer);
            return Ok(());
        }

        loop {
            print_step(diagram, &viewer);
            if viewer.step() + 1 == viewer.total_steps() {
                break;
            }
            viewer.next_step();
        }

        Ok(())
    }
}

fn print_step(diagram: &kubelearn::Diagram, viewer: &StepViewer) {
    let step = &diagram.steps()[viewer.step()];
    println!(
        "\n{}",
        format!("Step {} of {}: {}", viewer.step() + 1, viewer.total_steps(), step.caption).dim()
    );
    for line in step.body.lines() {
        println!("  {line}");
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::DiagramCmd;

    #[test]
    fn step_zero_is_rejected() {
        assert!(DiagramCmd::try_parse_from(["diagram", "pod-lifecycle", "--step", "0"]).is_err());
    }

    #[test]
    fn positive_steps_parse() {
        let cmd = DiagramCmd::try_parse_from(["diagram", "pod-lifecycle", "--step", "2"]).unwrap();
        assert_eq!(cmd.step, Some(2));
    }
}
