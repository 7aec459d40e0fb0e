use std::sync::LazyLock;

use clap::Parser;
use kubelearn::{Catalog, ContentBlock, Registry, Slug, StepViewer};
use regex::Regex;
use tracing::instrument;

use super::terminal::{Colorize, terminal_width};

#[derive(Debug, Parser)]
#[command(about = "Read a lesson", name = "lesson")]
pub struct LessonCmd {
    /// The slug of the module containing the lesson
    #[clap(value_parser = super::parse_slug)]
    module: Slug,

    /// The slug of the lesson
    #[clap(value_parser = super::parse_slug)]
    lesson: Slug,
}

impl LessonCmd {
    #[instrument(level = "debug", skip(self, catalog, diagrams))]
    pub fn run(self, catalog: &Catalog, diagrams: &Registry) -> anyhow::Result<()> {
        let Ok(lesson) = catalog.lesson(&self.module, &self.lesson) else {
            eprintln!("Lesson '{}/{}' not found", self.module, self.lesson);
            std::process::exit(1);
        };

        println!("{}", lesson.title().heading());
        println!("{}\n", format!("{} min read", lesson.duration()).dim());

        for block in lesson.content() {
            match block {
                ContentBlock::Text { markup } => {
                    println!("{}\n", wrap(&markup_to_text(markup)));
                }
                ContentBlock::Code { listing } => {
                    for line in listing.lines() {
                        println!("    {line}");
                    }
                    println!();
                }
                ContentBlock::Diagram { id } => match diagrams.get(id) {
                    Ok(diagram) => print_diagram_steps(diagram),
                    Err(_) => println!("{}\n", format!("[diagram '{id}' not found]").dim()),
                },
            }
        }

        if !lesson.resources().is_empty() {
            println!("{}", "Resources".heading());
            for resource in lesson.resources() {
                println!("  • {} - {}", resource.title.info(), resource.url);
            }
            println!();
        }

        // Lesson lookup above already succeeded, so adjacency cannot miss.
        let neighbours = catalog.adjacent_lessons(&self.module, &self.lesson)?;
        if let Some(previous) = neighbours.previous {
            println!("{}", format!("← previous: {}", previous.slug()).dim());
        }
        if let Some(next) = neighbours.next {
            println!("{}", format!("→ next: {}", next.slug()).dim());
        }

        Ok(())
    }
}

/// Prints every step of a diagram, driving a [`StepViewer`] through its
/// bounded forward transitions.
fn print_diagram_steps(diagram: &kubelearn::Diagram) {
    println!("{}", format!("[{}]", diagram.title()).emphasis());

    let mut viewer = StepViewer::new(diagram);
    loop {
        let step = &diagram.steps()[viewer.step()];
        println!(
            "{}",
            format!("  Step {} of {}: {}", viewer.step() + 1, viewer.total_steps(), step.caption)
                .dim()
        );
        for line in step.body.lines() {
            println!("    {line}");
        }

        if viewer.step() + 1 == viewer.total_steps() {
            break;
        }
        viewer.next_step();
    }
    println!();
}

/// Reduces lesson markup to plain text for the terminal.
///
/// Block-level closing tags become paragraph breaks, list items become
/// bullets, remaining tags are stripped, and common entities are unescaped.
fn markup_to_text(markup: &str) -> String {
    static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new("<[^>]+>").expect("static regex"));

    let text = markup
        .replace("</p>", "\n\n")
        .replace("</h2>", "\n\n")
        .replace("</h3>", "\n\n")
        .replace("</ul>", "\n")
        .replace("</li>", "\n")
        .replace("<li>", "  • ");

    let text = TAG.replace_all(&text, "");

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .trim_end()
        .to_string()
}

/// Wraps paragraphs to the terminal width (80 columns when undetectable).
fn wrap(text: &str) -> String {
    let width = terminal_width().map_or(80, usize::from).max(20);

    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let indent = line.len() - line.trim_start().len();
        let mut column = 0;
        for word in line.split_whitespace() {
            if column > 0 && column + word.len() + 1 > width {
                out.push('\n');
                out.push_str(&" ".repeat(indent));
                column = indent;
            } else if column > 0 {
                out.push(' ');
                column += 1;
            } else {
                out.push_str(&line[..indent]);
                column = indent;
            }
            out.push_str(word);
            column += word.len();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{markup_to_text, wrap};

    #[test]
    fn markup_is_reduced_to_plain_text() {
        let text = markup_to_text("<h2>Title</h2><p>Body with <strong>bold</strong>.</p>");
        assert_eq!(text, "Title\n\nBody with bold.");
    }

    #[test]
    fn list_items_become_bullets() {
        let text = markup_to_text("<ul><li>one</li><li>two</li></ul>");
        assert_eq!(text, "  • one\n  • two");
    }

    #[test]
    fn entities_are_unescaped() {
        assert_eq!(markup_to_text("<p>a &lt;b&gt; &amp; c</p>"), "a <b> & c");
    }

    #[test]
    fn short_lines_are_not_wrapped() {
        assert_eq!(wrap("short line"), "short line");
    }
}
