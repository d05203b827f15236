use crate::cli::args::Cli;
use crate::models::{ModelId, ModelToggleSet, PendingFile, ResultSet};
use crate::output::{render, ResultCard};

pub struct ReportFormatter {
    use_colors: bool,
    verbose: bool,
}

impl ReportFormatter {
    pub fn new(cli: &Cli) -> Self {
        Self {
            use_colors: cli.should_use_color(),
            verbose: cli.is_verbose(),
        }
    }

    pub fn plain() -> Self {
        Self {
            use_colors: false,
            verbose: false,
        }
    }

    pub fn format_selected_files(&self, files: &[PendingFile]) -> String {
        if files.is_empty() {
            return "No files selected.".to_string();
        }

        let list = files
            .iter()
            .map(|f| format!("  • {}", f.display_label()))
            .collect::<Vec<_>>()
            .join("\n");

        self.format_section("Selected files", &list)
    }

    pub fn format_model_selection(&self, toggles: &ModelToggleSet) -> String {
        let list = toggles
            .iter()
            .map(|(id, enabled)| {
                let mark = if enabled { "[x]" } else { "[ ]" };
                if self.verbose {
                    format!("  {} {} - {}", mark, id.title(), id.description())
                } else {
                    format!("  {} {}", mark, id.title())
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        self.format_section("Model selection", &list)
    }

    pub fn format_model_catalog(&self) -> String {
        let list = ModelId::ALL
            .iter()
            .map(|id| format!("  {:<12} {}\n  {:<12} {}", id.as_str(), id.title(), "", id.description()))
            .collect::<Vec<_>>()
            .join("\n");

        self.format_section("Available models", &list)
    }

    /// Renders every known model, with placeholders where no result exists.
    pub fn format_results(&self, results: Option<&ResultSet>) -> String {
        let cards = render(results)
            .iter()
            .map(|card| self.format_card(card))
            .collect::<Vec<_>>()
            .join("\n\n");

        let mut output = self.format_section("Results", &cards);
        output.push_str("\n\n");
        output.push_str(&self.dim(
            "Results are for research support and not a substitute for professional diagnosis. \
             Always consult a specialist.",
        ));
        output
    }

    fn format_card(&self, card: &ResultCard) -> String {
        let mut out = String::new();

        out.push_str(&self.bold(card.title));
        out.push('\n');
        out.push_str(&format!(
            "  Prediction: {}   Confidence: {}   Time: {}\n",
            self.highlight(&card.prediction, card.has_result()),
            card.confidence,
            card.time
        ));

        match card.heatmap_url {
            Some(ref url) => out.push_str(&format!("  Heatmap: {}", url)),
            None => out.push_str(&self.dim("  Heatmap preview unavailable")),
        }

        if !card.features.is_empty() {
            out.push_str("\n  Key features:");
            for feature in &card.features {
                out.push_str(&format!("\n    - {}", feature));
            }
        }

        out
    }

    fn format_section(&self, title: &str, content: &str) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[37m{}\x1b[0m\n{}", title, content)
        } else {
            format!("{}\n{}\n{}", title, "─".repeat(title.chars().count()), content)
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[36m{}\x1b[0m", text)
        } else {
            text.to_string()
        }
    }

    fn highlight(&self, text: &str, present: bool) -> String {
        if self.use_colors && present {
            format!("\x1b[1m\x1b[32m{}\x1b[0m", text)
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            format!("\x1b[2m{}\x1b[0m", text)
        } else {
            text.to_string()
        }
    }
}
