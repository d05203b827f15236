use crate::analyzer::ProgressSink;
use crate::models::AnalysisProgress;
use std::io::{self, Write};

const BAR_WIDTH: usize = 30;
const LINE_WIDTH: usize = BAR_WIDTH + 36;

/// Draws the upload progress bar on stderr, redrawing in place.
pub struct TerminalProgress {
    use_colors: bool,
}

impl TerminalProgress {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn render_line(&self, progress: AnalysisProgress) -> String {
        let filled = progress.value() as usize * BAR_WIDTH / 100;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        let label = if progress.is_complete() {
            "Analysis complete".to_string()
        } else {
            format!("Uploading and processing... {}", progress)
        };

        if self.use_colors {
            format!("\x1b[34m{}\x1b[0m {}", bar, label)
        } else {
            format!("{} {}", bar, label)
        }
    }

    /// The text written for one update. Plain mode carries no escape
    /// sequences and pads the line to overwrite a longer previous one.
    fn frame(&self, progress: AnalysisProgress) -> String {
        if self.use_colors {
            format!("\r\x1b[2K{}", self.render_line(progress))
        } else {
            format!("\r{:<width$}", self.render_line(progress), width = LINE_WIDTH)
        }
    }
}

impl ProgressSink for TerminalProgress {
    fn on_progress(&self, progress: AnalysisProgress) {
        let mut stderr = io::stderr().lock();
        // Write errors are ignored.
        let _ = if progress.is_idle() {
            writeln!(stderr)
        } else {
            write!(stderr, "{}", self.frame(progress))
        };
        let _ = stderr.flush();
    }
}
