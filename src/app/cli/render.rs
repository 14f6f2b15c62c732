//! Terminal rendering for the presentation shell.

use crate::app::commands::generate::{GenerationOutcome, GenerationPhase};
use crate::domain::Audience;

const PROGRESS_WIDTH: usize = 20;

pub(super) fn header() -> String {
    [
        "📘 Professional HR E-Book Generator",
        "Generate comprehensive, industry-standard guides for any professional community.",
    ]
    .join("\n")
}

pub(super) fn status_panel(model: &str) -> String {
    format!(
        "System Status: ✅ API Connected ({model})\nOutput Format:\n  - HTML 5\n  - Publication Ready\n  - Mobile Responsive"
    )
}

pub(super) fn phase_status(phase: GenerationPhase, audience: &Audience) -> String {
    let label = match phase {
        GenerationPhase::Analyzing => "🧠 Analyzing Industry Trends...".to_string(),
        GenerationPhase::Drafting => {
            format!("✍️  Drafting content for '{}'... (This may take a moment)", audience)
        }
    };
    format!("{} {}", progress_bar(phase.progress()), label)
}

pub(super) fn progress_bar(percent: u8) -> String {
    let percent = usize::from(percent.min(100));
    let filled = percent * PROGRESS_WIDTH / 100;
    format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(PROGRESS_WIDTH - filled), percent)
}

/// Success banner, download details and the bounded preview.
pub(super) fn delivery(outcome: &GenerationOutcome, preview_lines: usize) -> String {
    let artifact = &outcome.artifact;
    let preview = artifact.preview(preview_lines);

    let mut out = vec![
        format!("{} ✅ E-Book Generated Successfully!", progress_bar(100)),
        "─".repeat(60),
        format!(
            "📥 Downloaded {} ({}, {} bytes) to {}",
            artifact.file_name,
            artifact.content_type,
            artifact.len(),
            outcome.saved_to.display()
        ),
        "📖 Preview E-Book Content".to_string(),
        "┌".to_string() + &"─".repeat(59),
    ];
    out.extend(preview.lines.iter().map(|line| format!("│ {}", line)));
    if preview.is_truncated() {
        out.push(format!("│ … {} more line(s) in {}", preview.hidden_lines, artifact.file_name));
    }
    out.push("└".to_string() + &"─".repeat(59));
    out.join("\n")
}

pub(super) fn footer(year: i32) -> String {
    format!("{}\nGenerated by Gemini AI • {} • HR Professional Suite", "─".repeat(60), year)
}
