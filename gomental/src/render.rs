//! Template rendering for CLI output using outstanding

use anyhow::anyhow;
use console::Style;
use gomentallib::{FactSet, FactTable};
use outstanding::{render_with_output, Theme};
use serde::Serialize;

/// Include template at compile time
const FACT_TABLE_TEMPLATE: &str = include_str!("../templates/fact_table.jinja");

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// Output formats accepted by `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Self {
        match name {
            "tsv" => OutputFormat::Tsv,
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }

    /// Rendering mode for this format. TSV is plain text so it stays
    /// free of terminal styling even on a tty.
    pub fn output_mode(self) -> OutputMode {
        match self {
            OutputFormat::Table => OutputMode::Auto,
            OutputFormat::Tsv => OutputMode::Text,
            OutputFormat::Json => OutputMode::Json,
        }
    }
}

/// Data context for the fact table template
#[derive(Debug, Serialize)]
struct FactTableContext {
    /// Pre-formatted header line
    header: String,
    /// Pre-formatted data lines
    rows: Vec<String>,
}

impl FactTableContext {
    fn from_lines(mut lines: Vec<String>) -> Self {
        let header = if lines.is_empty() {
            String::new()
        } else {
            lines.remove(0)
        };
        FactTableContext {
            header,
            rows: lines,
        }
    }
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new().add("header", Style::new().bold())
}

/// Render a fact set in the requested format.
///
/// Text output always ends with exactly one blank line.
pub fn render_facts(set: &FactSet, format: OutputFormat) -> anyhow::Result<String> {
    let output_mode = format.output_mode();
    if output_mode.is_structured() {
        let mut json = serde_json::to_string_pretty(set)?;
        json.push('\n');
        return Ok(json);
    }

    let table = FactTable::from_fact_set(set);
    let lines = match format {
        OutputFormat::Tsv => table.tsv_lines(),
        _ => table.lines(),
    };
    let context = FactTableContext::from_lines(lines);

    let rendered = render_with_output(FACT_TABLE_TEMPLATE, &context, &create_theme(), output_mode)
        .map_err(|e| anyhow!("failed to render report: {e}"))?;

    let mut out = rendered.trim_end_matches('\n').to_string();
    out.push_str("\n\n");
    Ok(out)
}
