//! Card display for the responsiveness matrix.
//!
//! Renders rows grouped by EIR category under a header and summary bar,
//! with per-group status counts and one numbered line per clause.

use std::fmt::{self, Write};

use arrow::util::pretty::pretty_format_batches;
use eirmatrix_core::{
    AnalysisEnvelope, CategoryGroup, CoverageStatus, FormData, MatrixRow, MatrixSummary,
    StatusCounts, responsiveness,
};
use eirmatrix_engine::{group_by_category, summarise_matrix};

const MAX_REQUIREMENT_CHARS: usize = 72;

/// Context printed above the matrix.
pub struct MatrixHeader {
    pub project_name: Option<String>,
    pub document_id: Option<String>,
    /// e.g. `16 Oct 2026`
    pub generated: String,
}

impl MatrixHeader {
    /// Project name comes from the EIR first, then the BEP's own `projectName`.
    pub fn new(envelope: Option<&AnalysisEnvelope>, form: Option<&FormData>) -> Self {
        let project_name = envelope
            .and_then(AnalysisEnvelope::project_name)
            .or_else(|| form.and_then(FormData::project_name))
            .map(str::to_owned);

        Self {
            project_name,
            document_id: envelope.and_then(|e| e.document_id.clone()),
            generated: chrono::Local::now().format("%-d %b %Y").to_string(),
        }
    }
}

// ── Public API ──

/// Render the matrix as grouped cards, optionally keeping only one status.
///
/// The summary bar always covers every row.
pub fn render_matrix(
    header: &MatrixHeader,
    rows: &[MatrixRow],
    only: Option<CoverageStatus>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_header(&mut out, header)?;

    if rows.is_empty() {
        writeln!(out, "No EIR clauses found")?;
        writeln!(out, "Upload and analyse an EIR document in the BEP wizard first.")?;
        return Ok(out);
    }

    let summary = summarise_matrix(rows);
    writeln!(out, "{}", summary_bar(&summary))?;
    writeln!(out)?;

    let shown: Vec<MatrixRow> = rows
        .iter()
        .filter(|r| only.is_none_or(|status| r.status == status))
        .cloned()
        .collect();
    if shown.is_empty() {
        if let Some(status) = only {
            writeln!(out, "No clauses with status {}", status.label())?;
        }
        return Ok(out);
    }

    for group in group_by_category(&shown) {
        write_group(&mut out, &group)?;
    }
    Ok(out)
}

/// Render every row as an Arrow pretty-printed table.
pub fn render_table(rows: &[MatrixRow]) -> Result<String, arrow::error::ArrowError> {
    let batch = responsiveness::rows_to_batch(rows)?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}

/// One-line summary for terminals and scripts.
pub fn render_summary_line(summary: &MatrixSummary) -> String {
    format!(
        "{} clauses: {} addressed, {} partial, {} not addressed ({}% addressed)",
        summary.total,
        summary.addressed,
        summary.partial,
        summary.not_addressed,
        summary.percent_addressed
    )
}

// ── Sections ──

fn write_header(out: &mut String, header: &MatrixHeader) -> fmt::Result {
    writeln!(out, "=== EIR Responsiveness Matrix ===")?;
    match &header.project_name {
        Some(name) => writeln!(out, "{name} · Generated {}", header.generated)?,
        None => writeln!(out, "Generated {}", header.generated)?,
    }
    if let Some(id) = &header.document_id {
        writeln!(out, "Document: {id}")?;
    }
    writeln!(out)
}

fn summary_bar(summary: &MatrixSummary) -> String {
    format!(
        "  {} addressed | {} partial | {} not addressed    {}%",
        summary.addressed, summary.partial, summary.not_addressed, summary.percent_addressed
    )
}

fn write_group(out: &mut String, group: &CategoryGroup) -> fmt::Result {
    let n = group.rows.len();
    writeln!(
        out,
        "{}  {}  ({} {})  {}",
        group.eir_category,
        group.bep_section_ref,
        n,
        if n == 1 { "clause" } else { "clauses" },
        status_chips(&group.counts)
    )?;
    for (i, row) in group.rows.iter().enumerate() {
        writeln!(
            out,
            "  {:>3}  {:<width$}  {}",
            i + 1,
            truncate(&row.requirement, MAX_REQUIREMENT_CHARS),
            row.status.label(),
            width = MAX_REQUIREMENT_CHARS
        )?;
    }
    writeln!(out)
}

/// `Addressed 2, Partial 1`; statuses with no rows are left out.
fn status_chips(counts: &StatusCounts) -> String {
    CoverageStatus::ALL
        .iter()
        .filter(|s| counts.get(**s) > 0)
        .map(|s| format!("{} {}", s.label(), counts.get(*s)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}
