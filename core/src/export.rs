//! Print-ready HTML export of a rendered report.
//!
//! The document is laid out for A4 portrait with half-inch margins via CSS
//! `@page`, so "print to PDF" from any browser produces the paginated
//! report. The file name is derived from the selected department.

use std::path::Path;
use std::path::PathBuf;

use askama::Template;
use thiserror::Error;

use crate::report::ReportDocument;

/// File-name stem used when no department was entered.
const FALLBACK_STEM: &str = "Analysis";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render report template: {0}")]
    Template(#[from] askama::Error),
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportHtml<'a> {
    doc: &'a ReportDocument,
    generated_on: String,
    human_label: &'static str,
    ai_label: &'static str,
    human_pct: u32,
    ai_pct: u32,
}

impl<'a> ReportHtml<'a> {
    fn new(doc: &'a ReportDocument) -> Self {
        let max = doc.comparison.values.iter().copied().max().unwrap_or(0);
        let pct = |v: u64| {
            if max == 0 {
                0
            } else {
                ((v as f64 / max as f64) * 100.0).round() as u32
            }
        };
        Self {
            doc,
            generated_on: chrono::Local::now().format("%B %-d, %Y").to_string(),
            human_label: doc.comparison.labels[0],
            ai_label: doc.comparison.labels[1],
            human_pct: pct(doc.comparison.values[0]),
            ai_pct: pct(doc.comparison.values[1]),
        }
    }
}

/// Export file name as a pure function of the department.
pub fn export_file_name(department: &str) -> String {
    let stem = department.trim();
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };
    let sanitized: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("AI_ROI_Report_{sanitized}.html")
}

/// Render `doc` to HTML and write it under `dir`. Returns the file path.
pub fn export_html(
    doc: &ReportDocument,
    dir: &Path,
    department: &str,
) -> Result<PathBuf, ExportError> {
    let html = ReportHtml::new(doc).render()?;
    let path = dir.join(export_file_name(department));
    std::fs::write(&path, html)?;
    Ok(path)
}
