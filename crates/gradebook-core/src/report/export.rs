//! TSV and JSON export of the ranked report.

use std::fs;
use std::path::Path;

use crate::error::Result;

use super::Report;

pub fn format_tsv_header() -> String {
    ["Name", "Kor", "Eng", "Math", "Total", "Average", "Rank"].join("\t")
}

/// Render the report as TSV, header first, rows in sorted order.
pub fn to_tsv(report: &Report) -> String {
    let mut lines = vec![format_tsv_header()];

    for row in report.rows() {
        lines.push(format!(
            "{}\t{}\t{}\t{}\t{}\t{:.2}\t{}",
            row.record.name,
            row.record.kor,
            row.record.eng,
            row.record.math,
            row.total,
            row.average,
            row.rank
        ));
    }

    lines.join("\n")
}

pub fn write_tsv<P: AsRef<Path>>(report: &Report, path: P) -> Result<()> {
    fs::write(path, to_tsv(report))?;
    Ok(())
}

/// Render the report as a JSON array of ranked rows.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report.rows())?)
}

pub fn write_json<P: AsRef<Path>>(report: &Report, path: P) -> Result<()> {
    fs::write(path, to_json(report)?)?;
    Ok(())
}
