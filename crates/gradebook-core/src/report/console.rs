//! Console table rendering for the ranked report.

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use super::Report;

const NAME_WIDTH: usize = 16;
const BORDER_WIDTH: usize = NAME_WIDTH + 6 * 3 + 7 + 8 + 5 + 6;

/// Render the report as a bordered, aligned table.
///
/// Rows appear in sorted order; averages are shown with two decimal places
/// and the top rank is highlighted.
pub fn render_table(report: &Report) -> String {
    let mut output = String::new();

    let border: String = "=".repeat(BORDER_WIDTH);
    let separator: String = "-".repeat(BORDER_WIDTH);

    let header = format!(
        "{:<name_width$} {:>6} {:>6} {:>6} {:>7} {:>8} {:>5}",
        "Name",
        "Kor",
        "Eng",
        "Math",
        "Total",
        "Average",
        "Rank",
        name_width = NAME_WIDTH,
    );

    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(output, "{}", header.bold());
    let _ = writeln!(output, "{}", separator.dimmed());

    for row in report.rows() {
        let line = format!(
            "{:<name_width$} {:>6} {:>6} {:>6} {:>7} {:>8.2} {:>5}",
            row.record.name,
            row.record.kor,
            row.record.eng,
            row.record.math,
            row.total,
            row.average,
            row.rank,
            name_width = NAME_WIDTH,
        );
        if row.rank == 1 {
            let _ = writeln!(output, "{}", line.yellow());
        } else {
            let _ = writeln!(output, "{}", line);
        }
    }

    let _ = write!(output, "{}", border.dimmed());
    output
}
