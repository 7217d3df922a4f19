//! Fixed-width terminal table.

use crate::format::format_id;
use crate::row::{Labels, Row};

const COLUMNS: usize = 5;

fn cells(row: &Row) -> [String; COLUMNS] {
    [
        row.date.clone(),
        row.description.clone(),
        format_id(row.credit),
        format_id(row.debit),
        format_id(row.balance),
    ]
}

/// Width of each column in characters: the longest of the header and every
/// rendered cell.
pub fn column_widths(rows: &[Row], labels: Labels) -> [usize; COLUMNS] {
    let mut widths = labels.headers().map(|h| h.chars().count());
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(cells(row)) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths
}

pub fn render_table(rows: &[Row], labels: Labels) -> String {
    let widths = column_widths(rows, labels);
    let mut out = String::new();

    let header: Vec<String> = labels
        .headers()
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');

    for row in rows {
        let line: Vec<String> = cells(row)
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                // text left, amounts right
                if i < 2 { format!("{cell:<w$}") } else { format!("{cell:>w$}") }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}
