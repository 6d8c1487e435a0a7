//! Text rendering of journal snapshots

use std::fmt::Write;
use crate::types::{DisplayRow, Snapshot};

const HEADINGS: [&str; 11] = [
    "Date", "Segment", "Instrument", "Type", "Expiry", "Strike", "Action", "Qty", "Price", "Value", "Notes",
];

fn cells(row: &DisplayRow) -> [String; 11] {
    let r = &row.record;
    [
        r.date.to_string(),
        r.segment.to_string(),
        r.instrument.clone(),
        r.option_type.to_string(),
        r.expiry.to_string(),
        r.strike_if_applicable()
            .map(|s| s.normalize().to_string())
            .unwrap_or_else(|| "-".to_string()),
        r.action.to_string(),
        r.qty.to_string(),
        format!("{:.2}", r.price),
        row.value
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "overflow".to_string()),
        r.notes.replace(['\r', '\n'], " "),
    ]
}

fn push_line<'a>(out: &mut String, cols: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cols
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

/// Recent trades as an aligned table followed by the total count.
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    if snapshot.is_empty() {
        out.push_str("No trades recorded yet. Add your first trade with `trade-journal add`.\n");
        return out;
    }

    let rows: Vec<[String; 11]> = snapshot.rows.iter().map(cells).collect();
    let mut widths = HEADINGS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    push_line(&mut out, HEADINGS.iter().copied(), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }

    let _ = writeln!(out, "\nTotal trades recorded: {}", snapshot.total_count);
    out
}
