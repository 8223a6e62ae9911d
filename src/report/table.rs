use crate::error::Result;
use crate::models::UserActivityRow;

pub const HEADER: [&str; 8] = [
    "Repository",
    "User",
    "CreatedPRs",
    "ReviewedPRs",
    "Approved",
    "Changes",
    "Commented",
    "Dismissed",
];

/// Columns holding counts; these are right-aligned.
const NUMERIC_FROM: usize = 2;

/// Renders rows as a GitHub-flavoured pipe table, one line per row.
pub fn render_markdown(rows: &[UserActivityRow]) -> String {
    let cells: Vec<[String; 8]> = rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = HEADER.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_line(&mut output, HEADER.iter().copied(), &widths);

    output.push('|');
    for (i, width) in widths.iter().enumerate() {
        let dashes = "-".repeat(*width + 1);
        if i >= NUMERIC_FROM {
            output.push_str(&format!("{}:|", dashes));
        } else {
            output.push_str(&format!(":{}|", dashes));
        }
    }
    output.push('\n');

    for row in &cells {
        push_line(&mut output, row.iter().map(String::as_str), &widths);
    }

    output
}

pub fn render_json(rows: &[UserActivityRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

fn row_cells(row: &UserActivityRow) -> [String; 8] {
    [
        row.repository.clone(),
        row.user.clone(),
        row.created.to_string(),
        row.reviewed.to_string(),
        row.approved.to_string(),
        row.changes_requested.to_string(),
        row.commented.to_string(),
        row.dismissed.to_string(),
    ]
}

fn push_line<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    output.push('|');
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i >= NUMERIC_FROM {
            output.push_str(&format!(" {:>width$} |", cell, width = *width));
        } else {
            output.push_str(&format!(" {:<width$} |", cell, width = *width));
        }
    }
    output.push('\n');
}
