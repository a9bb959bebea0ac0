//! Pure formatting functions for UI output.
//!
//! Functions here either build strings (testable) or print them with
//! `console` styling; none of them read input.

use console::{measure_text_width, pad_str, style, Alignment};

use crate::analyzer::{CandidateMatrix, VersionSet};
use crate::boundary::BoundaryWarning;
use crate::ui::DisplayOptions;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Lines describing the current state of the tag history:
/// the latest release, then the newest version of each ranked channel.
pub fn summary_lines(set: &VersionSet) -> Vec<String> {
    let mut lines = vec![format!("latest: {}", set.latest())];
    for channel in set.channel_rank() {
        if let Some(version) = set.latest_for_channel(channel) {
            lines.push(format!("latest pre({}): {}", channel, version));
        }
    }
    lines
}

pub fn display_summary(set: &VersionSet) {
    for line in summary_lines(set) {
        println!("{}", line);
    }
}

/// Display the tag about to be created and where it goes.
pub fn display_proposed_tag(tag: &str, remote: &str) {
    println!("\n{}", style("Next tag:").bold());
    println!("  {} -> {}", style(tag).green(), remote);
}

/// Render the candidate matrix as an aligned table.
///
/// Computed cells are numbered in row-major order, matching
/// [CandidateMatrix::selectable]; cells that could not be computed show `-`.
pub fn render_matrix(matrix: &CandidateMatrix, options: &DisplayOptions) -> String {
    let titles = matrix.column_titles();

    let mut number = 0;
    let mut labels: Vec<Vec<String>> = Vec::with_capacity(matrix.rows.len());
    for row in &matrix.rows {
        let mut row_labels = Vec::with_capacity(row.cells.len());
        for cell in &row.cells {
            match cell {
                Some(version) => {
                    number += 1;
                    row_labels.push(format!("[{}] {}", number, version));
                }
                None => row_labels.push("-".to_string()),
            }
        }
        labels.push(row_labels);
    }

    let row_names: Vec<String> = matrix
        .rows
        .iter()
        .map(|row| format!("{}:", row.segment))
        .collect();
    let name_width = row_names
        .iter()
        .map(|n| measure_text_width(n))
        .max()
        .unwrap_or(0);

    let widths: Vec<usize> = titles
        .iter()
        .enumerate()
        .map(|(c, title)| {
            labels
                .iter()
                .filter_map(|row| row.get(c))
                .map(|label| measure_text_width(label))
                .chain(std::iter::once(measure_text_width(title)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let gap = " ".repeat(options.column_gap);
    let mut out = Vec::with_capacity(matrix.rows.len() + 1);

    let mut header = pad_str("", name_width, Alignment::Left, None).into_owned();
    for (title, width) in titles.iter().zip(&widths) {
        header.push_str(&gap);
        let padded = pad_str(title, *width, Alignment::Left, None);
        if options.color {
            header.push_str(&style(padded).bold().to_string());
        } else {
            header.push_str(&padded);
        }
    }
    out.push(header.trim_end().to_string());

    for (name, row_labels) in row_names.iter().zip(&labels) {
        let padded = pad_str(name, name_width, Alignment::Left, None);
        let mut line = if options.color {
            style(padded).red().to_string()
        } else {
            padded.into_owned()
        };
        for (label, width) in row_labels.iter().zip(&widths) {
            line.push_str(&gap);
            line.push_str(&pad_str(label, *width, Alignment::Left, None));
        }
        out.push(line.trim_end().to_string());
    }

    out.join("\n")
}
