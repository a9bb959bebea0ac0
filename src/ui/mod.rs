//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::analyzer::CandidateMatrix;
use crate::domain::Version;
use crate::error::Result;

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_proposed_tag, display_status,
    display_success, display_summary, render_matrix,
};

fn default_color() -> bool {
    true
}

fn default_column_gap() -> usize {
    2
}

/// Presentation settings handed to the terminal collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayOptions {
    /// Style row labels and cell numbers
    #[serde(default = "default_color")]
    pub color: bool,

    /// Spaces between candidate columns
    #[serde(default = "default_column_gap")]
    pub column_gap: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            color: default_color(),
            column_gap: default_column_gap(),
        }
    }
}

/// Outcome of presenting the candidate matrix
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixSelection {
    Selected(Version),
    Cancelled,
}

/// User interaction needed by the tagging workflow
pub trait Interaction {
    /// Show the candidate matrix and let the user pick one cell
    fn present_candidate_matrix(&self, matrix: &CandidateMatrix) -> Result<MatrixSelection>;

    /// Ask a yes/no question, defaulting to no
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Parsed answer to the cell selection prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionInput {
    /// Zero-based index into the numbered cells
    Cell(usize),
    Cancel,
    Invalid,
}

/// Interprets one line typed at the selection prompt.
///
/// Cells are numbered from 1. Empty input picks the first cell, `q` cancels.
///
/// # Examples
/// ```ignore
/// assert_eq!(parse_selection("", 9), SelectionInput::Cell(0));
/// assert_eq!(parse_selection("3", 9), SelectionInput::Cell(2));
/// assert_eq!(parse_selection("10", 9), SelectionInput::Invalid);
/// ```
pub fn parse_selection(input: &str, cell_count: usize) -> SelectionInput {
    let input = input.trim();
    if input.is_empty() {
        return if cell_count > 0 {
            SelectionInput::Cell(0)
        } else {
            SelectionInput::Invalid
        };
    }
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return SelectionInput::Cancel;
    }

    match input.parse::<usize>() {
        Ok(n) if n > 0 && n <= cell_count => SelectionInput::Cell(n - 1),
        _ => SelectionInput::Invalid,
    }
}

/// Interprets a yes/no answer; anything but "y"/"yes" is no.
pub fn parse_confirmation(input: &str) -> bool {
    let response = input.trim().to_lowercase();
    response == "y" || response == "yes"
}

/// Stdin/stdout implementation of [Interaction]
pub struct TerminalInteraction {
    options: DisplayOptions,
}

impl TerminalInteraction {
    pub fn new(options: DisplayOptions) -> Self {
        TerminalInteraction { options }
    }
}

impl Interaction for TerminalInteraction {
    fn present_candidate_matrix(&self, matrix: &CandidateMatrix) -> Result<MatrixSelection> {
        let cells = matrix.selectable();
        if cells.is_empty() {
            return Ok(MatrixSelection::Cancelled);
        }

        println!("\n{}", render_matrix(matrix, &self.options));

        loop {
            print!(
                "\nSelect next version (1-{}) [default: 1, q to cancel]: ",
                cells.len()
            );
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                return Ok(MatrixSelection::Cancelled);
            }

            match parse_selection(&input, cells.len()) {
                SelectionInput::Cell(index) => {
                    return Ok(MatrixSelection::Selected(cells[index].2.clone()))
                }
                SelectionInput::Cancel => return Ok(MatrixSelection::Cancelled),
                SelectionInput::Invalid => {
                    display_error(&format!("Invalid selection '{}'", input.trim()))
                }
            }
        }
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("\n{} (y/N): ", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(parse_confirmation(&input))
    }
}
