use rand::seq::SliceRandom;
use tracing::debug;

use super::{
    column_format::{Column, ColumnFormat},
    row::VocabRow,
};
use crate::core::models::VocabEntry;

/// Complete state of one quiz: the shuffled rows plus the active column
/// format. Every transition returns a new value; the driver holds exactly
/// one `VocabData` and replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabData {
    rows: Vec<VocabRow>,
    column_format: ColumnFormat,
}

impl VocabData {
    /// Builds a fresh quiz from a vocabulary list. Rows are shuffled once
    /// here; later edits and submissions never reorder them.
    pub fn new(entries: &[VocabEntry], column_format: ColumnFormat) -> Self {
        let mut rows: Vec<VocabRow> =
            entries.iter().map(|entry| VocabRow::from_entry(entry, column_format)).collect();
        rows.shuffle(&mut rand::rng());

        debug!(rows = rows.len(), format = %column_format, "created quiz");
        VocabData { rows, column_format }
    }

    pub fn rows(&self) -> &[VocabRow] {
        &self.rows
    }

    pub fn column_format(&self) -> ColumnFormat {
        self.column_format
    }

    /// Applies one cell edit. An id that matches no row leaves the state
    /// unchanged.
    pub fn with_cell_edit(&self, id: &str, column: Column, value: &str) -> VocabData {
        VocabData {
            rows: self
                .rows
                .iter()
                .map(|row| row.with_edited_cell(id, column, value))
                .collect(),
            column_format: self.column_format,
        }
    }

    /// Grades the whole table, locking in every correct answer.
    pub fn with_submission(&self) -> VocabData {
        VocabData {
            rows: self.rows.iter().map(VocabRow::reveal_correct_cells).collect(),
            column_format: self.column_format,
        }
    }

    /// Percentage of fillable cells answered correctly, rounded down. One
    /// prefilled column per row is excluded from the denominator. Only
    /// meaningful for a quiz with at least one row; an empty quiz scores 0.
    pub fn score_percent(&self) -> u32 {
        let fillable = self.rows.len() * (self.column_format.visible_column_count() - 1);
        if fillable == 0 {
            return 0;
        }

        let correct: usize = self.rows.iter().map(VocabRow::correct_cell_count).sum();
        (100 * correct / fillable) as u32
    }

    /// Whether the user has typed anything not yet confirmed correct.
    pub fn is_dirty(&self) -> bool {
        self.rows.iter().any(VocabRow::is_dirty)
    }
}
