use super::{
    cell::VocabCell,
    column_format::{Column, ColumnFormat},
};
use crate::core::models::VocabEntry;

/// One row in the vocabulary table: a stable id plus one cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabRow {
    pub id: String,
    pub hanzi: VocabCell,
    pub pinyin: VocabCell,
    pub english: VocabCell,
}

impl VocabRow {
    pub fn from_entry(entry: &VocabEntry, format: ColumnFormat) -> Self {
        let plan = format.initial_fill_plan();

        VocabRow {
            id: entry.row_id(),
            hanzi: VocabCell::from_raw(&entry.hanzi, plan[Column::Hanzi.index()]),
            pinyin: VocabCell::from_raw(&entry.pinyin, plan[Column::Pinyin.index()]),
            english: VocabCell::from_raw(&entry.english, plan[Column::English.index()]),
        }
    }

    pub fn cell(&self, column: Column) -> &VocabCell {
        match column {
            Column::Hanzi => &self.hanzi,
            Column::Pinyin => &self.pinyin,
            Column::English => &self.english,
        }
    }

    /// Returns an unchanged copy unless `id` names this row, in which
    /// case the targeted cell takes the new text.
    pub fn with_edited_cell(&self, id: &str, column: Column, value: &str) -> VocabRow {
        if self.id != id {
            return self.clone();
        }

        let edited = self.cell(column).with_answer(value);
        let mut row = self.clone();
        match column {
            Column::Hanzi => row.hanzi = edited,
            Column::Pinyin => row.pinyin = edited,
            Column::English => row.english = edited,
        }
        row
    }

    /// Applies `reveal_if_correct` to every cell independently.
    pub fn reveal_correct_cells(&self) -> VocabRow {
        VocabRow {
            id: self.id.clone(),
            hanzi: self.hanzi.reveal_if_correct(Column::Hanzi),
            pinyin: self.pinyin.reveal_if_correct(Column::Pinyin),
            english: self.english.reveal_if_correct(Column::English),
        }
    }

    /// Whether any cell holds user text that has not been confirmed
    /// correct yet. Revealed and untouched cells do not count.
    pub fn is_dirty(&self) -> bool {
        Column::ALL
            .iter()
            .any(|&column| self.cell(column).user_text().is_some_and(|text| !text.is_empty()))
    }

    /// Cells the user actually answered correctly. One revealed cell per
    /// row is the prefilled source column and does not count.
    pub fn correct_cell_count(&self) -> usize {
        let revealed =
            Column::ALL.iter().filter(|&&column| self.cell(column).is_revealed()).count();
        revealed.saturating_sub(1)
    }
}
