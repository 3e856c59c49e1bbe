use super::column_format::{CellFill, Column};
use crate::{core::models::RawCell, pinyin::normalize_pinyin};

/// What one table cell currently holds from the user's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellState {
    /// Column not part of the active format; the cell is never rendered.
    NotShown,
    /// Filled in by the application, either at row creation or after a
    /// correct submission. Shows the display text, not editable.
    Revealed,
    /// A text input holding whatever the user has typed so far.
    Editable(String),
}

/// One cell in the vocabulary table: the canonical display text, the
/// answers accepted as correct, and the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabCell {
    pub display: String,
    pub accept: Vec<String>,
    pub state: CellState,
}

impl VocabCell {
    pub fn from_raw(raw: &RawCell, fill: CellFill) -> Self {
        let state = match fill {
            CellFill::Prefilled => CellState::Revealed,
            CellFill::Blank => CellState::Editable(String::new()),
            CellFill::NotShown => CellState::NotShown,
        };

        VocabCell {
            display: raw.display.clone(),
            accept: raw.accepted_answers(),
            state,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.state, CellState::Revealed)
    }

    /// The user's in-progress text, when the cell is editable.
    pub fn user_text(&self) -> Option<&str> {
        match &self.state {
            CellState::Editable(text) => Some(text),
            _ => None,
        }
    }

    /// Whether the user's current text matches any accepted answer.
    /// Comparison is trimmed and case-insensitive; on the pinyin column
    /// both sides additionally go through tone-mark normalization. Cells
    /// that are not editable, or still empty, are never correct.
    pub fn is_correct(&self, column: Column) -> bool {
        let text = match &self.state {
            CellState::Editable(text) if !text.is_empty() => text,
            _ => return false,
        };

        self.accept.iter().any(|answer| answers_match(answer, text, column))
    }

    /// Locks a correct answer in as revealed; an incorrect or empty cell
    /// keeps its current text so the user can try again.
    pub fn reveal_if_correct(&self, column: Column) -> VocabCell {
        if self.is_correct(column) {
            VocabCell { state: CellState::Revealed, ..self.clone() }
        } else {
            self.clone()
        }
    }

    /// Replaces the text of an editable cell. Revealed cells never revert
    /// to editable, so edits to them (and to hidden cells) are no-ops.
    pub fn with_answer(&self, value: &str) -> VocabCell {
        match self.state {
            CellState::Editable(_) => {
                VocabCell { state: CellState::Editable(value.to_string()), ..self.clone() }
            }
            _ => self.clone(),
        }
    }
}

fn answers_match(accepted: &str, user: &str, column: Column) -> bool {
    let accepted = accepted.trim().to_lowercase();
    let user = user.trim().to_lowercase();

    if column == Column::Pinyin {
        normalize_pinyin(&accepted) == normalize_pinyin(&user)
    } else {
        accepted == user
    }
}

#[cfg(test)]
mod tests {
    use super::{CellState, VocabCell};
    use crate::{core::models::RawCell, quiz::column_format::{CellFill, Column}};

    fn raw(display: &str, accept: Option<Vec<&str>>) -> RawCell {
        RawCell {
            display: display.to_string(),
            accept: accept.map(|list| list.into_iter().map(String::from).collect()),
        }
    }

    fn editable(display: &str, accept: Option<Vec<&str>>, text: &str) -> VocabCell {
        VocabCell::from_raw(&raw(display, accept), CellFill::Blank).with_answer(text)
    }

    #[test]
    fn accept_defaults_to_display() {
        let cell = VocabCell::from_raw(&raw("hello", None), CellFill::Blank);
        assert_eq!(cell.accept, vec!["hello"]);
    }

    #[test]
    fn correctness_is_trimmed_and_case_insensitive() {
        let cell = editable("hello", Some(vec!["hello", "hi"]), "  Hello ");
        assert!(cell.is_correct(Column::English));

        let cell = editable("hello", Some(vec!["hello", "hi"]), "HI");
        assert!(cell.is_correct(Column::English));

        let cell = editable("hello", None, "goodbye");
        assert!(!cell.is_correct(Column::English));
    }

    #[test]
    fn empty_and_non_editable_cells_are_never_correct() {
        let untouched = VocabCell::from_raw(&raw("hello", None), CellFill::Blank);
        assert!(!untouched.is_correct(Column::English));

        let prefilled = VocabCell::from_raw(&raw("hello", None), CellFill::Prefilled);
        assert!(!prefilled.is_correct(Column::English));

        let hidden = VocabCell::from_raw(&raw("hello", None), CellFill::NotShown);
        assert!(!hidden.is_correct(Column::English));
    }

    #[test]
    fn pinyin_column_accepts_either_tone_notation() {
        let cell = editable("nǐ hǎo", None, "ni3hao3");
        assert!(cell.is_correct(Column::Pinyin));

        let cell = editable("nǐ hǎo", None, "nǐhǎo");
        assert!(cell.is_correct(Column::Pinyin));

        // Tone normalization is confined to the pinyin column.
        let cell = editable("nǐ hǎo", None, "ni3hao3");
        assert!(!cell.is_correct(Column::English));
    }

    #[test]
    fn reveal_locks_in_correct_answers_only() {
        let correct = editable("hello", None, "hello").reveal_if_correct(Column::English);
        assert_eq!(correct.state, CellState::Revealed);

        let wrong = editable("hello", None, "goodbye").reveal_if_correct(Column::English);
        assert_eq!(wrong.state, CellState::Editable("goodbye".to_string()));
    }

    #[test]
    fn with_answer_never_reverts_a_revealed_cell() {
        let revealed = VocabCell::from_raw(&raw("hello", None), CellFill::Prefilled);
        assert_eq!(revealed.with_answer("x").state, CellState::Revealed);

        let hidden = VocabCell::from_raw(&raw("hello", None), CellFill::NotShown);
        assert_eq!(hidden.with_answer("x").state, CellState::NotShown);
    }
}
