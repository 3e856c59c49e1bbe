use serde::Deserialize;

/// One side of a vocabulary entry as it appears in the JSON asset files.
/// `display` is what the table shows when the cell is filled in; `accept`
/// lists every answer the quiz marks correct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCell {
    pub display: String,
    #[serde(default)]
    pub accept: Option<Vec<String>>,
}

impl RawCell {
    /// Answers judged correct for this cell. Falls back to the display
    /// string when the asset supplies no alternates.
    pub fn accepted_answers(&self) -> Vec<String> {
        match &self.accept {
            Some(accept) if !accept.is_empty() => accept.clone(),
            _ => vec![self.display.clone()],
        }
    }
}

/// One vocabulary word: a Hanzi/Pinyin/English triple plus an optional
/// stable id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VocabEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub hanzi: RawCell,
    pub pinyin: RawCell,
    pub english: RawCell,
}

impl VocabEntry {
    /// Stable key used to match edits to rows. Asset-supplied ids win;
    /// older files without ids fall back to the english display text.
    pub fn row_id(&self) -> String {
        self.id.clone().unwrap_or_else(|| self.english.display.clone())
    }
}

/// A titled vocabulary list, one JSON asset file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VocabSet {
    pub title: String,
    pub vocabulary: Vec<VocabEntry>,
}
