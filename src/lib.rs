pub mod core;
pub mod pinyin;
pub mod quiz;

pub use crate::core::{CihuiError, RawCell, VocabEntry, VocabSet};
pub use crate::pinyin::normalize_pinyin;
pub use crate::quiz::{CellFill, CellState, Column, ColumnFormat, VocabCell, VocabData, VocabRow};
