pub mod cell;
pub mod column_format;
pub mod row;
pub mod state;

pub use cell::{CellState, VocabCell};
pub use column_format::{CellFill, Column, ColumnFormat};
pub use row::VocabRow;
pub use state::VocabData;
