pub mod errors;
pub mod loader;
pub mod models;

pub use errors::CihuiError;
pub use models::{RawCell, VocabEntry, VocabSet};
