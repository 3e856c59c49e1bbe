use std::{fs, io::Read, path::Path};

use tracing::debug;

use super::{models::VocabSet, CihuiError};

impl VocabSet {
    /// Parses a vocabulary set from a JSON string. A set with an empty
    /// vocabulary list is rejected because quiz scoring is undefined on
    /// an empty row set.
    pub fn from_json(json: &str) -> Result<Self, CihuiError> {
        let set: VocabSet = serde_json::from_str(json)?;
        if set.vocabulary.is_empty() {
            return Err(CihuiError::EmptyVocabulary(set.title));
        }
        debug!(title = %set.title, entries = set.vocabulary.len(), "loaded vocabulary set");
        Ok(set)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, CihuiError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CihuiError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|_| CihuiError::FailedToLoadFile(path.display().to_string()))?;
        Self::from_json(&json)
    }
}
