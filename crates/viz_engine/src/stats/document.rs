//! Statistics document lifecycle
//!
//! Wraps a [`StatsKeyValueModel`] with the file state of the viewer:
//! a current path, a saved flag, and the new/open/save/save-as flows. Rows
//! are persisted as a JSON array of `{key, value}` records.

use crate::stats::model::StatsKeyValueModel;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by document operations
#[derive(Error, Debug)]
pub enum DocumentError {
    /// IO error reading or writing the document file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed document contents
    #[error("Document format error: {0}")]
    Format(#[from] serde_json::Error),

    /// Save requested before the document ever had a path
    #[error("document has no file path yet; use save_as")]
    NoPath,
}

/// A statistics model plus its file lifecycle state
#[derive(Debug, Default)]
pub struct StatsDocument {
    model: StatsKeyValueModel,
    path: Option<PathBuf>,
    unsaved_changes: bool,
}

impl StatsDocument {
    /// Create an empty, saved document with no path
    pub fn new() -> Self {
        Self::default()
    }

    /// The current model
    pub fn model(&self) -> &StatsKeyValueModel {
        &self.model
    }

    /// Replace the model, marking the document as modified
    pub fn set_model(&mut self, model: StatsKeyValueModel) {
        self.model = model;
        self.unsaved_changes = true;
    }

    /// Whether all changes have been written to disk
    pub fn is_saved(&self) -> bool {
        !self.unsaved_changes
    }

    /// The file this document was last opened from or saved to
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reset to an empty document with no path
    pub fn create_new(&mut self) {
        self.model = StatsKeyValueModel::new();
        self.path = None;
        self.unsaved_changes = false;
        log::info!("created new stats document");
    }

    /// Load the document from a JSON file
    pub fn open(&mut self, path: impl Into<PathBuf>) -> Result<(), DocumentError> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)?;
        self.model = serde_json::from_str(&contents)?;
        log::info!("opened {} ({} rows)", path.display(), self.model.len());
        self.path = Some(path);
        self.unsaved_changes = false;
        Ok(())
    }

    /// Write the document back to its current path
    pub fn save(&mut self) -> Result<(), DocumentError> {
        let path = self.path.clone().ok_or(DocumentError::NoPath)?;
        self.write_to(&path)
    }

    /// Write the document to `path` and adopt it as the current path
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), DocumentError> {
        let path = path.into();
        self.write_to(&path)?;
        self.path = Some(path);
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<(), DocumentError> {
        let contents = serde_json::to_string_pretty(&self.model)?;
        std::fs::write(path, contents)?;
        self.unsaved_changes = false;
        log::info!("saved {} ({} rows)", path.display(), self.model.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> StatsKeyValueModel {
        let mut model = StatsKeyValueModel::new();
        model.append("alpha", 3);
        model.append("beta", 7);
        model
    }

    #[test]
    fn test_new_document_is_saved_and_pathless() {
        let document = StatsDocument::new();
        assert!(document.is_saved());
        assert!(document.path().is_none());
        assert!(document.model().is_empty());
    }

    #[test]
    fn test_set_model_marks_unsaved() {
        let mut document = StatsDocument::new();
        document.set_model(sample_model());
        assert!(!document.is_saved());
    }

    #[test]
    fn test_save_without_path_is_an_error() {
        let mut document = StatsDocument::new();
        document.set_model(sample_model());
        assert!(matches!(document.save(), Err(DocumentError::NoPath)));
    }

    #[test]
    fn test_save_as_then_open_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");

        let mut document = StatsDocument::new();
        document.set_model(sample_model());
        document.save_as(&path).unwrap();
        assert!(document.is_saved());
        assert_eq!(document.path(), Some(path.as_path()));

        let mut reopened = StatsDocument::new();
        reopened.open(&path).unwrap();
        assert_eq!(*reopened.model(), sample_model());
        assert!(reopened.is_saved());
    }

    #[test]
    fn test_save_reuses_adopted_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");

        let mut document = StatsDocument::new();
        document.set_model(sample_model());
        document.save_as(&path).unwrap();

        let mut edited = sample_model();
        edited.append("gamma", 1);
        document.set_model(edited.clone());
        document.save().unwrap();

        let mut reopened = StatsDocument::new();
        reopened.open(&path).unwrap();
        assert_eq!(*reopened.model(), edited);
    }

    #[test]
    fn test_open_malformed_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut document = StatsDocument::new();
        assert!(matches!(
            document.open(&path),
            Err(DocumentError::Format(_))
        ));
    }

    #[test]
    fn test_create_new_resets_state() {
        let mut document = StatsDocument::new();
        document.set_model(sample_model());
        document.create_new();
        assert!(document.model().is_empty());
        assert!(document.is_saved());
        assert!(document.path().is_none());
    }
}
