//! Key/value statistics rows
//!
//! The statistics viewer edits an ordered list of `(key, value)` rows; the
//! pie chart consumes the same rows through [`StatsKeyValueModel::value_sum`]
//! and the row accessors.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single key/value row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRow {
    /// Row label
    pub key: String,
    /// Row value
    pub value: i64,
}

/// Ordered key/value rows behind the statistics viewer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsKeyValueModel {
    rows: Vec<StatsRow>,
}

impl StatsKeyValueModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row
    pub fn append(&mut self, key: impl Into<String>, value: i64) {
        self.rows.push(StatsRow {
            key: key.into(),
            value,
        });
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the model has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Key of row `index`
    pub fn key(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(|row| row.key.as_str())
    }

    /// Value of row `index`
    pub fn value(&self, index: usize) -> Option<i64> {
        self.rows.get(index).map(|row| row.value)
    }

    /// Replace the key of row `index`; returns false when out of range
    pub fn set_key(&mut self, index: usize, key: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.key = key.into();
                true
            }
            None => false,
        }
    }

    /// Replace the value of row `index`; returns false when out of range
    pub fn set_value(&mut self, index: usize, value: i64) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.value = value;
                true
            }
            None => false,
        }
    }

    /// Sum of all row values
    pub fn value_sum(&self) -> i64 {
        self.rows.iter().map(|row| row.value).sum()
    }

    /// All rows in order
    pub fn rows(&self) -> &[StatsRow] {
        &self.rows
    }

    /// Remove every row whose index is in `indices`
    ///
    /// Remaining rows keep their relative order (the delete-selected-rows
    /// operation of the viewer).
    pub fn remove_rows(&mut self, indices: &HashSet<usize>) {
        let mut index = 0;
        self.rows.retain(|_| {
            let keep = !indices.contains(&index);
            index += 1;
            keep
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StatsKeyValueModel {
        let mut model = StatsKeyValueModel::new();
        model.append("lectures", 36);
        model.append("labs", 48);
        model.append("exams", 16);
        model
    }

    #[test]
    fn test_append_and_access() {
        let model = sample();
        assert_eq!(model.len(), 3);
        assert_eq!(model.key(1), Some("labs"));
        assert_eq!(model.value(1), Some(48));
        assert_eq!(model.key(3), None);
        assert_eq!(model.value(3), None);
    }

    #[test]
    fn test_value_sum() {
        assert_eq!(sample().value_sum(), 100);
        assert_eq!(StatsKeyValueModel::new().value_sum(), 0);
    }

    #[test]
    fn test_edit_rows() {
        let mut model = sample();
        assert!(model.set_value(0, 40));
        assert!(model.set_key(0, "seminars"));
        assert_eq!(model.key(0), Some("seminars"));
        assert_eq!(model.value_sum(), 104);

        assert!(!model.set_value(9, 1));
        assert!(!model.set_key(9, "nope"));
    }

    #[test]
    fn test_remove_rows_keeps_order() {
        let mut model = sample();
        model.remove_rows(&HashSet::from([0, 2]));
        assert_eq!(model.len(), 1);
        assert_eq!(model.key(0), Some("labs"));
    }

    #[test]
    fn test_remove_rows_ignores_out_of_range() {
        let mut model = sample();
        model.remove_rows(&HashSet::from([7]));
        assert_eq!(model.len(), 3);
    }

    #[test]
    fn test_serializes_as_plain_row_array() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with('['));
        let back: StatsKeyValueModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
