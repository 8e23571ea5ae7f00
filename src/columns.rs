//! Column layout detection.
//!
//! The first line of a catalog decides how every line is read. If any of its
//! comma-separated tokens is exactly one of the canonical [`COLUMNS`] labels,
//! the file is *named*: the first line is a header and each data token is
//! moved to its canonical slot through the header mapping. Otherwise the file
//! is *positional* and every line, the first included, is already in
//! canonical order.
//!
//! Known limitation: a positional file whose first row contains a token equal
//! to a canonical label (a winery literally called `Vineyard`, say) is read as
//! a header.

use crate::error::{RecordError, RecordResult};
use crate::models::{COLUMNS, FIELD_COUNT};
use tracing::debug;

pub const DELIMITER: char = ',';

/// Split a raw line into tokens. No quoting or escaping is recognized.
pub fn split_line(line: &str) -> Vec<&str> {
    line.split(DELIMITER).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnLayout {
    /// Tokens already arrive in canonical order.
    Positional,
    /// Canonical position -> token position, from the header line.
    Named([Option<usize>; FIELD_COUNT]),
}

impl ColumnLayout {
    /// Detect the layout from the first line's tokens.
    ///
    /// Matching is exact (no trimming or case folding) and the first matching
    /// token wins when a label is repeated.
    pub fn detect(header: &[&str]) -> Self {
        let mut mapping = [None; FIELD_COUNT];
        for (column_idx, column) in COLUMNS.iter().enumerate() {
            mapping[column_idx] = header.iter().position(|token| token == column);
        }

        if mapping.iter().all(Option::is_none) {
            debug!("no column labels in first line, using positional layout");
            return ColumnLayout::Positional;
        }

        debug!(
            mapped = mapping.iter().filter(|m| m.is_some()).count(),
            mapping = ?mapping,
            "detected named column header"
        );
        ColumnLayout::Named(mapping)
    }

    pub fn is_named(&self) -> bool {
        matches!(self, ColumnLayout::Named(_))
    }

    /// Canonical labels the header did not provide. Empty when positional.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        match self {
            ColumnLayout::Positional => Vec::new(),
            ColumnLayout::Named(mapping) => mapping
                .iter()
                .zip(COLUMNS.iter())
                .filter(|(m, _)| m.is_none())
                .map(|(_, column)| *column)
                .collect(),
        }
    }

    /// Put a data line's tokens into canonical order.
    ///
    /// Positional lines are passed through untouched; the field count check
    /// belongs to the record builder. Named lines fail with
    /// [`RecordError::MissingColumn`] when a canonical column has no header
    /// entry or the line is too short to hold the mapped token. Tokens at
    /// unmapped positions are ignored.
    pub fn reorder<'a>(&self, tokens: Vec<&'a str>) -> RecordResult<Vec<&'a str>> {
        match self {
            ColumnLayout::Positional => Ok(tokens),
            ColumnLayout::Named(mapping) => mapping
                .iter()
                .zip(COLUMNS.iter())
                .map(|(slot, &column)| {
                    slot.and_then(|idx| tokens.get(idx).copied())
                        .ok_or(RecordError::MissingColumn { column })
                })
                .collect(),
        }
    }
}
