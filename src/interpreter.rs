//! Line Interpreter
//!
//! Entry point of the catalog pipeline. Given the raw lines of a catalog file
//! and one entry timestamp, it detects the column layout from the first line,
//! puts each data line into canonical order and builds a [`WineRecord`] from
//! it.
//!
//! ## Processing
//!
//! 1. **Detection**: [`ColumnLayout::detect`] on the first line only
//! 2. **Header**: in named mode the first line is consumed and produces no record
//! 3. **Reordering**: [`ColumnLayout::reorder`] maps tokens to canonical slots
//! 4. **Building**: [`build_record`] trims, converts the rating and parses the price
//!
//! Any failing line aborts the whole run; no partial record list is returned.
//! The interpreter holds no state between calls and is safe to use from
//! several threads on independent inputs.

use crate::columns::{split_line, ColumnLayout};
use crate::error::{CatalogError, CatalogResult};
use crate::models::WineRecord;
use crate::reader::read_lines_from_path;
use crate::record::build_record;
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Interpret catalog lines into records stamped with `entry_time`.
///
/// Empty input yields an empty list.
pub fn interpret<S: AsRef<str>>(
    lines: &[S],
    entry_time: DateTime<Utc>,
) -> CatalogResult<Vec<WineRecord>> {
    let Some(first) = lines.first() else {
        debug!("empty catalog input");
        return Ok(Vec::new());
    };

    let layout = ColumnLayout::detect(&split_line(first.as_ref()));
    let skip = usize::from(layout.is_named());
    if layout.is_named() {
        let missing = layout.missing_columns();
        if !missing.is_empty() {
            debug!(?missing, "header does not name every column");
        }
    }

    let mut records = Vec::with_capacity(lines.len() - skip);
    for (idx, line) in lines.iter().enumerate().skip(skip) {
        let line_number = idx + 1;
        let record = layout
            .reorder(split_line(line.as_ref()))
            .and_then(|tokens| build_record(&tokens, entry_time))
            .map_err(|source| {
                warn!(line = line_number, error = %source, "rejecting catalog line");
                CatalogError::Record {
                    line: line_number,
                    source,
                }
            })?;

        trace!(line = line_number, winery = %record.winery, "parsed catalog line");
        records.push(record);
    }

    debug!(
        records = records.len(),
        named = layout.is_named(),
        "catalog interpreted"
    );
    Ok(records)
}

/// Read a catalog file and interpret it.
pub fn interpret_file(
    path: impl AsRef<Path>,
    entry_time: DateTime<Utc>,
) -> CatalogResult<Vec<WineRecord>> {
    let lines = read_lines_from_path(path.as_ref())?;
    interpret(&lines, entry_time)
}
