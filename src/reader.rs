use crate::error::CatalogResult;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read every line from `reader` into memory.
///
/// Line terminators (`\n` or `\r\n`) are stripped and a trailing newline does
/// not produce an empty final line. Read errors are returned unchanged.
pub fn read_lines<R: BufRead>(reader: R) -> CatalogResult<Vec<String>> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}

pub fn read_lines_from_path(path: &Path) -> CatalogResult<Vec<String>> {
    let file = File::open(path)?;
    let lines = read_lines(BufReader::new(file))?;
    debug!(path = %path.display(), lines = lines.len(), "read catalog file");
    Ok(lines)
}
