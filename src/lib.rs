//! Wine Catalog Library
//!
//! Normalizes comma-delimited wine catalog exports into typed records. A
//! catalog either lists its seven fields in canonical order on every line, or
//! starts with a header naming the columns in any order; both are detected
//! from the first line without a flag.
//!
//! ## Architecture Overview
//!
//! - [`interpreter`] - Layout detection and per-line processing, the entry point
//! - [`columns`] - Positional vs named layout detection and token reordering
//! - [`record`] - Builds a [`WineRecord`] from seven canonical tokens
//! - [`rating`] - Parker / Robinson rating notation to a 0-100 score
//! - [`models`] - Record type, rating scales, canonical column labels
//! - [`error`] - Typed error taxonomy
//! - [`reader`] - Eager line reading from files or any buffered source
//! - [`output`] - Timestamp-named JSON export
//! - [`config`] - Configuration with file and environment overrides
//! - [`logging`] - Structured logging setup
//!
//! ## Usage Example
//!
//! ```rust
//! use wine_catalog::interpret;
//!
//! let lines = [
//!     "Rating,Price,Country of Origin,Vineyard,Winery,Wine Type,Vintage",
//!     "Robinson: 18,1290.00,Chile,Valle Central,Baron De Rothschild,Chardonnay,2019",
//! ];
//! let records = interpret(&lines, chrono::Utc::now())?;
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].rating, 90.0);
//! # Ok::<(), wine_catalog::CatalogError>(())
//! ```

pub mod columns;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod logging;
pub mod models;
pub mod output;
pub mod rating;
pub mod reader;
pub mod record;

pub use error::{CatalogError, RecordError};
pub use interpreter::{interpret, interpret_file};
pub use models::*;
