//! Error types for catalog interpretation.
//!
//! [`RecordError`] describes why a single line could not become a record.
//! [`CatalogError`] is what whole-file operations return: either a record
//! failure tagged with its source line, or an I/O failure from reading.

use bigdecimal::ParseBigDecimalError;
use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("there's some missing data: expected 7 fields, found {found}")]
    MissingData { found: usize },

    #[error("there's some missing data: no value for column \"{column}\"")]
    MissingColumn { column: &'static str },

    #[error("invalid rating input: {0:?}")]
    InvalidRatingInput(String),

    #[error("invalid rating scale: {0:?}")]
    InvalidRatingScale(String),

    #[error("invalid rating value {value:?}: {source}")]
    InvalidRatingValue {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid rating value {value:?}: score must be a finite number")]
    NonFiniteRating { value: String },

    #[error("invalid price {value:?}: {source}")]
    InvalidPrice {
        value: String,
        #[source]
        source: ParseBigDecimalError,
    },
}

impl RecordError {
    /// True for both flavours of missing data (short line, unmapped column).
    pub fn is_missing_data(&self) -> bool {
        matches!(
            self,
            RecordError::MissingData { .. } | RecordError::MissingColumn { .. }
        )
    }

    /// True when a numeric token (rating score or price) failed to parse.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            RecordError::InvalidRatingValue { .. }
                | RecordError::NonFiniteRating { .. }
                | RecordError::InvalidPrice { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    /// `line` is 1-based and counts the header line when there is one.
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("failed to read catalog input: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub fn record_error(&self) -> Option<&RecordError> {
        match self {
            CatalogError::Record { source, .. } => Some(source),
            CatalogError::Io(_) => None,
        }
    }
}

pub type RecordResult<T> = Result<T, RecordError>;
pub type CatalogResult<T> = Result<T, CatalogError>;
