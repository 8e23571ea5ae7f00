//! Core Data Models
//!
//! This module defines the record shape every catalog line is normalized into,
//! together with the canonical column schema and the rating scales the catalog
//! understands.
//!
//! ## Core Types
//!
//! - [`WineRecord`] - One catalog entry with typed rating, price and entry time
//! - [`RatingScale`] - Named rating conventions and their 0-100 normalization
//! - [`COLUMNS`] - Canonical column labels, in canonical order
//!
//! ## Features
//!
//! - **Serde Integration**: records serialize with PascalCase keys, prices as
//!   decimal strings and entry times as RFC 3339
//! - **Exact Prices**: [`BigDecimal`] keeps currency values free of binary
//!   floating-point drift

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of fields every catalog line resolves to.
pub const FIELD_COUNT: usize = 7;

/// Canonical column labels. Order is significant for positional files.
pub const COLUMNS: [&str; FIELD_COUNT] = [
    "Country of Origin",
    "Vineyard",
    "Winery",
    "Wine Type",
    "Vintage",
    "Rating",
    "Price",
];

/// Canonical position of the rating column.
pub const RATING_INDEX: usize = 5;

/// Canonical position of the price column.
pub const PRICE_INDEX: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WineRecord {
    pub origin_country: String,
    pub vineyard: String,
    pub wine_type: String,
    pub winery: String,
    /// Stored as written; not validated as a year.
    pub vintage: String,
    /// Always on the 0-100 scale.
    pub rating: f64,
    pub unit_price: BigDecimal,
    pub entry_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingScale {
    /// Robert Parker, already 0-100.
    Parker,
    /// Jancis Robinson, 0-20.
    Robinson,
}

impl RatingScale {
    pub fn name(&self) -> &'static str {
        match self {
            RatingScale::Parker => "Parker",
            RatingScale::Robinson => "Robinson",
        }
    }

    /// Convert a score expressed on this scale to the 0-100 scale.
    pub fn normalize(&self, value: f64) -> f64 {
        match self {
            RatingScale::Parker => value,
            RatingScale::Robinson => (value / 20.0) * 100.0,
        }
    }
}

impl FromStr for RatingScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Parker" => Ok(RatingScale::Parker),
            "Robinson" => Ok(RatingScale::Robinson),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for RatingScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
