//! Record Builder
//!
//! Turns exactly [`FIELD_COUNT`] canonical-ordered tokens into a [`WineRecord`].
//! Every token is trimmed first; the rating goes through
//! [`parse_rating`](crate::rating::parse_rating) and the price must be a bare
//! decimal literal (no currency symbols or thousands separators).

use crate::error::{RecordError, RecordResult};
use crate::models::{WineRecord, FIELD_COUNT, PRICE_INDEX, RATING_INDEX};
use crate::rating::parse_rating;
use bigdecimal::{BigDecimal, ParseBigDecimalError};
use chrono::{DateTime, Utc};
use std::str::FromStr;

pub fn build_record<S: AsRef<str>>(
    tokens: &[S],
    entry_time: DateTime<Utc>,
) -> RecordResult<WineRecord> {
    if tokens.len() != FIELD_COUNT {
        return Err(RecordError::MissingData {
            found: tokens.len(),
        });
    }

    let fields: Vec<&str> = tokens.iter().map(|t| t.as_ref().trim()).collect();

    let rating = parse_rating(fields[RATING_INDEX])?;
    let unit_price = parse_price(fields[PRICE_INDEX])?;

    Ok(WineRecord {
        origin_country: fields[0].to_string(),
        vineyard: fields[1].to_string(),
        winery: fields[2].to_string(),
        wine_type: fields[3].to_string(),
        vintage: fields[4].to_string(),
        rating,
        unit_price,
        entry_time,
    })
}

fn parse_price(raw: &str) -> RecordResult<BigDecimal> {
    // BigDecimal accepts `_` digit separators; a bare decimal literal does not.
    if raw.contains('_') {
        return Err(RecordError::InvalidPrice {
            value: raw.to_string(),
            source: ParseBigDecimalError::Other("digit separators are not allowed".to_string()),
        });
    }

    BigDecimal::from_str(raw).map_err(|source| RecordError::InvalidPrice {
        value: raw.to_string(),
        source,
    })
}
