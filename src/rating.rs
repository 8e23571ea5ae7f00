use crate::error::{RecordError, RecordResult};
use crate::models::RatingScale;

/// Separator between scale name and score, e.g. `Parker: 94`.
pub const RATING_SEPARATOR: &str = ": ";

/// Parse a raw rating token such as `"Robinson: 18"` into a 0-100 score.
///
/// The token must contain exactly one `": "` separator. The score is parsed
/// before the scale is checked, so a non-numeric score on an unknown scale
/// reports the numeric failure.
pub fn parse_rating(raw: &str) -> RecordResult<f64> {
    let parts: Vec<&str> = raw.split(RATING_SEPARATOR).collect();
    let [scale, score] = parts.as_slice() else {
        return Err(RecordError::InvalidRatingInput(raw.to_string()));
    };

    let value: f64 = score
        .parse()
        .map_err(|source| RecordError::InvalidRatingValue {
            value: score.to_string(),
            source,
        })?;
    if !value.is_finite() {
        return Err(RecordError::NonFiniteRating {
            value: score.to_string(),
        });
    }

    let scale: RatingScale = scale
        .parse()
        .map_err(RecordError::InvalidRatingScale)?;

    Ok(scale.normalize(value))
}
