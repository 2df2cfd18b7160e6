//! Lift tokens and kilogram values.
//!
//! A lift arrives as free text: `100`, `100kg`, `5x100` or `5x100kg`. The
//! rep notation is converted to an estimated one-rep max before it is stored,
//! so every value in the row store is a plain kilogram figure.

use crate::error::{RecordError, Result};
use crate::estimate;

/// Convert a raw lift token into kilograms.
///
/// Rep notation wins over the `kg` suffix: `5x100kg` is an estimate, not a
/// malformed weight.
pub fn normalize_lift(raw: &str) -> Result<f64> {
    let token = raw.trim().to_lowercase();
    if token.contains('x') {
        return estimate::one_rep_max(&token);
    }
    match token.strip_suffix("kg") {
        Some(number) => parse_weight(number, raw),
        None => parse_weight(&token, raw),
    }
}

/// Parse a bare kilogram figure. `raw` is the original token, used in errors.
pub(crate) fn parse_weight(text: &str, raw: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|kg| kg.is_finite() && *kg >= 0.0)
        .ok_or_else(|| RecordError::InvalidLift(raw.to_string()))
}

/// Render a computed kilogram value.
///
/// Whole numbers keep one decimal place (`110.0`); anything else uses the
/// shortest representation that round-trips (`116.66666666666667`).
/// Magnitudes below `1e-4` or from `1e16` up switch to exponent form with a
/// signed, two-digit exponent (`1e-05`, `1.5e+16`).
pub fn format_kg(kg: f64) -> String {
    if !kg.is_finite() || kg == 0.0 {
        return format!("{kg:.1}");
    }
    let sci = format!("{kg:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{kg}");
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else if kg.fract() == 0.0 {
        format!("{kg:.1}")
    } else {
        format!("{kg}")
    }
}
